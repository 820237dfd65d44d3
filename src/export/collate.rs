//! Name ordering for the exported sheet.
//!
//! Follows the Korean collation convention: Hangul first (in dictionary
//! order, a bare initial consonant right before the syllables that start
//! with it), then Hanja, then Latin and other scripts. Letter case only
//! breaks ties, lowercase first.

use std::cmp::Ordering;

// Compatibility jamo consonants (U+3131..) mapped to their initial index.
const COMPAT_INITIALS: [(char, u32); 19] = [
    ('ㄱ', 0),
    ('ㄲ', 1),
    ('ㄴ', 2),
    ('ㄷ', 3),
    ('ㄸ', 4),
    ('ㄹ', 5),
    ('ㅁ', 6),
    ('ㅂ', 7),
    ('ㅃ', 8),
    ('ㅅ', 9),
    ('ㅆ', 10),
    ('ㅇ', 11),
    ('ㅈ', 12),
    ('ㅉ', 13),
    ('ㅊ', 14),
    ('ㅋ', 15),
    ('ㅌ', 16),
    ('ㅍ', 17),
    ('ㅎ', 18),
];

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Script {
    Space,
    Punct,
    Digit,
    Hangul,
    Han,
    Latin,
    Other,
}

fn primary_key(c: char) -> (Script, u32) {
    let cp = c as u32;

    if c.is_whitespace() {
        return (Script::Space, cp);
    }
    if c.is_ascii_digit() {
        return (Script::Digit, cp);
    }
    if (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&cp) {
        let idx = cp - SYLLABLE_BASE;
        let (l, v, t) = (idx / 588, (idx % 588) / 28, idx % 28);
        return (Script::Hangul, l * 10_000 + (v + 1) * 100 + t);
    }
    if let Some((_, l)) = COMPAT_INITIALS.iter().find(|(j, _)| *j == c) {
        return (Script::Hangul, l * 10_000);
    }
    if (0x3131..=0x318E).contains(&cp) || (0x1100..=0x11FF).contains(&cp) {
        // vowels and archaic jamo: after every modern syllable
        return (Script::Hangul, 200_000 + cp);
    }
    if (0x4E00..=0x9FFF).contains(&cp) || (0x3400..=0x4DBF).contains(&cp) {
        return (Script::Han, cp);
    }
    if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        let script = if folded.is_ascii() || ('\u{00C0}'..='\u{024F}').contains(&folded) {
            Script::Latin
        } else {
            Script::Other
        };
        return (script, folded as u32);
    }
    (Script::Punct, cp)
}

/// Case-insensitive comparison first, then lowercase-before-uppercase,
/// then raw code points so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let primary = a.chars().map(primary_key).cmp(b.chars().map(primary_key));
    if primary != Ordering::Equal {
        return primary;
    }

    let tertiary = a
        .chars()
        .map(|c| c.is_uppercase())
        .cmp(b.chars().map(|c| c.is_uppercase()));
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}
