use crate::models::Roster;

/// Head-count for one roster, as shown under the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    /// Whole percent, 0 for an empty roster.
    pub rate: u32,
}

impl RosterSummary {
    pub fn of(roster: &Roster) -> Self {
        let total = roster.len();
        let present = roster.present_count();
        Self {
            total,
            present,
            absent: total - present,
            rate: rounded_percent(present, total),
        }
    }
}

/// `round(100 * part / whole)` with halves rounded up, 0 when `whole` is 0.
pub fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u32
}
