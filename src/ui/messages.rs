//! Operator-facing console messages.
//!
//! Every line gets an icon and a colour; `error` goes to stderr. Colours are
//! dropped when `NO_COLOR` is set.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// `false` when `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn decorate(style: Style, icon: &str) -> String {
    if colors_enabled() {
        style.bold().paint(icon).to_string()
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", decorate(Colour::Blue.normal(), ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", decorate(Colour::Green.normal(), ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", decorate(Colour::Yellow.normal(), ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", decorate(Colour::Red.normal(), ICON_ERR), msg);
}

/// Section header, e.g. above a roster listing.
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("====================== {msg}");
    if colors_enabled() {
        println!("{}\n", Colour::Blue.bold().paint(line));
    } else {
        println!("{line}\n");
    }
}
