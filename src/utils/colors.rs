//! ANSI color helper utilities for terminal output.

use crate::ui::messages::colors_enabled;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Present → green, absent → red.
pub fn color_for_presence(present: bool) -> &'static str {
    if present { GREEN } else { RED }
}

/// Attendance rate color:
/// \>= 80 → green
/// \>= 50 → yellow
/// below → red
pub fn color_for_rate(rate: u32) -> &'static str {
    if rate >= 80 {
        GREEN
    } else if rate >= 50 {
        YELLOW
    } else {
        RED
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    if !colors_enabled() {
        return value.to_string();
    }
    format!("{color}{value}{RESET}")
}
