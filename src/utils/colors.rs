/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Count color: 0 → green, anything else → red.
pub fn color_for_count(value: usize) -> &'static str {
    if value == 0 { GREEN } else { RED }
}
