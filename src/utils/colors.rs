/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Staffing badge color: green when enough guards are working.
pub fn color_for_staffing(fully_staffed: bool) -> &'static str {
    if fully_staffed {
        GREEN
    } else {
        RED
    }
}

/// Deviating durations are highlighted in yellow.
pub fn color_for_hours(deviating: bool) -> &'static str {
    if deviating { YELLOW } else { RESET }
}
