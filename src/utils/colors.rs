/// ANSI color helper utilities for terminal output.
use crate::core::attendance::AttendanceStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const YELLOW: &str = "\x1b[33m";

/// At risk → red, satisfactory → green.
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::AtRisk => RED,
        AttendanceStatus::Satisfactory => GREEN,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Greys out placeholder text so it doesn't read like real content.
pub fn colorize_placeholder(value: &str, is_placeholder: bool) -> String {
    if is_placeholder {
        colorize(value, GREY)
    } else {
        value.to_string()
    }
}

/// Color of an audit-log operation in `log --print`.
pub fn color_for_operation(op: &str) -> &'static str {
    match op {
        "enroll" => GREEN,
        "drop" => RED,
        "mark" => YELLOW,
        "add_course" | "add_student" => CYAN,
        "migration_applied" => MAGENTA,
        "init" => BLUE,
        _ => RESET,
    }
}
