//! Formatting utilities used for CLI outputs.

use crate::core::attendance::AttendanceStatus;
use crate::utils::colors::{GREY, RESET, color_for_status};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Width of the attendance bar in cells.
pub const BAR_WIDTH: usize = 20;

/// Number of filled cells for `percent` on a bar of `width` cells.
pub fn filled_cells(percent: u8, width: usize) -> usize {
    (usize::from(percent.min(100)) * width + 50) / 100
}

/// `[██████████░░░░░░░░░░]  50%`, coloured by attendance status.
pub fn attendance_bar(percent: u8, status: AttendanceStatus) -> String {
    let filled = filled_cells(percent, BAR_WIDTH);
    let color = color_for_status(status);
    format!(
        "[{color}{}{GREY}{}{RESET}] {color}{:>3}%{RESET}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// Wraps `text` to `width` columns, indenting every line by `indent` spaces.
pub fn wrap_indented(text: &str, width: usize, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let options = textwrap::Options::new(width)
        .initial_indent(&pad)
        .subsequent_indent(&pad);
    textwrap::fill(text, options)
}
