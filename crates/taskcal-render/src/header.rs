//! Per-month navigation header fragment (§6.2 "one per Month for
//! navigation headers"). Not part of the day-cell geometry core, but still
//! this crate's responsibility since it consumes the same `Config` fields
//! (`header_angle_size_offset`, `clear_top_right_corner`).

use std::fmt::Write as _;

use taskcal_core::{Config, Month};

/// Render the month-page navigation header: prev/next angle glyphs sized by
/// `header_angle_size_offset`, with the top-right corner link suppressed
/// when `clear_top_right_corner` is set (e.g. the final month of a report).
pub fn render_month_header(month: &Month, config: &Config) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "\\calMonthHeader{{{offset}}}{{{clear_corner}}}{{{year}}}{{{month:02}}}",
        offset = config.header_angle_size_offset,
        clear_corner = if config.clear_top_right_corner { 1 } else { 0 },
        year = month.year,
        month = month.month,
    );
    out
}
