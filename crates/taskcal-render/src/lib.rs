//! # taskcal-render
//!
//! CellRenderer (§4.5): turns a populated, track-assigned `Month` into the
//! LaTeX typesetting directives the calendar document is built from.
//!
//! This crate provides:
//! - [`geometry::build_cell_record`] — per-cell bar geometry and layout
//!   selection, consuming a `Month` and its `TrackAssignment`.
//! - [`fragment::render_cell`] — the LaTeX fragment for one render record.
//! - [`header::render_month_header`] — the per-month navigation fragment.
//! - [`palette::build_palette`] — the per-month color legend (§4.6).
//! - [`render_month`] — the crate's one entry point, composing all four.
//!
//! Rendering never fails: every input the layout engine hands this crate
//! has already passed normalization, so fragment emission is infallible and
//! returns plain `String`s rather than `Result`s.

pub mod fragment;
pub mod geometry;
pub mod header;
pub mod palette;
#[cfg(test)]
mod testutil;

use taskcal_core::{Config, Month, TrackAssignment};

pub use fragment::{anchor_key, render_blank_cell, render_cell};
pub use geometry::build_cell_record;
pub use header::render_month_header;
pub use palette::build_palette;

/// Every typesetting directive produced for one month (§6.2).
#[derive(Clone, Debug)]
pub struct MonthFragments {
    /// One fragment per grid cell (`weeks.len() * 7`), in row-major order
    /// (week by week, left to right) — the order the external typesetting
    /// layer concatenates them in. Placeholder cells (§3, §4.2) render as
    /// blanks that still occupy their column.
    pub cells: Vec<String>,
    pub header: String,
    /// `rgb -> escaped category`, sorted by RGB string (§4.6).
    pub palette: Vec<(String, String)>,
}

/// Render every cell of `month` (in-month and placeholder), plus its
/// navigation header and palette legend. `assignment` must come from the
/// same `Layout` call that populated `month` (§3 "Track assignments live
/// only during a single `Layout` call").
pub fn render_month(month: &Month, assignment: &TrackAssignment, config: &Config) -> MonthFragments {
    let cells = month
        .weeks
        .iter()
        .flat_map(|week| week.days.iter())
        .map(|cell| {
            if cell.in_month {
                let record = build_cell_record(month, cell, assignment);
                render_cell(&record, config)
            } else {
                render_blank_cell()
            }
        })
        .collect();

    MonthFragments {
        cells,
        header: render_month_header(month, config),
        palette: build_palette(month),
    }
}
