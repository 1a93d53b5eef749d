//! Recoverable, per-task/per-month diagnostics (§7).
//!
//! These are never fatal: the pipeline always produces a complete month and
//! returns `(fragments, warnings)`. Modeled as an enum collected into a
//! `Vec<Warning>` rather than surfaced through `Result`, since per §7 they
//! never abort anything downstream of where they're raised.

use std::fmt;

use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// `start_date > end_date` at normalization; the task is dropped.
    InvalidDateRange {
        task_id: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// A `color` field that did not parse as six hex digits; default gray
    /// was substituted.
    InvalidColor { task_id: String, raw: String },
    /// More than `max_task_tracks` tasks were concurrently active; the
    /// listed tasks were forced onto track 0 and will visually overlap.
    TrackOverflow {
        year: i32,
        month: u32,
        offending_task_ids: Vec<String>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InvalidDateRange { task_id, start, end } => write!(
                f,
                "task '{task_id}' has start_date {start} after end_date {end}; dropped"
            ),
            Warning::InvalidColor { task_id, raw } => write!(
                f,
                "task '{task_id}' has malformed color '{raw}'; substituted default gray"
            ),
            Warning::TrackOverflow {
                year,
                month,
                offending_task_ids,
            } => write!(
                f,
                "{year}-{month:02}: track overflow, {} task(s) forced onto track 0: {}",
                offending_task_ids.len(),
                offending_task_ids.join(", ")
            ),
        }
    }
}
