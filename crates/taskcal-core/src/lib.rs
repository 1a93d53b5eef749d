//! # taskcal-core
//!
//! Domain model for the taskcal calendar layout engine.
//!
//! This crate provides:
//! - Task types: `RawTask` (ingest input) and `Task` (month-scoped, normalized)
//! - Calendar grid types: `Month`, `WeekRow`, `DayCell`
//! - The `TrackAssignment` produced by the stacking algorithm
//! - Per-cell render records consumed by the LaTeX emitter
//! - Shared escape and color utilities used by both the solver and renderer
//!
//! ## Example
//!
//! ```rust
//! use taskcal_core::{Config, Weekday};
//!
//! let config = Config {
//!     first_weekday: Weekday::Monday,
//!     ..Config::default()
//! };
//! assert_eq!(config.max_task_tracks, 100);
//! ```

pub mod color;
pub mod config;
pub mod month;
pub mod render_record;
pub mod task;
pub mod text;
pub mod track;
pub mod warning;

pub use color::{parse_hex_color, resolve_color, Rgb, DEFAULT_GRAY};
pub use config::{AnchorScope, CellTaskOrder, Config, Weekday};
pub use month::{DayCell, Month, WeekRow};
pub use render_record::{CellLayout, CellRenderRecord, MacroKind, TaskBar, TaskState};
pub use task::{RawTask, Task};
pub use text::escape_latex;
pub use track::{TrackAssignment, DEFAULT_MAX_TRACKS};
pub use warning::Warning;
