//! # taskcal-solver
//!
//! Builds a month's calendar grid, indexes normalized tasks onto it, and
//! assigns each task the vertical track it occupies for its whole run in
//! that month. Depends only on `taskcal-core`: the renderer consumes this
//! crate's output but this crate never reaches into rendering concerns.

pub mod day_indexer;
pub mod month_builder;
pub mod normalize;
pub mod track_assigner;

use std::rc::Rc;

use taskcal_core::{Config, Month, RawTask, Task, TrackAssignment, Warning};

pub use day_indexer::index_tasks;
pub use month_builder::build_month;
pub use normalize::normalize_tasks;
pub use track_assigner::assign_tracks;

/// Run TaskNormalizer → MonthBuilder → DayIndexer → TrackAssigner for one
/// month, collecting every recoverable `Warning` along the way. This is the
/// crate's one entry point; callers needing finer control can call the
/// individual stage functions directly.
pub fn build_layout(
    raw_tasks: Vec<RawTask>,
    year: i32,
    month: u32,
    config: &Config,
) -> (Month, TrackAssignment, Vec<Warning>) {
    let (normalized, mut warnings) = normalize_tasks(raw_tasks);
    let tasks: Vec<Rc<Task>> = normalized.into_iter().map(Rc::new).collect();

    let mut grid = build_month(year, month, config);
    index_tasks(&mut grid, tasks.clone());

    let month_start = grid.first_day();
    let month_end = grid.last_day();
    let touching: Vec<Rc<Task>> = tasks
        .into_iter()
        .filter(|t| t.start_date <= month_end && t.end_date >= month_start)
        .collect();

    let (assignment, track_warnings) = assign_tracks(touching, config.max_task_tracks, year, month);
    warnings.extend(track_warnings);

    (grid, assignment, warnings)
}
