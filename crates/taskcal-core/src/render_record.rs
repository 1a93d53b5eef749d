//! The per-cell render record handed to the LaTeX emitter (§3, §4.5).

use chrono::NaiveDate;

/// Whether a task bar is starting today or continuing from a prior day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskState {
    Start,
    Continue,
}

/// Which LaTeX macro family renders this bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MacroKind {
    Task,
    Milestone,
}

/// One task's bar geometry and content on a specific day cell (§4.5.1, §4.5.2).
#[derive(Clone, Debug)]
pub struct TaskBar {
    pub task_id: String,
    pub track: u32,
    pub state: TaskState,
    /// Column span in this week row, already truncated at the row boundary.
    pub cols: u32,
    pub macro_kind: MacroKind,
    /// Decimal `"R,G,B"` color.
    pub rgb_color: String,
    /// Empty on a continuation day (§4.5.2 "Continuation silence").
    pub escaped_name: String,
    pub escaped_description: String,
}

/// Which of the three cell shapes this cell uses (§4.5.3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellLayout {
    Empty,
    InCell,
    Overlay,
}

/// Everything the LaTeX emitter needs to render one day cell.
#[derive(Clone, Debug)]
pub struct CellRenderRecord {
    pub date: NaiveDate,
    pub day_number_text: String,
    /// In the config's configured cell task order (§4.5.3).
    pub bars: Vec<TaskBar>,
    pub max_cols: u32,
    pub layout: CellLayout,
}

impl CellRenderRecord {
    pub fn empty(date: NaiveDate, day_number_text: String) -> Self {
        Self {
            date,
            day_number_text,
            bars: Vec::new(),
            max_cols: 0,
            layout: CellLayout::Empty,
        }
    }
}
