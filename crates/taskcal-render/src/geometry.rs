//! Per-cell geometry computation (§4.5.1–§4.5.3): turns a populated day cell
//! plus its month's track assignment into a `CellRenderRecord`.

use taskcal_core::{
    CellLayout, CellRenderRecord, DayCell, MacroKind, Month, TaskBar, TaskState, TrackAssignment,
};

/// Build the render record for one in-month day cell.
pub fn build_cell_record(month: &Month, cell: &DayCell, assignment: &TrackAssignment) -> CellRenderRecord {
    let column = month.week_column(cell.date);
    let remaining_columns_in_row = 7 - column;

    let mut bars: Vec<TaskBar> = cell
        .tasks
        .iter()
        .map(|task| {
            let track = assignment.track_of(&task.id).unwrap_or(0);
            let state = if task.start_date == cell.date {
                TaskState::Start
            } else {
                TaskState::Continue
            };
            let span_in_row = (task.end_date - cell.date).num_days() + 1;
            let cols = (span_in_row.max(1) as u32).min(remaining_columns_in_row);

            let (escaped_name, escaped_description) = match state {
                TaskState::Start => (task.escaped_name.clone(), task.escaped_description.clone()),
                TaskState::Continue => (String::new(), String::new()),
            };

            TaskBar {
                task_id: task.id.clone(),
                track,
                state,
                cols,
                macro_kind: if task.is_milestone { MacroKind::Milestone } else { MacroKind::Task },
                rgb_color: task.rgb_color.clone(),
                escaped_name,
                escaped_description,
            }
        })
        .collect();

    // §4.5.3: stacked in track order, ascending.
    bars.sort_by_key(|bar| bar.track);

    let max_cols = bars.iter().map(|bar| bar.cols).max().unwrap_or(0);
    let layout = if bars.is_empty() {
        CellLayout::Empty
    } else if max_cols > 1 {
        CellLayout::Overlay
    } else {
        CellLayout::InCell
    };

    let mut record = CellRenderRecord::empty(cell.date, cell.date.format("%-d").to_string());
    record.bars = bars;
    record.max_cols = max_cols;
    record.layout = layout;
    record
}
