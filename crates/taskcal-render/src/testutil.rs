//! Test-only helpers shared by the geometry and fragment unit tests.
#![cfg(test)]

use std::rc::Rc;

use chrono::NaiveDate;
use taskcal_core::{Config, DayCell, Month, Task};

/// A `Month` carrying just enough metadata (`first_weekday`) for
/// `Month::week_column` to work, plus a single `DayCell` at `at` holding
/// `task` (if given). The month's `weeks` are intentionally empty: these
/// tests drive `build_cell_record` directly rather than through a real grid.
pub fn single_task_grid(config: &Config, task: Option<(Rc<Task>, NaiveDate)>) -> (Month, DayCell) {
    let month = Month {
        year: 2025,
        month: 2,
        first_weekday: config.first_weekday,
        weeks: Vec::new(),
    };
    let cell = match task {
        Some((t, date)) => {
            let mut cell = DayCell::in_month(date);
            cell.tasks.push(t);
            cell
        }
        None => DayCell::in_month(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()),
    };
    (month, cell)
}
