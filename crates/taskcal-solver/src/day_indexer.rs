//! DayIndexer (§4.3): populate each in-month day cell with the tasks active
//! on that date.

use std::rc::Rc;

use taskcal_core::{Month, Task};

/// Populate `month`'s day cells with references to every task that
/// intersects it. `tasks` need not be pre-sorted; this function sorts a
/// local copy by `start_date` ascending (ties by `id`) so the early-exit
/// optimization in §4.3 applies and so every cell's `tasks` ends up in
/// ascending `start_date` order.
pub fn index_tasks(month: &mut Month, tasks: Vec<Rc<Task>>) {
    let mut sorted = tasks;
    sorted.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));

    let month_start = month.first_day();
    let month_end = month.last_day();

    for task in &sorted {
        if task.start_date > month_end {
            break;
        }
        if task.end_date < month_start {
            continue;
        }
        let range_start = task.start_date.max(month_start);
        let range_end = task.end_date.min(month_end);
        for cell in month.iter_in_month_cells_mut() {
            if cell.date >= range_start && cell.date <= range_end {
                cell.tasks.push(Rc::clone(task));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use taskcal_core::Config;

    use super::*;
    use crate::month_builder::build_month;

    fn task(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Rc<Task> {
        Rc::new(Task {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category: String::new(),
            phase: String::new(),
            status: String::new(),
            assignee: String::new(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            is_milestone: false,
            priority: 0,
            escaped_name: id.to_string(),
            escaped_description: String::new(),
            escaped_category: String::new(),
            escaped_phase: String::new(),
            rgb_color: "0,0,0".to_string(),
        })
    }

    #[test]
    fn task_fully_inside_month_touches_every_day_in_range() {
        let config = Config::default();
        let mut month = build_month(2025, 2, &config);
        index_tasks(&mut month, vec![task("A", (2025, 2, 3), (2025, 2, 5))]);
        let touched: Vec<_> = month
            .iter_in_month_cells()
            .filter(|c| !c.tasks.is_empty())
            .map(|c| c.date)
            .collect();
        assert_eq!(
            touched,
            vec![
                NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
            ]
        );
    }

    #[test]
    fn task_starting_before_month_is_truncated_to_month_start() {
        let config = Config::default();
        let mut month = build_month(2025, 2, &config);
        index_tasks(&mut month, vec![task("A", (2025, 1, 25), (2025, 2, 2))]);
        let touched: Vec<_> = month
            .iter_in_month_cells()
            .filter(|c| !c.tasks.is_empty())
            .map(|c| c.date)
            .collect();
        assert_eq!(
            touched,
            vec![
                NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn task_entirely_outside_month_touches_nothing() {
        let config = Config::default();
        let mut month = build_month(2025, 2, &config);
        index_tasks(&mut month, vec![task("A", (2025, 3, 1), (2025, 3, 5))]);
        assert!(month.iter_in_month_cells().all(|c| c.tasks.is_empty()));
    }

    #[test]
    fn cell_tasks_are_in_ascending_start_date_order() {
        let config = Config::default();
        let mut month = build_month(2025, 2, &config);
        index_tasks(
            &mut month,
            vec![
                task("late", (2025, 2, 1), (2025, 2, 10)),
                task("early", (2025, 1, 20), (2025, 2, 10)),
            ],
        );
        let day5 = month
            .iter_in_month_cells()
            .find(|c| c.date == NaiveDate::from_ymd_opt(2025, 2, 5).unwrap())
            .unwrap();
        let ids: Vec<_> = day5.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }
}
