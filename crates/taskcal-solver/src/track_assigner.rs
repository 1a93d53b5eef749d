//! TrackAssigner (§4.4): the vertical-stacking algorithmic core.

use std::rc::Rc;

use taskcal_core::{Task, TrackAssignment, Warning};

/// Assign every task touching a month a track such that no two
/// date-overlapping tasks share one, and a task's track is constant across
/// every day it occupies. `max_tracks` caps the number of tracks tried
/// before an overflow is reported (tasks beyond the cap are forced onto
/// track 0 and will visually collide, but are never dropped).
pub fn assign_tracks(
    mut tasks: Vec<Rc<Task>>,
    max_tracks: usize,
    year: i32,
    month: u32,
) -> (TrackAssignment, Vec<Warning>) {
    tasks.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| b.priority.cmp(&a.priority))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut tracks: Vec<Vec<Rc<Task>>> = Vec::new();
    let mut assignment = TrackAssignment::new();
    let mut overflowed = Vec::new();

    for task in &tasks {
        let free_track = (0..tracks.len())
            .find(|&k| tracks[k].iter().all(|occupant| !occupant.overlaps(task)));

        match free_track {
            Some(k) => {
                tracks[k].push(Rc::clone(task));
                assignment.insert(task.id.clone(), k as u32);
            }
            None if tracks.len() < max_tracks => {
                tracks.push(vec![Rc::clone(task)]);
                assignment.insert(task.id.clone(), tracks.len() as u32 - 1);
            }
            None => {
                tracks[0].push(Rc::clone(task));
                assignment.insert(task.id.clone(), 0);
                overflowed.push(task.id.clone());
            }
        }
    }

    let mut warnings = Vec::new();
    if !overflowed.is_empty() {
        warnings.push(Warning::TrackOverflow {
            year,
            month,
            offending_task_ids: overflowed,
        });
    }

    (assignment, warnings)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn task(id: &str, priority: i32, start: (i32, u32, u32), end: (i32, u32, u32)) -> Rc<Task> {
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
            priority,
            escaped_name: id.to_string(),
            escaped_description: String::new(),
            escaped_category: String::new(),
            escaped_phase: String::new(),
            rgb_color: "0,0,0".to_string(),
        })
    }

    #[test]
    fn non_overlapping_tasks_share_track_zero() {
        let tasks = vec![
            task("A", 0, (2025, 2, 1), (2025, 2, 3)),
            task("B", 0, (2025, 2, 4), (2025, 2, 6)),
        ];
        let (assignment, warnings) = assign_tracks(tasks, 100, 2025, 2);
        assert_eq!(assignment.track_of("A"), Some(0));
        assert_eq!(assignment.track_of("B"), Some(0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn overlapping_tasks_get_distinct_tracks() {
        let tasks = vec![
            task("A", 0, (2025, 2, 1), (2025, 2, 10)),
            task("B", 0, (2025, 2, 5), (2025, 2, 8)),
        ];
        let (assignment, _) = assign_tracks(tasks, 100, 2025, 2);
        assert_ne!(assignment.track_of("A"), assignment.track_of("B"));
    }

    #[test]
    fn tracks_are_compacted_downward_when_a_track_frees_up() {
        let tasks = vec![
            task("A", 0, (2025, 2, 1), (2025, 2, 3)),
            task("B", 0, (2025, 2, 1), (2025, 2, 3)),
            task("C", 0, (2025, 2, 4), (2025, 2, 6)),
        ];
        let (assignment, _) = assign_tracks(tasks, 100, 2025, 2);
        assert_eq!(assignment.track_of("A"), Some(0));
        assert_eq!(assignment.track_of("B"), Some(1));
        // C no longer overlaps A or B, so it reuses track 0.
        assert_eq!(assignment.track_of("C"), Some(0));
    }

    #[test]
    fn overflow_forces_track_zero_and_warns_instead_of_dropping() {
        let tasks: Vec<_> = (0..3)
            .map(|i| task(&format!("T{i}"), 0, (2025, 2, 1), (2025, 2, 28)))
            .collect();
        let (assignment, warnings) = assign_tracks(tasks, 2, 2025, 2);
        assert_eq!(assignment.len(), 3);
        assert_eq!(warnings.len(), 1);
        match &warnings[0] {
            Warning::TrackOverflow { offending_task_ids, .. } => {
                assert_eq!(offending_task_ids, &["T2".to_string()]);
            }
            other => panic!("expected TrackOverflow, got {other:?}"),
        }
    }

    #[test]
    fn higher_priority_task_is_placed_before_lower_priority_at_same_start() {
        let tasks = vec![
            task("low", 0, (2025, 2, 1), (2025, 2, 5)),
            task("high", 5, (2025, 2, 1), (2025, 2, 5)),
        ];
        let (assignment, _) = assign_tracks(tasks, 100, 2025, 2);
        assert_eq!(assignment.track_of("high"), Some(0));
        assert_eq!(assignment.track_of("low"), Some(1));
    }
}
