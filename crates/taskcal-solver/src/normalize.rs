//! TaskNormalizer (§4.1): raw CSV rows → month-independent `Task`s with
//! escaping and color resolution already computed.

use taskcal_core::{escape_latex, resolve_color, RawTask, Task, Warning};

/// Normalize every raw task once. Tasks with `start_date > end_date` are
/// dropped and reported as `Warning::InvalidDateRange`; everything else
/// always produces a `Task`, falling back to default gray on a malformed
/// explicit color (`Warning::InvalidColor`).
pub fn normalize_tasks(raw_tasks: Vec<RawTask>) -> (Vec<Task>, Vec<Warning>) {
    let mut tasks = Vec::with_capacity(raw_tasks.len());
    let mut warnings = Vec::new();

    for raw in raw_tasks {
        if raw.start_date > raw.end_date {
            warnings.push(Warning::InvalidDateRange {
                task_id: raw.id,
                start: raw.start_date,
                end: raw.end_date,
            });
            continue;
        }

        let (rgb, invalid_raw) = resolve_color(raw.color.as_deref(), &raw.category);
        if let Some(bad) = invalid_raw {
            warnings.push(Warning::InvalidColor {
                task_id: raw.id.clone(),
                raw: bad,
            });
        }

        tasks.push(Task {
            id: raw.id,
            name: raw.name.clone(),
            description: raw.description.clone(),
            category: raw.category.clone(),
            phase: raw.phase.clone(),
            status: raw.status,
            assignee: raw.assignee,
            start_date: raw.start_date,
            end_date: raw.end_date,
            is_milestone: raw.is_milestone,
            priority: raw.priority,
            escaped_name: escape_latex(&raw.name),
            escaped_description: escape_latex(&raw.description),
            escaped_category: escape_latex(&raw.category),
            escaped_phase: escape_latex(&raw.phase),
            rgb_color: rgb.to_decimal_string(),
        });
    }

    (tasks, warnings)
}
