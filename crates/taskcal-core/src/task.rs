//! Task types: the raw ingest record and the month-scoped normalized copy.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A task as it arrives from CSV ingest, before date/escape/color normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTask {
    /// Stable identifier, unique within the input set.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assignee: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_milestone_flag")]
    pub is_milestone: bool,
    #[serde(default)]
    pub priority: i32,
    /// Optional hex color, with or without a leading `#`.
    #[serde(default)]
    pub color: Option<String>,
}

/// Accepts `true`/`false`, `1`/`0`, `yes`/`no`, and a handful of severity
/// words a spreadsheet author might type in the milestone column (§6.1
/// "boolean-like; accepted tokens include true/false and severity words
/// mapped to truthiness"). Anything else is falsy.
fn deserialize_milestone_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(is_truthy_token(&raw))
}

fn is_truthy_token(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "milestone" | "critical" | "high"
    )
}

/// A task after normalization: dates truncated to day precision, display
/// strings pre-escaped, and color pre-resolved to a decimal RGB triple.
///
/// Normalized tasks are month-independent; a `Task` is cloned by reference
/// (via `Rc`) into every `DayCell` it occupies within a given month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub phase: String,
    pub status: String,
    pub assignee: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_milestone: bool,
    pub priority: i32,
    pub escaped_name: String,
    pub escaped_description: String,
    pub escaped_category: String,
    pub escaped_phase: String,
    /// Decimal `"R,G,B"` form for LaTeX color macros.
    pub rgb_color: String,
}

impl Task {
    /// Number of inclusive days this task spans.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether this task is active (touches) the given date.
    pub fn active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether this task's date range overlaps another's, inclusive on both ends.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Task {
        Task {
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
        }
    }

    #[test]
    fn duration_days_inclusive() {
        let t = task("a", (2025, 2, 3), (2025, 2, 5));
        assert_eq!(t.duration_days(), 3);
    }

    #[test]
    fn single_day_task_duration_is_one() {
        let t = task("a", (2025, 2, 3), (2025, 2, 3));
        assert_eq!(t.duration_days(), 1);
    }

    #[test]
    fn overlap_detection() {
        let a = task("a", (2025, 2, 3), (2025, 2, 7));
        let b = task("b", (2025, 2, 5), (2025, 2, 9));
        let c = task("c", (2025, 2, 10), (2025, 2, 12));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn adjacent_non_overlapping_ranges_do_not_overlap() {
        let a = task("a", (2025, 2, 3), (2025, 2, 5));
        let b = task("b", (2025, 2, 6), (2025, 2, 9));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn milestone_flag_accepts_boolean_and_severity_tokens() {
        assert!(is_truthy_token("true"));
        assert!(is_truthy_token("TRUE"));
        assert!(is_truthy_token("yes"));
        assert!(is_truthy_token("critical"));
        assert!(!is_truthy_token("false"));
        assert!(!is_truthy_token(""));
        assert!(!is_truthy_token("low"));
    }
}
