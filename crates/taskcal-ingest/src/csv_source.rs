//! CSV task-list ingestion (§6.1, §11.1).

use std::path::Path;

use taskcal_core::RawTask;

use crate::error::IngestError;

const REQUIRED_COLUMNS: [&str; 4] = ["id", "name", "start_date", "end_date"];

/// Read and deserialize every record in a CSV task list. Unknown columns are
/// ignored by `RawTask`'s deserializer; missing required columns fail fast
/// with the full list rather than a cryptic per-row error.
pub fn read_tasks_from_path(path: &Path) -> Result<Vec<RawTask>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_tasks_from_str(&content, &path.display().to_string())
}

/// Same as [`read_tasks_from_path`] but over an in-memory string, for tests
/// and embedded callers. `label` is used only to annotate error messages.
pub fn read_tasks_from_str(content: &str, label: &str) -> Result<Vec<RawTask>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: label.to_string(),
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?
        .clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            path: label.to_string(),
            columns: missing.join(", "),
        });
    }

    let mut tasks = Vec::new();
    for record in reader.deserialize() {
        let task: RawTask = record.map_err(|source| IngestError::Csv {
            path: label.to_string(),
            line: source.position().map(|p| p.line()).unwrap_or(0),
            source,
        })?;
        tasks.push(task);
    }
    Ok(tasks)
}
