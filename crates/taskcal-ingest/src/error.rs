use thiserror::Error;

/// Failures reading or parsing the task list / config inputs. Distinct from
/// `taskcal_core::Warning`: these abort ingestion entirely because the input
/// could not be understood at all, rather than one task being malformed.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV record in {path} at line {line}: {source}")]
    Csv {
        path: String,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is missing required column(s): {columns}")]
    MissingColumns { path: String, columns: String },

    #[error("failed to parse config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
