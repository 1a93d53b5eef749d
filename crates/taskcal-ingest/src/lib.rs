//! # taskcal-ingest
//!
//! Reads the two inputs the layout engine needs: a CSV task list and an
//! optional YAML config overlay. Neither format is part of the core
//! algorithms (§5); this crate exists purely at the input boundary and
//! depends on nothing but `taskcal-core`'s data types.

pub mod config_source;
pub mod csv_source;
pub mod error;

pub use config_source::{read_config_from_path, read_config_from_str};
pub use csv_source::{read_tasks_from_path, read_tasks_from_str};
pub use error::IngestError;
