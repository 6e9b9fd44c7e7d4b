//! Ingestion adapters.
//!
//! Normalise loosely shaped uploads into the canonical [`Case`] so the
//! evaluator never special-cases input shape.
//!
//! # Sources
//!
//! | Adapter | Input |
//! |---------|-------|
//! | [`process_json`] | Standardized case JSON, or the loose `Jobs/Operations/Machines` shape |
//! | [`process_rows`] | Typed flat `(JobID, OperationID, MachineID, ProcessingTime)` rows |
//! | [`process_row_table`] | A JSON array of flat row objects |
//!
//! Processing times that are missing or not numeric become absent
//! (`None`) instead of failing the upload.
//!
//! [`Case`]: crate::models::Case

mod json;
mod rows;

pub use json::process_json;
pub use rows::{process_row_table, process_rows, FlatRow};

use serde_json::Value;
use thiserror::Error;

/// Objective label given to uploads that do not name one.
pub const DEFAULT_OBJECTIVE: &str = "Minimize Makespan";
/// Creator label given to uploads that do not name one.
pub const DEFAULT_CREATED_BY: &str = "Campus Heilbronn";

/// Ingestion failure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unexpected input shape: {0}")]
    UnexpectedShape(String),

    #[error("Malformed standardized case: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stringifies an identifier. `None` for null or missing values.
pub(crate) fn coerce_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Reads a processing time. Booleans count as 1 and 0; anything else not
/// coercible to a finite number becomes `None`.
pub(crate) fn coerce_time(value: Option<&Value>) -> Option<f64> {
    let time = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }?;
    time.is_finite().then_some(time)
}
