//! Flat tabular row normalisation.
//!
//! Rows arrive already split into fields, one per machine option. They are
//! grouped into jobs and operations by identifier.
//!
//! # Identifier order
//! Operation order is the job's precedence chain, so grouping order
//! matters. Within a group, identifiers sort numerically when every one of
//! them reads as a number (`2` before `10`), lexically otherwise.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use super::{coerce_id, coerce_time, LoadError, DEFAULT_CREATED_BY, DEFAULT_OBJECTIVE};
use crate::models::{Case, CaseMetadata, Job, MachineOption, Operation};

const SOURCE: &str = "CSV Upload";
const REQUIRED_COLUMNS: [&str; 3] = ["JobID", "OperationID", "MachineID"];

/// One `(job, operation, machine, time)` row of a flat upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatRow {
    #[serde(rename = "JobID", default)]
    pub job_id: Option<String>,
    #[serde(rename = "OperationID", default)]
    pub operation_id: Option<String>,
    #[serde(rename = "MachineID", default)]
    pub machine_id: Option<String>,
    #[serde(rename = "ProcessingTime", default)]
    pub processing_time: Option<f64>,
}

impl FlatRow {
    /// Creates a fully populated row.
    pub fn new(
        job_id: impl Into<String>,
        operation_id: impl Into<String>,
        machine_id: impl Into<String>,
        processing_time: Option<f64>,
    ) -> Self {
        Self {
            job_id: Some(job_id.into()),
            operation_id: Some(operation_id.into()),
            machine_id: Some(machine_id.into()),
            processing_time,
        }
    }
}

/// Groups flat rows into a [`Case`].
///
/// Rows missing any identifier are dropped. Jobs are ordered by job ID,
/// operations by operation ID within their job (see the module docs for
/// numeric IDs); machine options keep row order. Non-finite times become
/// absent.
pub fn process_rows(rows: &[FlatRow], case_id: &str) -> Case {
    let mut grouped: BTreeMap<&str, BTreeMap<&str, Vec<MachineOption>>> = BTreeMap::new();
    let mut dropped = 0usize;

    for row in rows {
        let (Some(job), Some(op), Some(machine)) = (
            row.job_id.as_deref(),
            row.operation_id.as_deref(),
            row.machine_id.as_deref(),
        ) else {
            dropped += 1;
            continue;
        };
        let time = row.processing_time.filter(|t| t.is_finite());
        grouped
            .entry(job)
            .or_default()
            .entry(op)
            .or_default()
            .push(MachineOption::new(machine, time));
    }

    if dropped > 0 {
        tracing::debug!(case = %case_id, dropped, "dropped rows missing identifiers");
    }

    let jobs = order_ids(grouped)
        .into_iter()
        .map(|(job_id, ops)| Job {
            job_id: job_id.to_string(),
            operations: order_ids(ops)
                .into_iter()
                .map(|(operation_id, machines)| Operation {
                    operation_id: operation_id.to_string(),
                    machines,
                })
                .collect(),
        })
        .collect();

    Case {
        case_id: case_id.to_string(),
        jobs,
        metadata: CaseMetadata::new(SOURCE, DEFAULT_OBJECTIVE, DEFAULT_CREATED_BY),
    }
}

/// Numeric value of an identifier such as `"10"` or `"2.5"`.
fn numeric_id(id: &str) -> Option<f64> {
    id.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Orders a group lexically, or numerically when every key is numeric.
fn order_ids<'a, T>(grouped: BTreeMap<&'a str, T>) -> Vec<(&'a str, T)> {
    let entries: Vec<(&'a str, T)> = grouped.into_iter().collect();
    let keys: Option<Vec<f64>> = entries.iter().map(|(id, _)| numeric_id(id)).collect();
    let Some(keys) = keys else {
        return entries;
    };

    let mut keyed: Vec<(f64, (&'a str, T))> = keys.into_iter().zip(entries).collect();
    // stable: equal values ("1", "1.0") keep lexical order
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

/// Reads a JSON array of row objects and groups it into a [`Case`].
///
/// The `JobID`, `OperationID` and `MachineID` columns must appear in at
/// least one row. Identifier values may be strings or numbers; processing
/// times that cannot be read as numbers become absent.
pub fn process_row_table(table: &Value, case_id: &str) -> Result<Case, LoadError> {
    let rows = table
        .as_array()
        .ok_or_else(|| LoadError::UnexpectedShape("row table must be a JSON array".into()))?;

    let mut columns = BTreeSet::new();
    for row in rows {
        let obj = row.as_object().ok_or_else(|| {
            LoadError::UnexpectedShape("every row must be a JSON object".into())
        })?;
        columns.extend(obj.keys().map(String::as_str));
    }
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !columns.contains(*c)) {
        return Err(LoadError::MissingColumn((*missing).to_string()));
    }

    let rows: Vec<FlatRow> = rows
        .iter()
        .map(|row| FlatRow {
            job_id: coerce_id(row.get("JobID")),
            operation_id: coerce_id(row.get("OperationID")),
            machine_id: coerce_id(row.get("MachineID")),
            processing_time: coerce_time(row.get("ProcessingTime")),
        })
        .collect();
    Ok(process_rows(&rows, case_id))
}
