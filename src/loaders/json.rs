//! JSON upload normalisation.

use serde_json::Value;

use super::{coerce_id, coerce_time, LoadError, DEFAULT_CREATED_BY, DEFAULT_OBJECTIVE};
use crate::models::{Case, CaseMetadata, Job, MachineOption, Operation};

const DEFAULT_CASE_ID: &str = "JSON_Upload";
const DEFAULT_SOURCE: &str = "JSON Upload";

/// Normalises a JSON upload into a [`Case`].
///
/// A value carrying `case_id`, `jobs` and `metadata` is read as a
/// standardized case. Anything else is read as the loose shape:
///
/// ```text
/// { "CaseID"?, "Source"?, "Objective"?, "CreatedBy"?,
///   "Jobs": [ { "JobID", "Operations": [ { "OperationID",
///       "Machines": [ { "Machine", "ProcessingTime" } ] } ] } ] }
/// ```
///
/// `case_id`, when given, overrides the ID found in the upload. Missing
/// identifiers become empty strings, which validation rejects.
pub fn process_json(raw: Value, case_id: Option<&str>) -> Result<Case, LoadError> {
    let Value::Object(ref obj) = raw else {
        return Err(LoadError::UnexpectedShape(
            "top-level JSON value must be an object".into(),
        ));
    };

    if obj.contains_key("case_id") && obj.contains_key("jobs") && obj.contains_key("metadata") {
        let mut case: Case = serde_json::from_value(raw)?;
        if let Some(id) = case_id {
            case.case_id = id.to_string();
        }
        return Ok(case);
    }

    let case_id = case_id
        .map(str::to_string)
        .or_else(|| coerce_id(obj.get("CaseID")))
        .unwrap_or_else(|| DEFAULT_CASE_ID.to_string());

    let jobs = array(obj.get("Jobs"))
        .iter()
        .map(|job| Job {
            job_id: coerce_id(job.get("JobID")).unwrap_or_default(),
            operations: array(job.get("Operations"))
                .iter()
                .map(|op| Operation {
                    operation_id: coerce_id(op.get("OperationID")).unwrap_or_default(),
                    machines: array(op.get("Machines"))
                        .iter()
                        .map(|m| {
                            MachineOption::new(
                                coerce_id(m.get("Machine")).unwrap_or_default(),
                                coerce_time(m.get("ProcessingTime")),
                            )
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    let label = |key: &str, default: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    };
    let metadata = CaseMetadata::new(
        label("Source", DEFAULT_SOURCE),
        label("Objective", DEFAULT_OBJECTIVE),
        label("CreatedBy", DEFAULT_CREATED_BY),
    );

    tracing::debug!(case = %case_id, "normalised loose JSON upload");
    Ok(Case {
        case_id,
        jobs,
        metadata,
    })
}

fn array(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
