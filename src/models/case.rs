//! Case (problem instance) model.
//!
//! A case describes one flexible job-shop instance: jobs made of ordered
//! operations, each operation processable on one of several alternative
//! machines with a machine-specific processing time.
//!
//! # Precedence
//! The order of operations inside a job is the precedence chain: operation
//! *k* may not start before operation *k-1* of the same job has finished.
//! There is no precedence across jobs.
//!
//! # Reference
//! Brandimarte (1993), "Routing and scheduling in a flexible job shop by tabu search"

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One flexible job-shop problem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Case identifier.
    pub case_id: String,
    /// Jobs in case order.
    pub jobs: Vec<Job>,
    /// Descriptive metadata. Carried through, never read by the evaluator.
    pub metadata: CaseMetadata,
}

/// Opaque descriptive metadata attached to a case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseMetadata {
    /// Where the case came from (e.g. "CSV Upload").
    pub source: String,
    /// Objective label (e.g. "Minimize Makespan").
    pub objective: String,
    /// Author or organisation.
    pub created_by: String,
}

/// A job: an ordered chain of operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier, unique within the case.
    pub job_id: String,
    /// Operations in precedence order.
    pub operations: Vec<Operation>,
}

/// An operation and the machines able to process it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation identifier, unique within its job.
    pub operation_id: String,
    /// Alternative machines. Empty = never schedulable.
    pub machines: Vec<MachineOption>,
}

/// A (machine, processing time) alternative for an operation.
///
/// `time == None` marks a machine that is listed but cannot actually
/// process the operation. It is not a zero-cost option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineOption {
    /// Machine identifier.
    pub id: String,
    /// Processing time (> 0 when present).
    #[serde(default)]
    pub time: Option<f64>,
}

/// Flat `(job, operation, machine, time)` view of a single machine option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    #[serde(rename = "JobID")]
    pub job_id: String,
    #[serde(rename = "OperationID")]
    pub operation_id: String,
    #[serde(rename = "MachineID")]
    pub machine_id: String,
    #[serde(rename = "ProcessingTime")]
    pub processing_time: Option<f64>,
}

impl Case {
    /// Creates an empty case with default metadata.
    pub fn new(case_id: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            jobs: Vec::new(),
            metadata: CaseMetadata::default(),
        }
    }

    /// Appends a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Replaces the metadata.
    pub fn with_metadata(mut self, metadata: CaseMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Total number of operations across all jobs.
    pub fn operation_count(&self) -> usize {
        self.jobs.iter().map(|j| j.operations.len()).sum()
    }

    /// Every machine ID mentioned by any option, sorted and deduplicated.
    pub fn machine_ids(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .jobs
            .iter()
            .flat_map(|j| j.operations.iter())
            .flat_map(|o| o.machines.iter())
            .map(|m| m.id.as_str())
            .collect();
        set.into_iter().collect()
    }

    /// One row per machine option, in case order.
    pub fn flat_rows(&self) -> Vec<FlatRecord> {
        let mut rows = Vec::new();
        for job in &self.jobs {
            for op in &job.operations {
                for m in &op.machines {
                    rows.push(FlatRecord {
                        job_id: job.job_id.clone(),
                        operation_id: op.operation_id.clone(),
                        machine_id: m.id.clone(),
                        processing_time: m.time,
                    });
                }
            }
        }
        rows
    }
}

impl CaseMetadata {
    /// Creates metadata from its three labels.
    pub fn new(
        source: impl Into<String>,
        objective: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            objective: objective.into(),
            created_by: created_by.into(),
        }
    }
}

impl Job {
    /// Creates a job with no operations.
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            operations: Vec::new(),
        }
    }

    /// Appends the next operation in the precedence chain.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Position of an operation in the chain (0-indexed).
    pub fn position_of(&self, operation_id: &str) -> Option<usize> {
        self.operations
            .iter()
            .position(|o| o.operation_id == operation_id)
    }
}

impl Operation {
    /// Creates an operation with no machine options.
    pub fn new(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            machines: Vec::new(),
        }
    }

    /// Adds a machine able to process this operation in `time`.
    pub fn with_machine(mut self, machine_id: impl Into<String>, time: f64) -> Self {
        self.machines.push(MachineOption::new(machine_id, Some(time)));
        self
    }

    /// Adds a listed machine with no processing time.
    pub fn with_unavailable_machine(mut self, machine_id: impl Into<String>) -> Self {
        self.machines.push(MachineOption::new(machine_id, None));
        self
    }

    /// The timed option with the smallest processing time.
    ///
    /// Ties resolve to the option listed first.
    pub fn fastest_option(&self) -> Option<&MachineOption> {
        let mut best: Option<(&MachineOption, f64)> = None;
        for option in &self.machines {
            if let Some(time) = option.time {
                match best {
                    Some((_, best_time)) if time >= best_time => {}
                    _ => best = Some((option, time)),
                }
            }
        }
        best.map(|(option, _)| option)
    }
}

impl MachineOption {
    /// Creates a machine option.
    pub fn new(id: impl Into<String>, time: Option<f64>) -> Self {
        Self {
            id: id.into(),
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_case() -> Case {
        Case::new("C1")
            .with_metadata(CaseMetadata::new("unit", "Minimize Makespan", "tests"))
            .with_job(
                Job::new("J1")
                    .with_operation(
                        Operation::new("O1")
                            .with_machine("M1", 5.0)
                            .with_machine("M2", 3.0),
                    )
                    .with_operation(Operation::new("O2").with_unavailable_machine("M3")),
            )
            .with_job(Job::new("J2").with_operation(Operation::new("O1").with_machine("M2", 4.0)))
    }

    #[test]
    fn test_case_builder() {
        let case = sample_case();
        assert_eq!(case.case_id, "C1");
        assert_eq!(case.jobs.len(), 2);
        assert_eq!(case.operation_count(), 3);
        assert_eq!(case.metadata.objective, "Minimize Makespan");
    }

    #[test]
    fn test_machine_ids_sorted_unique() {
        let case = sample_case();
        assert_eq!(case.machine_ids(), vec!["M1", "M2", "M3"]);
    }

    #[test]
    fn test_operation_position() {
        let case = sample_case();
        let job = &case.jobs[0];
        assert_eq!(job.position_of("O2"), Some(1));
        assert_eq!(job.position_of("O9"), None);
    }

    #[test]
    fn test_fastest_option() {
        let op = Operation::new("O1")
            .with_unavailable_machine("M0")
            .with_machine("M1", 5.0)
            .with_machine("M2", 3.0)
            .with_machine("M3", 3.0);
        assert_eq!(op.fastest_option().unwrap().id, "M2");
    }

    #[test]
    fn test_unschedulable_operation() {
        let op = Operation::new("O1").with_unavailable_machine("M1");
        assert!(op.fastest_option().is_none());
        assert!(Operation::new("O2").fastest_option().is_none());
    }

    #[test]
    fn test_flat_rows() {
        let rows = sample_case().flat_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].machine_id, "M2");
        assert_eq!(rows[1].processing_time, Some(3.0));
        assert_eq!(rows[2].processing_time, None);
    }

    #[test]
    fn test_case_json_roundtrip_with_null_time() {
        let json = r#"{
            "case_id": "C1",
            "jobs": [{"job_id": "J1", "operations": [
                {"operation_id": "O1", "machines": [
                    {"id": "M1", "time": null},
                    {"id": "M2", "time": 2.5}
                ]}
            ]}],
            "metadata": {"source": "s", "objective": "o", "created_by": "c"}
        }"#;
        let case: Case = serde_json::from_str(json).unwrap();
        let op = &case.jobs[0].operations[0];
        assert_eq!(op.machines[0].time, None);
        assert_eq!(op.machines[1].time, Some(2.5));
    }
}
