//! Assignment (candidate solution) model.
//!
//! An assignment names the machine chosen for one operation. A solver emits
//! an ordered list of them; that order is the scheduling priority the
//! evaluator follows.

use serde::{Deserialize, Serialize};

/// The machine chosen for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Job identifier.
    pub job_id: String,
    /// Operation identifier within the job.
    pub operation_id: String,
    /// Chosen machine.
    pub machine_id: String,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(
        job_id: impl Into<String>,
        operation_id: impl Into<String>,
        machine_id: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            operation_id: operation_id.into(),
            machine_id: machine_id.into(),
        }
    }
}

/// A solver's named, ordered assignment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverOutput {
    /// Solver label.
    pub name: String,
    /// Assignments in scheduling priority order.
    pub assignments: Vec<Assignment>,
}

impl SolverOutput {
    /// Creates an output with no assignments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assignments: Vec::new(),
        }
    }

    /// Appends an assignment.
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    /// Appends an assignment in place.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no operation was assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
