//! Greedy shortest-processing-time machine choice.
//!
//! For every operation, picks the timed machine option with the smallest
//! processing time. Operations without any timed option stay unassigned.
//!
//! # Complexity
//! O(o) where o = machine options in the case.

use super::Solver;
use crate::models::{Assignment, Case, SolverOutput};

/// Picks the fastest machine for each operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Label reported in solver output.
    pub const NAME: &'static str = "GreedyMinProcTime";
}

impl Solver for GreedySolver {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&self, case: &Case) -> SolverOutput {
        min_time_assignments(case, Self::NAME)
    }
}

/// Fastest-machine assignments in job then operation order.
pub(crate) fn min_time_assignments(case: &Case, name: &str) -> SolverOutput {
    let mut out = SolverOutput::new(name);
    for job in &case.jobs {
        for op in &job.operations {
            if let Some(option) = op.fastest_option() {
                out.push(Assignment::new(&job.job_id, &op.operation_id, &option.id));
            }
        }
    }
    out
}
