//! Seeded uniform-random machine choice.
//!
//! Picks uniformly among every listed machine option, including options
//! without a processing time; the evaluator drops those afterwards.
//! Operations with no options at all are skipped.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Solver, DEFAULT_SEED};
use crate::models::{Assignment, Case, SolverOutput};

/// Uniform random machine choice driven by an explicit seed.
///
/// Each call to [`solve`](Solver::solve) seeds a fresh generator, so equal
/// seeds give equal assignments and concurrent calls share no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSolver {
    /// Generator seed.
    pub seed: u64,
}

impl RandomSolver {
    /// Label reported in solver output.
    pub const NAME: &'static str = "RandomSolver";

    /// Creates a solver with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for RandomSolver {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Solver for RandomSolver {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&self, case: &Case) -> SolverOutput {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut out = SolverOutput::new(Self::NAME);
        for job in &case.jobs {
            for op in &job.operations {
                if let Some(option) = op.machines.choose(&mut rng) {
                    out.push(Assignment::new(&job.job_id, &op.operation_id, &option.id));
                }
            }
        }
        out
    }
}
