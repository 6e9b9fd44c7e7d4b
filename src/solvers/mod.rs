//! Solver interface and baseline assignment heuristics.
//!
//! A solver maps a [`Case`] to an ordered assignment list. The evaluator
//! only consumes that list, so any [`Solver`] can be benchmarked without
//! changes to the evaluation code.
//!
//! # Baselines
//!
//! | Solver | Policy |
//! |--------|--------|
//! | [`RandomSolver`] | Uniform choice over all listed machines (seeded) |
//! | [`GreedySolver`] | Shortest processing time among timed machines |
//! | [`AdvancedSolver`] | Greedy policy, slot for a constraint-based model |
//!
//! Every baseline emits assignments in job order, then operation order,
//! as iterated from the case.
//!
//! # Usage
//!
//! ```
//! use fjsp_bench::models::{Case, Job, Operation};
//! use fjsp_bench::solvers::{GreedySolver, Solver};
//!
//! let case = Case::new("demo").with_job(
//!     Job::new("J1").with_operation(
//!         Operation::new("O1").with_machine("M1", 5.0).with_machine("M2", 3.0),
//!     ),
//! );
//! let out = GreedySolver.solve(&case);
//! assert_eq!(out.assignments[0].machine_id, "M2");
//! ```

mod advanced;
mod greedy;
mod random;

pub use advanced::AdvancedSolver;
pub use greedy::GreedySolver;
pub use random::RandomSolver;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Case, SolverOutput};

/// Seed used by the random baseline when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// A policy producing assignments for a case.
pub trait Solver: Send + Sync + Debug {
    /// Solver label (e.g., "GreedyMinProcTime").
    fn name(&self) -> &str;

    /// Chooses machines for the case's operations.
    fn solve(&self, case: &Case) -> SolverOutput;
}

/// The baseline policies as a tagged, serializable variant.
///
/// In TOML: `{ type = "random", seed = 7 }`, `{ type = "greedy" }`,
/// `{ type = "advanced" }`. A random entry without a seed takes the
/// run's seed (see [`SolverKind::with_default_seed`]), or [`DEFAULT_SEED`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SolverKind {
    /// [`RandomSolver`], optionally with its own seed.
    Random {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// [`GreedySolver`].
    Greedy,
    /// [`AdvancedSolver`].
    Advanced,
}

impl SolverKind {
    /// Random, greedy and advanced baselines, in that order. The random
    /// baseline has no seed of its own.
    pub fn baselines() -> Vec<SolverKind> {
        vec![
            SolverKind::Random { seed: None },
            SolverKind::Greedy,
            SolverKind::Advanced,
        ]
    }

    /// Random solver with an explicit seed.
    pub fn random(seed: u64) -> Self {
        SolverKind::Random { seed: Some(seed) }
    }

    /// Gives an unseeded random entry `seed`. Other entries are unchanged.
    pub fn with_default_seed(self, seed: u64) -> Self {
        match self {
            SolverKind::Random { seed: None } => SolverKind::random(seed),
            other => other,
        }
    }
}

impl Solver for SolverKind {
    fn name(&self) -> &str {
        match self {
            SolverKind::Random { .. } => RandomSolver::NAME,
            SolverKind::Greedy => GreedySolver::NAME,
            SolverKind::Advanced => AdvancedSolver::NAME,
        }
    }

    fn solve(&self, case: &Case) -> SolverOutput {
        match self {
            SolverKind::Random { seed } => {
                RandomSolver::new(seed.unwrap_or(DEFAULT_SEED)).solve(case)
            }
            SolverKind::Greedy => GreedySolver.solve(case),
            SolverKind::Advanced => AdvancedSolver.solve(case),
        }
    }
}

/// Adapts a closure into a [`Solver`].
pub struct FnSolver<F> {
    name: String,
    f: F,
}

impl<F> FnSolver<F>
where
    F: Fn(&Case) -> SolverOutput + Send + Sync,
{
    /// Wraps `f` under `name`.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Debug for FnSolver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSolver").field("name", &self.name).finish()
    }
}

impl<F> Solver for FnSolver<F>
where
    F: Fn(&Case) -> SolverOutput + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&self, case: &Case) -> SolverOutput {
        (self.f)(case)
    }
}
