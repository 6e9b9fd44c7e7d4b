//! Benchmark environment.
//!
//! Runs solvers against one case and evaluates each solver's assignments.
//! Solver runs are independent: each builds its own assignments and each
//! evaluation owns its transient state, so runs can go in parallel.
//!
//! # Usage
//!
//! ```
//! use fjsp_bench::bench::BenchmarkEnv;
//! use fjsp_bench::models::{Case, Job, Operation};
//!
//! let case = Case::new("demo").with_job(
//!     Job::new("J1").with_operation(
//!         Operation::new("O1").with_machine("M1", 5.0).with_machine("M2", 3.0),
//!     ),
//! );
//! let results = BenchmarkEnv::new(case).run_baselines();
//! assert_eq!(results.len(), 3);
//! assert_eq!(results[1].solver, "GreedyMinProcTime");
//! assert_eq!(results[1].makespan, 3.0);
//! ```

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::models::Case;
use crate::registry::load_case;
use crate::simulator::{evaluate, EvaluationReport};
use crate::solvers::{Solver, SolverKind, DEFAULT_SEED};
use crate::validation::validate_case;

/// One solver's benchmark row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Solver label.
    pub solver: String,
    /// Makespan of the evaluated schedule.
    pub makespan: f64,
    /// Number of scheduled tasks.
    pub num_tasks: usize,
}

impl BenchmarkResult {
    fn from_report(solver: String, report: &EvaluationReport) -> Self {
        Self {
            solver,
            makespan: report.makespan,
            num_tasks: report.num_tasks,
        }
    }
}

/// Benchmark rows for one stored case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseBenchmark {
    /// Case file the rows were produced from.
    pub path: PathBuf,
    /// Identifier of the loaded case.
    pub case_id: String,
    /// One row per configured solver.
    pub results: Vec<BenchmarkResult>,
}

/// A case loaded for benchmarking.
#[derive(Debug, Clone)]
pub struct BenchmarkEnv {
    case: Case,
    source: Option<PathBuf>,
    seed: u64,
}

impl BenchmarkEnv {
    /// Wraps an in-memory case.
    pub fn new(case: Case) -> Self {
        Self {
            case,
            source: None,
            seed: DEFAULT_SEED,
        }
    }

    /// Sets the seed given to random solvers without their own.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Loads and validates a standardized case file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let case = load_case(path)?;
        validate_case(&case)?;
        tracing::info!(
            case = %case.case_id,
            path = %path.display(),
            jobs = case.jobs.len(),
            operations = case.operation_count(),
            machines = case.machine_ids().len(),
            "opened benchmark case"
        );
        Ok(Self {
            case,
            source: Some(path.to_path_buf()),
            seed: DEFAULT_SEED,
        })
    }

    /// The case under benchmark.
    pub fn case(&self) -> &Case {
        &self.case
    }

    /// File the case was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Seed given to random solvers without their own.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs the random, greedy and advanced baselines, in that order.
    pub fn run_baselines(&self) -> Vec<BenchmarkResult> {
        self.run_solvers(&SolverKind::baselines())
    }

    /// Runs the baselines on the rayon pool. Results keep baseline order.
    pub fn run_baselines_parallel(&self) -> Vec<BenchmarkResult> {
        self.run_solvers_parallel(&SolverKind::baselines())
    }

    /// Runs the given solvers sequentially.
    pub fn run_solvers(&self, solvers: &[SolverKind]) -> Vec<BenchmarkResult> {
        self.seeded(solvers)
            .iter()
            .map(|s| self.run_custom_solver(s))
            .collect()
    }

    /// Runs the given solvers in parallel. Results keep input order.
    pub fn run_solvers_parallel(&self, solvers: &[SolverKind]) -> Vec<BenchmarkResult> {
        self.seeded(solvers)
            .par_iter()
            .map(|s| self.run_custom_solver(s))
            .collect()
    }

    /// Runs the solvers named by `config`, seeded from `config.random_seed`.
    pub fn run_configured(&self, config: &BenchConfig) -> Vec<BenchmarkResult> {
        let solvers = config.resolved_solvers();
        if config.parallel {
            self.run_solvers_parallel(&solvers)
        } else {
            self.run_solvers(&solvers)
        }
    }

    fn seeded(&self, solvers: &[SolverKind]) -> Vec<SolverKind> {
        solvers
            .iter()
            .cloned()
            .map(|s| s.with_default_seed(self.seed))
            .collect()
    }

    /// Runs any solver and evaluates its assignments.
    ///
    /// The row is labelled with the output's name, or the solver's name
    /// when the output leaves it empty.
    pub fn run_custom_solver(&self, solver: &dyn Solver) -> BenchmarkResult {
        let (name, report) = self.evaluate_solver(solver);
        BenchmarkResult::from_report(name, &report)
    }

    /// Runs a solver and returns its label with the full evaluation report.
    pub fn evaluate_solver(&self, solver: &dyn Solver) -> (String, EvaluationReport) {
        let output = solver.solve(&self.case);
        let report = evaluate(&self.case, &output.assignments);
        let name = if output.name.is_empty() {
            solver.name().to_string()
        } else {
            output.name.clone()
        };

        tracing::info!(
            case = %self.case.case_id,
            solver = %name,
            assignments = output.len(),
            complete = report.is_complete(output.len()),
            makespan = report.makespan,
            num_tasks = report.num_tasks,
            avg_utilization = report.avg_utilization(),
            "solver evaluated"
        );
        (name, report)
    }
}

/// Benchmarks every case stored under `config.cases_dir`.
///
/// Cases are visited in file order. A case that fails to load or validate
/// aborts the run with that error.
pub fn run_cases(config: &BenchConfig) -> Result<Vec<CaseBenchmark>> {
    let paths = config.list_cases()?;
    tracing::info!(
        dir = %config.cases_dir.display(),
        cases = paths.len(),
        "benchmarking stored cases"
    );

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let env = BenchmarkEnv::open(&path)?.with_seed(config.random_seed);
        let results = env.run_configured(config);
        out.push(CaseBenchmark {
            case_id: env.case.case_id,
            path,
            results,
        });
    }
    Ok(out)
}
