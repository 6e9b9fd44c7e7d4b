//! Flexible job-shop schedule benchmarking.
//!
//! Evaluates candidate solutions for the Flexible Job-Shop Scheduling
//! Problem (FJSSP): jobs of ordered operations, each operation processable
//! on one of several machines with machine-specific times. The core is a
//! deterministic evaluator turning an ordered assignment list into a timed,
//! conflict-free schedule with makespan and utilization metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Case`, `Job`, `Operation`, `MachineOption`,
//!   `Assignment`, `SolverOutput`, `Schedule`, `ScheduledTask`
//! - **`simulator`**: The evaluator, its report, and a precedence audit
//! - **`solvers`**: The `Solver` contract and random / greedy / advanced baselines
//! - **`validation`**: Case integrity checks (empty jobs, duplicate IDs, bad times)
//! - **`loaders`**: Normalisation of loose JSON and flat-row uploads
//! - **`registry`**: Standardized case files on disk
//! - **`bench`**: Runs solvers against a case and collects results
//! - **`config`**: TOML benchmark configuration
//!
//! # Example
//!
//! ```
//! use fjsp_bench::models::{Case, Job, Operation};
//! use fjsp_bench::simulator::evaluate;
//! use fjsp_bench::solvers::{GreedySolver, Solver};
//!
//! let case = Case::new("demo").with_job(
//!     Job::new("J1").with_operation(
//!         Operation::new("O1").with_machine("M1", 5.0).with_machine("M2", 3.0),
//!     ),
//! );
//! let output = GreedySolver.solve(&case);
//! let report = evaluate(&case, &output.assignments);
//! assert_eq!(report.makespan, 3.0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Brandimarte (1993), "Routing and scheduling in a flexible job shop by tabu search"

pub mod bench;
pub mod config;
pub mod error;
pub mod loaders;
pub mod models;
pub mod registry;
pub mod simulator;
pub mod solvers;
pub mod validation;

pub use error::{Error, Result};
