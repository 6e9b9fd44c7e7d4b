//! Schedule evaluation.
//!
//! Turns a case plus an ordered assignment list into a timed, conflict-free
//! schedule and derives its metrics.
//!
//! # Rules
//!
//! - A machine processes one task at a time.
//! - A job runs one task at a time; each task starts after the job's
//!   previously scheduled task finishes.
//! - Assignments are processed in caller order; unprocessable ones are
//!   dropped.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Brandimarte (1993), "Routing and scheduling in a flexible job shop by tabu search"

mod audit;
mod evaluator;
mod metrics;

pub use audit::audit_precedence;
pub use evaluator::{evaluate, simulate};
pub use metrics::EvaluationReport;
