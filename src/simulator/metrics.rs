//! Evaluation report (schedule quality metrics).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest finish time, 0 for an empty schedule |
//! | Machine utilization | busy time / makespan, per machine with tasks |
//! | Task count | Number of assignments that were scheduled |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Schedule;

/// Makespan, utilization and the schedule they were derived from.
///
/// Serializes to `{makespan, machine_utilization, num_tasks, schedule}`.
/// The utilization map is ordered, so two reports over equal schedules
/// serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Latest finish time.
    pub makespan: f64,
    /// Busy fraction of the makespan per machine (0.0..=1.0).
    pub machine_utilization: BTreeMap<String, f64>,
    /// Number of scheduled tasks.
    pub num_tasks: usize,
    /// The timed schedule.
    pub schedule: Schedule,
}

impl EvaluationReport {
    /// Derives the metrics of a schedule.
    pub fn from_schedule(schedule: Schedule) -> Self {
        Self {
            makespan: schedule.makespan(),
            machine_utilization: schedule.utilizations(),
            num_tasks: schedule.task_count(),
            schedule,
        }
    }

    /// Mean utilization over machines that ran at least one task.
    pub fn avg_utilization(&self) -> f64 {
        if self.machine_utilization.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.machine_utilization.values().sum();
        sum / self.machine_utilization.len() as f64
    }

    /// Whether `num_tasks` equals the number of submitted assignments,
    /// i.e. nothing was dropped as unprocessable.
    pub fn is_complete(&self, submitted: usize) -> bool {
        self.num_tasks == submitted
    }
}
