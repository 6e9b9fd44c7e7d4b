//! Timed schedule model.
//!
//! A schedule is the ordered list of tasks the evaluator placed on machines,
//! each with a concrete start and finish time. Tasks keep the order in which
//! they were recorded.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A timed schedule, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    /// Scheduled tasks.
    pub tasks: Vec<ScheduledTask>,
}

/// An operation placed on a machine over `[start, finish)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Job identifier.
    pub job_id: String,
    /// Operation identifier.
    pub operation_id: String,
    /// Machine identifier.
    pub machine_id: String,
    /// Start time.
    pub start: f64,
    /// Finish time (`start + duration`).
    pub finish: f64,
    /// Processing time looked up from the case.
    #[serde(rename = "time")]
    pub duration: f64,
}

/// A rule broken by a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Job the violation belongs to.
    pub job_id: String,
    /// Operation that broke the rule.
    pub operation_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Operation started before an earlier operation of its job finished.
    PrecedenceViolation,
    /// The same operation was scheduled more than once.
    DuplicateOperation,
}

impl ScheduledTask {
    /// Creates a task starting at `start` and lasting `duration`.
    pub fn new(
        job_id: impl Into<String>,
        operation_id: impl Into<String>,
        machine_id: impl Into<String>,
        start: f64,
        duration: f64,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            operation_id: operation_id.into(),
            machine_id: machine_id.into(),
            start,
            finish: start + duration,
            duration,
        }
    }

    /// Whether two tasks' half-open intervals intersect.
    pub fn overlaps(&self, other: &ScheduledTask) -> bool {
        self.start < other.finish && other.start < self.finish
    }
}

impl Violation {
    /// Creates a precedence violation.
    pub fn precedence(
        job_id: impl Into<String>,
        operation_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type: ViolationType::PrecedenceViolation,
            job_id: job_id.into(),
            operation_id: operation_id.into(),
            message: message.into(),
        }
    }

    /// Creates a duplicate-operation violation.
    pub fn duplicate(
        job_id: impl Into<String>,
        operation_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type: ViolationType::DuplicateOperation,
            job_id: job_id.into(),
            operation_id: operation_id.into(),
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a task.
    pub fn add_task(&mut self, task: ScheduledTask) {
        self.tasks.push(task);
    }

    /// Makespan: latest finish time, 0 when empty.
    pub fn makespan(&self) -> f64 {
        self.tasks
            .iter()
            .map(|t| t.finish)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Tasks of a job, in recording order.
    pub fn tasks_for_job(&self, job_id: &str) -> Vec<&ScheduledTask> {
        self.tasks.iter().filter(|t| t.job_id == job_id).collect()
    }

    /// Summed processing time per machine. Idle machines are absent.
    pub fn busy_time_by_machine(&self) -> BTreeMap<String, f64> {
        let mut busy: BTreeMap<String, f64> = BTreeMap::new();
        for t in &self.tasks {
            *busy.entry(t.machine_id.clone()).or_insert(0.0) += t.duration;
        }
        busy
    }

    /// Busy fraction of the makespan per machine.
    ///
    /// Idle machines are absent. Every machine that ran a task reports 0.0
    /// when the makespan is not positive.
    pub fn utilizations(&self) -> BTreeMap<String, f64> {
        let horizon = self.makespan();
        self.busy_time_by_machine()
            .into_iter()
            .map(|(id, busy)| {
                let util = if horizon > 0.0 {
                    // float accumulation can overshoot by an ulp
                    (busy / horizon).min(1.0)
                } else {
                    0.0
                };
                (id, util)
            })
            .collect()
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
