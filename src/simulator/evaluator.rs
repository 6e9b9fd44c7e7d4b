//! Deterministic discrete-event schedule evaluator.
//!
//! # Algorithm
//!
//! 1. Index `(job, operation, machine) → time` once from the case.
//! 2. Walk the assignments in caller order (no reordering).
//! 3. Skip any assignment whose triple has no processing time.
//! 4. Start each task at `max(machine_ready, job_ready)`, finish it after
//!    its processing time, then advance both ready clocks to the finish.
//!
//! The caller's order is trusted to respect each job's operation chain.
//! A misordered input yields a schedule that violates precedence in wall
//! clock terms; [`audit_precedence`](super::audit_precedence) reports it.
//!
//! # Complexity
//! O(o + a) where o = machine options in the case, a = assignments.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: semi-active schedule generation

use std::collections::HashMap;

use super::EvaluationReport;
use crate::models::{Assignment, Case, ProcessingTimeIndex, Schedule, ScheduledTask};

/// Places the assignments on a timeline.
///
/// Total over its input: unknown or untimed triples are dropped, never
/// reported as errors.
pub fn simulate(case: &Case, assignments: &[Assignment]) -> Schedule {
    let index = ProcessingTimeIndex::build(case);
    let mut machine_ready: HashMap<&str, f64> = HashMap::new();
    let mut job_ready: HashMap<&str, f64> = case
        .jobs
        .iter()
        .map(|j| (j.job_id.as_str(), 0.0))
        .collect();

    let mut schedule = Schedule::new();
    for a in assignments {
        let Some(time) = index.time(&a.job_id, &a.operation_id, &a.machine_id) else {
            tracing::debug!(
                job = %a.job_id,
                operation = %a.operation_id,
                machine = %a.machine_id,
                "skipping unprocessable assignment"
            );
            continue;
        };

        let machine_free = machine_ready.get(a.machine_id.as_str()).copied().unwrap_or(0.0);
        let job_free = job_ready.get(a.job_id.as_str()).copied().unwrap_or(0.0);
        let task = ScheduledTask::new(
            &a.job_id,
            &a.operation_id,
            &a.machine_id,
            machine_free.max(job_free),
            time,
        );

        machine_ready.insert(a.machine_id.as_str(), task.finish);
        job_ready.insert(a.job_id.as_str(), task.finish);
        schedule.add_task(task);
    }

    tracing::debug!(
        case = %case.case_id,
        assignments = assignments.len(),
        scheduled = schedule.task_count(),
        "simulation finished"
    );
    schedule
}

/// Simulates the assignments and derives makespan and utilization.
///
/// # Example
///
/// ```
/// use fjsp_bench::models::{Assignment, Case, Job, Operation};
/// use fjsp_bench::simulator::evaluate;
///
/// let case = Case::new("demo")
///     .with_job(Job::new("J1").with_operation(Operation::new("O1").with_machine("M1", 4.0)))
///     .with_job(Job::new("J2").with_operation(Operation::new("O1").with_machine("M1", 4.0)));
/// let assignments = vec![
///     Assignment::new("J1", "O1", "M1"),
///     Assignment::new("J2", "O1", "M1"),
/// ];
///
/// let report = evaluate(&case, &assignments);
/// assert_eq!(report.makespan, 8.0);
/// assert_eq!(report.machine_utilization["M1"], 1.0);
/// ```
pub fn evaluate(case: &Case, assignments: &[Assignment]) -> EvaluationReport {
    EvaluationReport::from_schedule(simulate(case, assignments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Operation};

    fn two_step_case() -> Case {
        Case::new("C1")
            .with_job(
                Job::new("J1")
                    .with_operation(Operation::new("O1").with_machine("M1", 3.0))
                    .with_operation(Operation::new("O2").with_machine("M2", 2.0)),
            )
            .with_job(
                Job::new("J2")
                    .with_operation(Operation::new("O1").with_machine("M2", 4.0))
                    .with_operation(Operation::new("O2").with_machine("M1", 1.0)),
            )
    }

    #[test]
    fn test_single_task() {
        let case = Case::new("C").with_job(
            Job::new("J1").with_operation(Operation::new("O1").with_machine("M1", 7.0)),
        );
        let schedule = simulate(&case, &[Assignment::new("J1", "O1", "M1")]);
        assert_eq!(schedule.task_count(), 1);
        assert_eq!(schedule.tasks[0].start, 0.0);
        assert_eq!(schedule.tasks[0].finish, 7.0);
        assert_eq!(schedule.tasks[0].duration, 7.0);
    }

    #[test]
    fn test_machine_and_job_ready_both_apply() {
        let case = two_step_case();
        let assignments = vec![
            Assignment::new("J1", "O1", "M1"),
            Assignment::new("J2", "O1", "M2"),
            Assignment::new("J1", "O2", "M2"),
            Assignment::new("J2", "O2", "M1"),
        ];
        let s = simulate(&case, &assignments);
        // J1/O1 [0,3) M1; J2/O1 [0,4) M2
        // J1/O2 waits for M2 -> [4,6); J2/O2 waits for job -> [4,5)
        let starts: Vec<(f64, f64)> = s.tasks.iter().map(|t| (t.start, t.finish)).collect();
        assert_eq!(starts, vec![(0.0, 3.0), (0.0, 4.0), (4.0, 6.0), (4.0, 5.0)]);
        assert_eq!(s.makespan(), 6.0);
    }

    #[test]
    fn test_caller_order_is_priority() {
        let case = Case::new("C")
            .with_job(Job::new("J1").with_operation(Operation::new("O1").with_machine("M1", 4.0)))
            .with_job(Job::new("J2").with_operation(Operation::new("O1").with_machine("M1", 2.0)));
        let s = simulate(
            &case,
            &[Assignment::new("J2", "O1", "M1"), Assignment::new("J1", "O1", "M1")],
        );
        assert_eq!(s.tasks[0].job_id, "J2");
        assert_eq!(s.tasks[0].start, 0.0);
        assert_eq!(s.tasks[1].start, 2.0);
    }

    #[test]
    fn test_untimed_machine_is_skipped() {
        let case = Case::new("C").with_job(
            Job::new("J1")
                .with_operation(Operation::new("O1").with_unavailable_machine("M1"))
                .with_operation(Operation::new("O2").with_machine("M1", 2.0)),
        );
        let s = simulate(
            &case,
            &[Assignment::new("J1", "O1", "M1"), Assignment::new("J1", "O2", "M1")],
        );
        assert_eq!(s.task_count(), 1);
        // the skipped assignment left no trace on the ready clocks
        assert_eq!(s.tasks[0].start, 0.0);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let case = two_step_case();
        let s = simulate(
            &case,
            &[
                Assignment::new("J9", "O1", "M1"),
                Assignment::new("J1", "O9", "M1"),
                Assignment::new("J1", "O1", "M9"),
            ],
        );
        assert!(s.is_empty());
    }

    #[test]
    fn test_misordered_operations_are_not_corrected() {
        let case = two_step_case();
        let s = simulate(
            &case,
            &[Assignment::new("J1", "O2", "M2"), Assignment::new("J1", "O1", "M1")],
        );
        assert_eq!(s.tasks[0].operation_id, "O2");
        assert_eq!((s.tasks[0].start, s.tasks[0].finish), (0.0, 2.0));
        assert_eq!((s.tasks[1].start, s.tasks[1].finish), (2.0, 5.0));
    }

    #[test]
    fn test_evaluate_report() {
        let case = two_step_case();
        let report = evaluate(
            &case,
            &[Assignment::new("J1", "O1", "M1"), Assignment::new("J1", "O2", "M2")],
        );
        assert_eq!(report.num_tasks, 2);
        assert_eq!(report.makespan, 5.0);
        assert!((report.machine_utilization["M1"] - 0.6).abs() < 1e-10);
        assert!((report.machine_utilization["M2"] - 0.4).abs() < 1e-10);
    }
}
