//! Precedence audit for evaluated schedules.
//!
//! The evaluator trusts assignment order to encode each job's operation
//! chain. This audit checks a finished schedule against the chain declared
//! in the case and reports what it finds, leaving the schedule untouched.

use std::collections::HashMap;

use crate::models::{Case, Schedule, ScheduledTask, Violation};

/// Lists precedence and duplicate-operation violations in `schedule`.
///
/// A violation is reported when an operation starts before an earlier
/// operation of the same job (by case order) has finished, or when the
/// same operation appears more than once. Tasks whose job or operation is
/// not in the case are ignored.
pub fn audit_precedence(case: &Case, schedule: &Schedule) -> Vec<Violation> {
    let mut violations = Vec::new();

    for job in &case.jobs {
        let mut placed: Vec<(usize, &ScheduledTask)> = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for task in schedule.tasks.iter().filter(|t| t.job_id == job.job_id) {
            let Some(position) = job.position_of(&task.operation_id) else {
                continue;
            };
            let count = seen.entry(task.operation_id.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                violations.push(Violation::duplicate(
                    &job.job_id,
                    &task.operation_id,
                    format!(
                        "Operation '{}' of job '{}' is scheduled more than once",
                        task.operation_id, job.job_id
                    ),
                ));
            }
            placed.push((position, task));
        }

        placed.sort_by_key(|(position, _)| *position);
        for pair in placed.windows(2) {
            let (earlier_pos, earlier) = pair[0];
            let (later_pos, later) = pair[1];
            if earlier_pos < later_pos && later.start < earlier.finish {
                violations.push(Violation::precedence(
                    &job.job_id,
                    &later.operation_id,
                    format!(
                        "Operation '{}' starts at {} before '{}' finishes at {}",
                        later.operation_id, later.start, earlier.operation_id, earlier.finish
                    ),
                ));
            }
        }
    }

    if !violations.is_empty() {
        tracing::debug!(
            case = %case.case_id,
            violations = violations.len(),
            "precedence audit found violations"
        );
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Job, Operation, ViolationType};
    use crate::simulator::simulate;

    fn chain_case() -> Case {
        Case::new("C").with_job(
            Job::new("J1")
                .with_operation(Operation::new("O1").with_machine("M1", 3.0))
                .with_operation(Operation::new("O2").with_machine("M2", 2.0))
                .with_operation(Operation::new("O3").with_machine("M1", 1.0)),
        )
    }

    #[test]
    fn test_ordered_input_is_clean() {
        let case = chain_case();
        let s = simulate(
            &case,
            &[
                Assignment::new("J1", "O1", "M1"),
                Assignment::new("J1", "O2", "M2"),
                Assignment::new("J1", "O3", "M1"),
            ],
        );
        assert!(audit_precedence(&case, &s).is_empty());
    }

    #[test]
    fn test_misordered_input_is_reported() {
        let case = chain_case();
        let s = simulate(
            &case,
            &[Assignment::new("J1", "O2", "M2"), Assignment::new("J1", "O1", "M1")],
        );
        let violations = audit_precedence(&case, &s);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation_type, ViolationType::PrecedenceViolation);
        assert_eq!(violations[0].operation_id, "O2");
    }

    #[test]
    fn test_duplicate_operation_is_reported() {
        let case = chain_case();
        let s = simulate(
            &case,
            &[Assignment::new("J1", "O1", "M1"), Assignment::new("J1", "O1", "M1")],
        );
        let violations = audit_precedence(&case, &s);
        assert!(violations
            .iter()
            .any(|v| v.violation_type == ViolationType::DuplicateOperation));
    }

    #[test]
    fn test_empty_schedule_is_clean() {
        assert!(audit_precedence(&chain_case(), &Schedule::new()).is_empty());
    }
}
