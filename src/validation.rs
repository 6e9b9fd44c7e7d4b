//! Input validation for cases and assignment sets.
//!
//! Checks structural integrity of a case before it reaches the evaluator.
//! Detects:
//! - Cases without jobs
//! - Jobs without operations
//! - Empty identifiers
//! - Duplicate job IDs, and duplicate operation IDs within a job
//! - Non-positive or non-finite processing times
//!
//! An operation with zero machine options is legal: it is simply never
//! schedulable.
//!
//! All issues are collected; validation does not stop at the first one.

use crate::models::{Assignment, Case};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The case has no jobs.
    EmptyCase,
    /// A job has no operations.
    EmptyJob,
    /// A case, job, operation or machine identifier is empty.
    EmptyIdentifier,
    /// Two entities share the same ID in the same scope.
    DuplicateId,
    /// A processing time is zero, negative, or not finite.
    NonPositiveTime,
    /// An assignment set names the same operation twice.
    DuplicateAssignment,
}

impl ValidationError {
    /// Creates an error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a case.
///
/// Checks:
/// 1. The case has an ID and at least one job
/// 2. No duplicate job IDs
/// 3. Every job has an ID and at least one operation
/// 4. No duplicate operation IDs within a job
/// 5. Every machine option has an ID
/// 6. Every present processing time is finite and > 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_case(case: &Case) -> ValidationResult {
    let mut errors = Vec::new();

    if case.case_id.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyIdentifier,
            "Case has an empty case_id",
        ));
    }

    if case.jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCase,
            format!("Case '{}' has no jobs", case.case_id),
        ));
    }

    let mut job_ids = HashSet::new();
    for job in &case.jobs {
        if job.job_id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyIdentifier,
                "Job has an empty job_id",
            ));
        }
        if !job_ids.insert(job.job_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.job_id),
            ));
        }

        if job.operations.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyJob,
                format!("Job '{}' has no operations", job.job_id),
            ));
        }

        let mut op_ids = HashSet::new();
        for op in &job.operations {
            if op.operation_id.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyIdentifier,
                    format!("Job '{}' has an operation with an empty operation_id", job.job_id),
                ));
            }
            if !op_ids.insert(op.operation_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!(
                        "Duplicate operation ID '{}' in job '{}'",
                        op.operation_id, job.job_id
                    ),
                ));
            }

            for m in &op.machines {
                if m.id.is_empty() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::EmptyIdentifier,
                        format!(
                            "Operation '{}' of job '{}' lists a machine with an empty id",
                            op.operation_id, job.job_id
                        ),
                    ));
                }
                if let Some(time) = m.time {
                    if !(time.is_finite() && time > 0.0) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::NonPositiveTime,
                            format!(
                                "Machine '{}' for operation '{}' of job '{}' has invalid time {}",
                                m.id, op.operation_id, job.job_id, time
                            ),
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that an assignment set names each `(job, operation)` at most once.
///
/// References to unknown jobs, operations or machines are not errors; the
/// evaluator skips them.
pub fn validate_assignments(assignments: &[Assignment]) -> ValidationResult {
    let mut seen = HashSet::new();
    let errors: Vec<ValidationError> = assignments
        .iter()
        .filter(|a| !seen.insert((a.job_id.as_str(), a.operation_id.as_str())))
        .map(|a| {
            ValidationError::new(
                ValidationErrorKind::DuplicateAssignment,
                format!(
                    "Operation '{}' of job '{}' is assigned more than once",
                    a.operation_id, a.job_id
                ),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, MachineOption, Operation};

    fn sample_case() -> Case {
        Case::new("C1")
            .with_job(
                Job::new("J1")
                    .with_operation(Operation::new("O1").with_machine("M1", 3.0))
                    .with_operation(
                        Operation::new("O2")
                            .with_machine("M2", 1.5)
                            .with_unavailable_machine("M3"),
                    ),
            )
            .with_job(Job::new("J2").with_operation(Operation::new("O1").with_machine("M1", 2.0)))
    }

    fn kinds(case: &Case) -> Vec<ValidationErrorKind> {
        validate_case(case)
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_case() {
        assert!(validate_case(&sample_case()).is_ok());
    }

    #[test]
    fn test_operation_without_machines_is_legal() {
        let case = Case::new("C").with_job(Job::new("J1").with_operation(Operation::new("O1")));
        assert!(validate_case(&case).is_ok());
    }

    #[test]
    fn test_empty_case() {
        assert_eq!(kinds(&Case::new("C")), vec![ValidationErrorKind::EmptyCase]);
    }

    #[test]
    fn test_empty_job() {
        let case = Case::new("C").with_job(Job::new("J1"));
        assert_eq!(kinds(&case), vec![ValidationErrorKind::EmptyJob]);
    }

    #[test]
    fn test_duplicate_job_id() {
        let case = sample_case()
            .with_job(Job::new("J1").with_operation(Operation::new("O1").with_machine("M1", 1.0)));
        let errors = validate_case(&case).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("job")));
    }

    #[test]
    fn test_duplicate_operation_id_within_job() {
        let case = Case::new("C").with_job(
            Job::new("J1")
                .with_operation(Operation::new("O1").with_machine("M1", 1.0))
                .with_operation(Operation::new("O1").with_machine("M1", 1.0)),
        );
        assert_eq!(kinds(&case), vec![ValidationErrorKind::DuplicateId]);
    }

    #[test]
    fn test_non_positive_times() {
        let mut op = Operation::new("O1");
        op.machines.push(MachineOption::new("M1", Some(0.0)));
        op.machines.push(MachineOption::new("M2", Some(-2.0)));
        op.machines.push(MachineOption::new("M3", Some(f64::NAN)));
        let case = Case::new("C").with_job(Job::new("J1").with_operation(op));
        assert_eq!(kinds(&case), vec![ValidationErrorKind::NonPositiveTime; 3]);
    }

    #[test]
    fn test_empty_identifiers() {
        let case = Case::new("").with_job(
            Job::new("").with_operation(Operation::new("").with_machine("", 1.0)),
        );
        assert_eq!(kinds(&case), vec![ValidationErrorKind::EmptyIdentifier; 4]);
    }

    #[test]
    fn test_multiple_errors() {
        let case = Case::new("C")
            .with_job(Job::new("J1"))
            .with_job(Job::new("J2").with_operation(Operation::new("O1").with_machine("M1", -1.0)));
        let errors = validate_case(&case).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_duplicate_assignment() {
        let assignments = vec![
            Assignment::new("J1", "O1", "M1"),
            Assignment::new("J1", "O2", "M1"),
            Assignment::new("J1", "O1", "M2"),
        ];
        let errors = validate_assignments(&assignments).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateAssignment);
        assert!(validate_assignments(&assignments[..2]).is_ok());
    }
}
