//! Processing-time lookup.
//!
//! Flattens a case into a `(job, operation, machine) → time` index so the
//! evaluator can resolve every assignment in O(1).

use std::collections::HashMap;

use super::Case;

type MachineTimes<'a> = HashMap<&'a str, Option<f64>>;

/// Borrowed `(job, operation, machine) → processing time` index over a [`Case`].
///
/// Built once per evaluation. When a triple appears more than once in the
/// case, the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct ProcessingTimeIndex<'a> {
    times: HashMap<&'a str, HashMap<&'a str, MachineTimes<'a>>>,
}

impl<'a> ProcessingTimeIndex<'a> {
    /// Indexes every machine option of `case`.
    pub fn build(case: &'a Case) -> Self {
        let mut times: HashMap<&'a str, HashMap<&'a str, MachineTimes<'a>>> = HashMap::new();
        for job in &case.jobs {
            let ops = times.entry(job.job_id.as_str()).or_default();
            for op in &job.operations {
                let machines = ops.entry(op.operation_id.as_str()).or_default();
                for m in &op.machines {
                    machines.insert(m.id.as_str(), m.time);
                }
            }
        }
        Self { times }
    }

    /// Processing time for the triple, or `None` if the triple is unknown
    /// or listed without a time.
    pub fn time(&self, job_id: &str, operation_id: &str, machine_id: &str) -> Option<f64> {
        self.times
            .get(job_id)
            .and_then(|ops| ops.get(operation_id))
            .and_then(|machines| machines.get(machine_id))
            .copied()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Operation};

    fn sample_case() -> Case {
        Case::new("C1")
            .with_job(
                Job::new("J1").with_operation(
                    Operation::new("O1")
                        .with_machine("M1", 5.0)
                        .with_unavailable_machine("M2"),
                ),
            )
            .with_job(Job::new("J2").with_operation(Operation::new("O1").with_machine("M1", 4.0)))
    }

    #[test]
    fn test_lookup_present_time() {
        let case = sample_case();
        let index = ProcessingTimeIndex::build(&case);
        assert_eq!(index.time("J1", "O1", "M1"), Some(5.0));
        assert_eq!(index.time("J2", "O1", "M1"), Some(4.0));
    }

    #[test]
    fn test_lookup_absent_time() {
        let case = sample_case();
        let index = ProcessingTimeIndex::build(&case);
        assert_eq!(index.time("J1", "O1", "M2"), None);
    }

    #[test]
    fn test_lookup_unknown_triple() {
        let case = sample_case();
        let index = ProcessingTimeIndex::build(&case);
        assert_eq!(index.time("J9", "O1", "M1"), None);
        assert_eq!(index.time("J1", "O9", "M1"), None);
        assert_eq!(index.time("J1", "O1", "M9"), None);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let case = Case::new("C").with_job(
            Job::new("J1").with_operation(
                Operation::new("O1")
                    .with_machine("M1", 5.0)
                    .with_unavailable_machine("M1"),
            ),
        );
        let index = ProcessingTimeIndex::build(&case);
        assert_eq!(index.time("J1", "O1", "M1"), None);
    }
}
