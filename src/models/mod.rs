//! Flexible job-shop domain models.
//!
//! Provides the data types describing a problem instance, a candidate
//! solution, and the timed schedule the evaluator derives from them.
//!
//! # Domain Mappings
//!
//! | fjsp-bench | Manufacturing | Meaning |
//! |------------|---------------|---------|
//! | Case | Shop instance | Jobs and machine alternatives |
//! | Job | Order | Ordered operation chain |
//! | Operation | Routing step | Work on exactly one machine |
//! | MachineOption | Capability | Machine + processing time |
//! | Assignment | Dispatch decision | Machine chosen for one operation |
//! | ScheduledTask | Timed slot | Operation on a machine over `[start, finish)` |

mod assignment;
mod case;
mod schedule;
mod time_index;

pub use assignment::{Assignment, SolverOutput};
pub use case::{Case, CaseMetadata, FlatRecord, Job, MachineOption, Operation};
pub use schedule::{Schedule, ScheduledTask, Violation, ViolationType};
pub use time_index::ProcessingTimeIndex;
