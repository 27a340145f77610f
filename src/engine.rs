//! Rule execution: collection, enforcement policy and the per-file entry point

pub mod collector;
pub mod file_filter;
pub mod file_walker;
pub mod inspector;
pub mod policy;

pub use collector::{collect, violations};
pub use file_filter::{SkipReason, SourceFilter};
pub use inspector::{FileOutcome, Inspector, MemorySink, ReportSink, StderrSink};
pub use policy::{Decision, EnforcementOptions, decide};
