#![forbid(unsafe_code)]

//! Police: a source-text rule engine for front-end build pipelines
//!
//! Police inspects the text of each source file handed to it by a host build
//! pipeline, flags forbidden or discouraged patterns, and either reports them
//! or blocks the build depending on the configured strictness.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, EnforcementError, PoliceError, RuleError};

// Re-export the engine surface a host pipeline needs
pub use engine::{EnforcementOptions, FileOutcome, Inspector, MemorySink, ReportSink};
pub use rules::{Rule, RuleCatalog, Violation};
pub use types::{GlobPattern, Language, RuleId};
