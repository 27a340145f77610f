#![forbid(unsafe_code)]

//! Rule definitions and the rule catalog

pub mod builtin;
mod catalog;
mod rule;

// Re-export core types
pub use catalog::RuleCatalog;
pub use rule::{Rule, RuleDefinition, Violation};
