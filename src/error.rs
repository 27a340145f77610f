//! Error types for Police
//!
//! Rule and configuration errors can only happen while an engine is being
//! built. Once an [`Inspector`](crate::engine::Inspector) exists, the only
//! error it produces is the deliberate strict-mode [`EnforcementError`].

use crate::types::RuleId;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file is not valid TOML or has the wrong shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// The configuration file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid rule definition
    #[error("Invalid rule definition: {0}")]
    InvalidDefinition(String),

    /// Rule not found
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    /// Two rules in one catalog share an id
    #[error("Duplicate rule id: {0}")]
    Duplicate(RuleId),
}

/// Failure raised to the host pipeline when strict mode finds a violation
///
/// The `Display` output is exactly the rendered report of the offending
/// violation, so a host can surface it verbatim as a build error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnforcementError {
    #[error("{report}")]
    Abort {
        file: String,
        rule_id: RuleId,
        report: String,
    },
}

impl EnforcementError {
    /// File identifier the abort was raised for
    pub fn file(&self) -> &str {
        match self {
            EnforcementError::Abort { file, .. } => file,
        }
    }

    /// Rule that triggered the abort
    pub fn rule_id(&self) -> &RuleId {
        match self {
            EnforcementError::Abort { rule_id, .. } => rule_id,
        }
    }
}

/// Top-level error type for Police
#[derive(Debug, thiserror::Error)]
pub enum PoliceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Strict-mode abort
    #[error(transparent)]
    Enforcement(#[from] EnforcementError),
}
