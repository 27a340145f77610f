#![forbid(unsafe_code)]

//! Enforcement policy: continue and report, or abort on the first violation

use crate::rules::Violation;
use serde::{Deserialize, Serialize};

/// Process-wide enforcement switches
///
/// Supplied once when an [`Inspector`](crate::engine::Inspector) is built and
/// never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnforcementOptions {
    /// When false the engine is inert: nothing is collected, reported or aborted
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// When true the first violation in catalog order halts processing
    #[serde(default)]
    pub strict: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for EnforcementOptions {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            strict: false,
        }
    }
}

impl EnforcementOptions {
    /// Normal mode: report everything, never abort
    pub fn normal() -> Self {
        Self::default()
    }

    /// Strict mode: abort on the first violation
    pub fn strict() -> Self {
        Self {
            enabled: true,
            strict: true,
        }
    }

    /// Inert engine
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            strict: false,
        }
    }
}

/// Outcome of applying the policy to one file's violations
#[derive(Debug, PartialEq, Eq)]
pub enum Decision<'a> {
    /// Keep going; the violations (possibly none) are to be reported
    Continue(Vec<Violation<'a>>),
    /// Halt processing of this file because of this violation
    Abort(Violation<'a>),
}

/// Apply the enforcement policy to violations listed in catalog order
pub fn decide<'a>(options: &EnforcementOptions, violations: Vec<Violation<'a>>) -> Decision<'a> {
    if !options.enabled {
        return Decision::Continue(Vec::new());
    }

    if options.strict
        && let Some(first) = violations.first().copied()
    {
        return Decision::Abort(first);
    }

    // Strict mode only reaches here with no violations
    Decision::Continue(violations)
}
