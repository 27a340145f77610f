#![forbid(unsafe_code)]

//! Built-in rules embedded at compile time
//!
//! The builtin catalog lives in `builtin-rules/police.toml` and is compiled
//! into the binary using `include_str!`, so the engine needs no rule files at
//! runtime.

use crate::error::RuleError;
use crate::rules::RuleCatalog;

/// Embedded builtin catalog document
pub const BUILTIN_RULES_TOML: &str = include_str!("../../builtin-rules/police.toml");

/// Number of rules in the builtin catalog
pub const BUILTIN_RULE_COUNT: usize = 22;

/// Parse the embedded builtin catalog
///
/// # Errors
///
/// Only fails if the embedded document itself is broken, which the tests in
/// this module rule out for every released build.
pub fn load_builtin_catalog() -> Result<RuleCatalog, RuleError> {
    RuleCatalog::from_toml(BUILTIN_RULES_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = load_builtin_catalog().expect("embedded rules must parse");
        assert_eq!(catalog.len(), BUILTIN_RULE_COUNT);
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = load_builtin_catalog().unwrap();
        let ids: Vec<&str> = catalog.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "no-var",
                "no-options-api",
                "no-axios-import",
                "no-axios-require",
                "no-moment",
                "no-full-lodash",
                "no-direct-dom",
                "no-jquery",
                "no-eval",
                "no-inner-html",
                "no-console",
                "no-promise-wrapper",
                "no-loose-equality",
                "no-loose-inequality",
                "no-then-chain",
                "no-any",
                "no-any-annotation",
                "no-ts-ignore",
                "no-ts-nocheck",
                "no-settimeout-zero",
                "no-inline-style",
                "no-important",
            ]
        );
    }

    #[test]
    fn test_builtin_catalog_is_stable() {
        let first = load_builtin_catalog().unwrap();
        let second = load_builtin_catalog().unwrap();
        let a: Vec<_> = first.iter().map(|r| r.to_definition()).collect();
        let b: Vec<_> = second.iter().map(|r| r.to_definition()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_builtin_messages_are_multi_line() {
        let catalog = load_builtin_catalog().unwrap();
        for rule in catalog.iter() {
            assert!(
                rule.message().lines().count() >= 2,
                "rule {} should explain and suggest a fix",
                rule.id()
            );
            assert!(!rule.message().starts_with('\n'));
            assert!(!rule.marker().is_empty());
        }
    }

    #[test]
    fn test_only_type_rules_are_dialect_restricted() {
        let catalog = load_builtin_catalog().unwrap();
        let restricted: Vec<&str> = catalog
            .iter()
            .filter(|r| !r.languages().is_empty())
            .map(|r| r.id().as_str())
            .collect();
        assert_eq!(
            restricted,
            vec!["no-any", "no-any-annotation", "no-ts-ignore", "no-ts-nocheck"]
        );
    }
}
