#![forbid(unsafe_code)]

//! Ordered, immutable rule catalog
//!
//! The catalog is responsible for:
//! - Loading the builtin rules embedded in the binary
//! - Applying the `[rules]` section of `police.toml` (disable, dialect rules, custom rules)
//! - Preserving definition order, which is also evaluation and report order

use crate::config::RulesConfig;
use crate::error::RuleError;
use crate::rules::builtin::load_builtin_catalog;
use crate::rules::{Rule, RuleDefinition};
use crate::types::RuleId;
use serde::Deserialize;
use std::collections::HashSet;

/// TOML document holding a list of `[[rule]]` tables
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    rule: Vec<RuleDefinition>,
}

/// An ordered, read-only sequence of rules
///
/// There is no way to add or remove a rule once the catalog exists. Share it
/// across threads with an `Arc`.
#[derive(Debug)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Build a catalog from compiled rules, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `RuleError::Duplicate` if two rules share an id.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id().clone()) {
                return Err(RuleError::Duplicate(rule.id().clone()));
            }
        }
        Ok(Self { rules })
    }

    /// Compile each definition in order and build a catalog from them
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = RuleDefinition>,
    ) -> Result<Self, RuleError> {
        let rules = definitions
            .into_iter()
            .map(Rule::from_definition)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    /// Parse a catalog from a TOML document of `[[rule]]` tables
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if the TOML is malformed, plus
    /// any error from compiling an individual rule.
    pub fn from_toml(content: &str) -> Result<Self, RuleError> {
        let doc: CatalogDocument = toml::from_str(content)
            .map_err(|e| RuleError::InvalidDefinition(format!("Failed to parse TOML: {}", e)))?;
        Self::from_definitions(doc.rule)
    }

    /// The builtin catalog embedded in the binary
    pub fn builtin() -> Result<Self, RuleError> {
        load_builtin_catalog()
    }

    /// Build the catalog selected by the `[rules]` configuration section
    ///
    /// Builtin rules come first in their fixed order, minus any disabled ids
    /// and, when `typed = false`, minus the dialect-restricted rules. Custom
    /// rules follow in the order they are declared.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` if a disabled id names no builtin rule,
    /// `RuleError::Duplicate` if a custom rule reuses an id, and any error
    /// from compiling a custom rule.
    pub fn from_config(config: &RulesConfig) -> Result<Self, RuleError> {
        let builtin = Self::builtin()?;

        for id in &config.disabled {
            if builtin.get(id).is_none() {
                return Err(RuleError::NotFound(id.to_string()));
            }
        }

        let mut rules: Vec<Rule> = builtin
            .rules
            .into_iter()
            .filter(|rule| !config.disabled.contains(rule.id()))
            .filter(|rule| config.typed || rule.languages().is_empty())
            .collect();

        for def in &config.custom {
            rules.push(Rule::from_definition(def.clone())?);
        }

        Self::new(rules)
    }

    /// Iterate over rules in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by id
    pub fn get(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    /// Rule ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &RuleId> {
        self.rules.iter().map(Rule::id)
    }
}

impl<'a> IntoIterator for &'a RuleCatalog {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(id: &str, pattern: &str) -> RuleDefinition {
        RuleDefinition {
            id: id.to_string(),
            title: "CUSTOM".to_string(),
            marker: "🐛".to_string(),
            pattern: pattern.to_string(),
            message: "Custom rule\nRemove it".to_string(),
            languages: vec![],
        }
    }

    #[test]
    fn test_from_toml_keeps_order() {
        let toml = r#"
[[rule]]
id = "second-in-name"
title = "B"
marker = "b"
pattern = "b"
message = "b"

[[rule]]
id = "first-in-name"
title = "A"
marker = "a"
pattern = "a"
message = "a"
"#;
        let catalog = RuleCatalog::from_toml(toml).unwrap();
        let ids: Vec<&str> = catalog.ids().map(RuleId::as_str).collect();
        assert_eq!(ids, vec!["second-in-name", "first-in-name"]);
    }

    #[test]
    fn test_from_toml_empty_document() {
        let catalog = RuleCatalog::from_toml("").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_from_toml_unknown_field() {
        let toml = r#"
[[rule]]
id = "x"
title = "X"
marker = "x"
pattern = "x"
message = "x"
severity = "error"
"#;
        assert!(matches!(
            RuleCatalog::from_toml(toml).unwrap_err(),
            RuleError::InvalidDefinition(_)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err =
            RuleCatalog::from_definitions(vec![custom("dup", "a"), custom("dup", "b")]).unwrap_err();
        match err {
            RuleError::Duplicate(id) => assert_eq!(id.as_str(), "dup"),
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = RuleCatalog::builtin().unwrap();
        let rule = catalog.get(&RuleId::new("no-eval").unwrap()).unwrap();
        assert_eq!(rule.title(), "SECURITY BREACH");
        assert!(catalog.get(&RuleId::new("missing").unwrap()).is_none());
    }

    #[test]
    fn test_from_config_default_is_builtin() {
        let catalog = RuleCatalog::from_config(&RulesConfig::default()).unwrap();
        let builtin = RuleCatalog::builtin().unwrap();
        assert!(catalog.ids().eq(builtin.ids()));
    }

    #[test]
    fn test_from_config_disables_rules() {
        let config = RulesConfig {
            disabled: vec![
                RuleId::new("no-console").unwrap(),
                RuleId::new("no-var").unwrap(),
            ],
            ..RulesConfig::default()
        };
        let catalog = RuleCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.len(), 20);
        assert!(catalog.get(&RuleId::new("no-console").unwrap()).is_none());
        assert_eq!(catalog.iter().next().unwrap().id().as_str(), "no-options-api");
    }

    #[test]
    fn test_from_config_unknown_disabled_id() {
        let config = RulesConfig {
            disabled: vec![RuleId::new("no-such-rule").unwrap()],
            ..RulesConfig::default()
        };
        assert!(matches!(
            RuleCatalog::from_config(&config).unwrap_err(),
            RuleError::NotFound(_)
        ));
    }

    #[test]
    fn test_from_config_without_typed_rules() {
        let config = RulesConfig {
            typed: false,
            ..RulesConfig::default()
        };
        let catalog = RuleCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.len(), 18);
        assert!(catalog.iter().all(|r| r.languages().is_empty()));
    }

    #[test]
    fn test_from_config_appends_custom_rules() {
        let config = RulesConfig {
            custom: vec![custom("no-debugger", r"\bdebugger\b")],
            ..RulesConfig::default()
        };
        let catalog = RuleCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.len(), 23);
        assert_eq!(catalog.iter().last().unwrap().id().as_str(), "no-debugger");
    }

    #[test]
    fn test_from_config_custom_cannot_shadow_builtin() {
        let config = RulesConfig {
            custom: vec![custom("no-var", "var")],
            ..RulesConfig::default()
        };
        assert!(matches!(
            RuleCatalog::from_config(&config).unwrap_err(),
            RuleError::Duplicate(_)
        ));
    }
}
