#![forbid(unsafe_code)]

//! Rule and violation types, and the matcher
//!
//! A [`Rule`] pairs a compiled regular expression with the text shown to the
//! developer when it matches. Rules are built once, from a [`RuleDefinition`],
//! and are read-only afterwards.

use crate::error::RuleError;
use crate::types::{Language, RuleId};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// TOML structure for a single rule definition
///
/// Used both for the embedded builtin catalog (`[[rule]]` tables) and for
/// custom rules declared in `police.toml` (`[[rules.custom]]` tables).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    pub id: String,
    pub title: String,
    pub marker: String,
    pub pattern: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
}

/// A forbidden or discouraged text pattern and its explanation
pub struct Rule {
    id: RuleId,
    pattern: Regex,
    title: String,
    marker: String,
    message: String,
    languages: Vec<Language>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("pattern", &self.pattern.as_str())
            .field("title", &self.title)
            .field("marker", &self.marker)
            .field("languages", &self.languages)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Compile a rule from its definition
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if the id is invalid or a text
    /// field is blank, and `RuleError::InvalidRegex` if the pattern does not
    /// compile.
    pub fn from_definition(def: RuleDefinition) -> Result<Self, RuleError> {
        let id = RuleId::new(def.id.clone())
            .ok_or_else(|| RuleError::InvalidDefinition(format!("Invalid rule ID: {}", def.id)))?;

        if def.title.trim().is_empty() {
            return Err(RuleError::InvalidDefinition(format!(
                "Rule '{}' has an empty title",
                id
            )));
        }
        if def.message.trim().is_empty() {
            return Err(RuleError::InvalidDefinition(format!(
                "Rule '{}' has an empty message",
                id
            )));
        }

        let pattern = Regex::new(&def.pattern).map_err(|e| {
            RuleError::InvalidRegex(format!(
                "Failed to compile pattern '{}' for rule '{}': {}",
                def.pattern, id, e
            ))
        })?;

        Ok(Rule {
            id,
            pattern,
            title: def.title,
            marker: def.marker,
            message: def.message.trim_end().to_string(),
            languages: def.languages,
        })
    }

    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Decorative tag rendered on both sides of the title
    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Dialects this rule is restricted to; empty means every dialect
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Whether this rule is checked for a file of the given dialect
    ///
    /// Unrestricted rules apply to everything. Restricted rules never apply
    /// to a file whose dialect is unknown.
    pub fn applies_to(&self, language: Option<Language>) -> bool {
        if self.languages.is_empty() {
            return true;
        }
        language.is_some_and(|lang| self.languages.contains(&lang))
    }

    /// Tests whether the pattern occurs anywhere in `text`
    ///
    /// Presence only: a pattern that occurs many times is still one match.
    /// Matching runs in time linear in the text and cannot fail.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Converts back into the serialisable definition form
    pub fn to_definition(&self) -> RuleDefinition {
        RuleDefinition {
            id: self.id.to_string(),
            title: self.title.clone(),
            marker: self.marker.clone(),
            pattern: self.pattern.as_str().to_string(),
            message: self.message.clone(),
            languages: self.languages.clone(),
        }
    }
}

/// A detected match of one rule against one file's text
///
/// Borrows from the catalog and the caller's file identifier, so it lives no
/// longer than the inspection that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Violation<'a> {
    pub rule: &'a Rule,
    pub file: &'a str,
}

impl PartialEq for Violation<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.rule.id == other.rule.id && self.file == other.file
    }
}

impl Eq for Violation<'_> {}
