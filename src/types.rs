#![forbid(unsafe_code)]

//! Core domain types for Police
//!
//! This module defines the fundamental types used throughout the Police system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source dialects recognised by the inclusion filter
///
/// The dialect is derived from a file identifier's extension. Files whose
/// extension maps to no dialect are never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Single-file components (`.vue`), which mix markup and script
    Vue,
    JavaScript,
    TypeScript,
}

impl Language {
    /// Returns all dialects in a fixed order
    pub fn all() -> [Language; 3] {
        [Language::Vue, Language::JavaScript, Language::TypeScript]
    }

    /// Extensions (without the dot) that map to this dialect
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Vue => &["vue"],
            Language::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Language::TypeScript => &["ts", "tsx", "mts", "cts"],
        }
    }

    /// Maps a bare extension (case-sensitive, without the dot) to a dialect
    pub fn from_extension(ext: &str) -> Option<Language> {
        Language::all()
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext))
    }

    /// Detects the dialect of a file identifier
    ///
    /// Build tools append query strings to module ids (`App.vue?vue&type=script`),
    /// so anything after the first `?` is ignored.
    pub fn detect(file_id: &str) -> Option<Language> {
        let path = strip_query(file_id);
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Language::from_extension(ext)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Vue => "vue",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        };
        f.write_str(name)
    }
}

/// Removes a `?query` suffix from a module identifier
pub(crate) fn strip_query(file_id: &str) -> &str {
    match file_id.split_once('?') {
        Some((path, _)) => path,
        None => file_id,
    }
}

/// A validated rule identifier
///
/// Rule IDs must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId(String);

impl RuleId {
    /// Creates a new RuleId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(RuleId(id))
    }

    /// Returns the rule ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleId::new(value.clone()).ok_or_else(|| format!("Invalid rule ID: {value}"))
    }
}

impl From<RuleId> for String {
    fn from(rule_id: RuleId) -> Self {
        rule_id.0
    }
}

/// A glob pattern for file matching
///
/// This is a simple wrapper around a string that will be used with the `globset` crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
