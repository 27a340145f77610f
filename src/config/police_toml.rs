//! Parsing and validation for police.toml configuration files

use crate::engine::EnforcementOptions;
use crate::error::ConfigError;
use crate::rules::RuleDefinition;
use crate::types::{GlobPattern, RuleId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "police.toml";

/// Main configuration struct for police.toml
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Enforcement switches
    #[serde(default)]
    pub police: EnforcementOptions,

    /// Inclusion filter settings
    #[serde(default)]
    pub files: FilesConfig,

    /// Rule selection
    #[serde(default)]
    pub rules: RulesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when it is absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        // Validate glob patterns by attempting to compile them with globset
        for pattern in &self.files.exclude {
            globset::Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
        }

        let mut seen = HashSet::new();
        for id in &self.rules.disabled {
            if !seen.insert(id) {
                return Err(ConfigError::Validation(format!(
                    "Rule '{}' is listed more than once in rules.disabled",
                    id
                )));
            }
        }

        Ok(())
    }
}

/// Inclusion filter section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesConfig {
    /// Paths matching any of these globs are never inspected
    #[serde(default = "default_exclude")]
    pub exclude: Vec<GlobPattern>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
        }
    }
}

/// Dependency and build-tool directories skipped by default
pub fn default_exclude() -> Vec<GlobPattern> {
    vec![
        GlobPattern::new("**/node_modules/**"),
        GlobPattern::new("**/.nuxt/**"),
    ]
}

/// Rules configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Keep the rules that only make sense for typed dialects (TypeScript, Vue)
    #[serde(default = "default_typed")]
    pub typed: bool,

    /// Builtin rule ids to switch off
    #[serde(default)]
    pub disabled: Vec<RuleId>,

    /// Extra rules appended after the builtins, in declaration order
    #[serde(default)]
    pub custom: Vec<RuleDefinition>,
}

fn default_typed() -> bool {
    true
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            typed: default_typed(),
            disabled: Vec::new(),
            custom: Vec::new(),
        }
    }
}
