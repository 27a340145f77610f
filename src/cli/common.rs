//! Common helper functions shared across CLI commands

use crate::config::Config;
use crate::error::{ConfigError, RuleError};
use crate::rules::RuleCatalog;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ABORTED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load police.toml, or the defaults if it does not exist
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the file is invalid TOML and
/// `ConfigError::Validation` if a value is unusable.
pub(crate) fn load_config(path: &Path) -> Result<Config, ConfigError> {
    Config::load_or_default(path)
}

/// Build the active rule catalog from configuration
pub(crate) fn build_catalog(config: &Config) -> Result<RuleCatalog, RuleError> {
    RuleCatalog::from_config(&config.rules)
}

/// Exit code for a configuration error
pub(crate) fn config_exit_code(err: &ConfigError) -> i32 {
    match err {
        ConfigError::Parse(_) => EXIT_PARSE_ERROR,
        _ => EXIT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_catalog_from_defaults() {
        let catalog = build_catalog(&Config::default()).unwrap();
        assert_eq!(catalog.len(), crate::rules::builtin::BUILTIN_RULE_COUNT);
    }

    #[test]
    fn test_config_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("police.toml");
        fs::write(&path, "[police\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert_eq!(config_exit_code(&err), EXIT_PARSE_ERROR);

        let err = ConfigError::Validation("bad".to_string());
        assert_eq!(config_exit_code(&err), EXIT_ERROR);
    }
}
