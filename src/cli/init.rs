//! Initialize a police configuration file

use std::fs;
use std::path::Path;

/// Default content for police.toml
pub const DEFAULT_POLICE_TOML: &str = r#"# Police configuration

[police]
# Set to false to switch every check off
enabled = true
# Abort on the first violation instead of reporting everything
strict = false

[files]
# Files under these globs are never inspected
exclude = ["**/node_modules/**", "**/.nuxt/**"]

[rules]
# Keep rules that only apply to TypeScript and Vue files (any, @ts-ignore, ...)
typed = true
# Builtin rules to switch off; run `police list` to see their ids
disabled = []

# Extra rules are appended after the builtin ones:
#
# [[rules.custom]]
# id = "no-debugger"
# title = "DEBUGGER LEFT BEHIND"
# marker = "🐛"
# pattern = '\bdebugger\b'
# message = """
# "A debugger statement!? In a commit?"
# Remove it before pushing."""
"#;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path error
    #[error("Path error: {0}")]
    Path(String),
}

/// What init did with the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    /// File already existed and `force` was not given
    Skipped,
    Overwritten,
}

/// Run the init command
///
/// # Arguments
/// * `path` - Where to write the configuration
/// * `force` - If true, overwrite an existing file. If false, leave it alone.
pub fn run_init(path: &Path, force: bool) -> Result<InitOutcome, InitError> {
    if path.is_dir() {
        return Err(InitError::Path(format!(
            "Path '{}' exists but is a directory",
            path.display()
        )));
    }

    if path.exists() {
        if !force {
            return Ok(InitOutcome::Skipped);
        }
        fs::write(path, DEFAULT_POLICE_TOML)?;
        return Ok(InitOutcome::Overwritten);
    }

    // Create parent directories if needed
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_POLICE_TOML)?;
    Ok(InitOutcome::Created)
}
