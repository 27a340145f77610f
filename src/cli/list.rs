//! List command implementation
//!
//! This module implements the `police list` command, which prints every
//! active rule in evaluation order, either as a table or as JSONL.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, build_catalog, config_exit_code, load_config};
use crate::error::{ConfigError, RuleError};
use crate::output::JsonlFormatter;
use crate::rules::RuleCatalog;
use std::path::Path;

/// Error type specific to list command
#[derive(Debug, thiserror::Error)]
enum ListError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

/// Run the list command
///
/// Returns 0 on success, 2 on a rule error, 3 on a configuration parse error.
pub fn run_list(config_path: &Path, format: OutputFormat) -> i32 {
    match render_list(config_path, format) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(ListError::Config(e)) => {
            eprintln!("Error: {}", e);
            config_exit_code(&e)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn render_list(config_path: &Path, format: OutputFormat) -> Result<String, ListError> {
    let config = load_config(config_path)?;
    let catalog = build_catalog(&config)?;

    Ok(match format {
        OutputFormat::Human => format_human(&catalog),
        OutputFormat::Jsonl => JsonlFormatter::new().format(&catalog),
    })
}

/// One line per rule: position, id, marker and title, plus dialects if restricted
pub fn format_human(catalog: &RuleCatalog) -> String {
    if catalog.is_empty() {
        return "No rules are enabled.\n".to_string();
    }

    let width = catalog
        .ids()
        .map(|id| id.as_str().len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (index, rule) in catalog.iter().enumerate() {
        output.push_str(&format!(
            "{:>2}. {:<width$}  {} {}",
            index + 1,
            rule.id().as_str(),
            rule.marker(),
            rule.title(),
            width = width
        ));
        if !rule.languages().is_empty() {
            let langs: Vec<String> = rule.languages().iter().map(ToString::to_string).collect();
            output.push_str(&format!(" ({})", langs.join(", ")));
        }
        output.push('\n');
    }
    output.push_str(&format!("\n{} rules active\n", catalog.len()));
    output
}
