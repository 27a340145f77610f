//! Check command implementation
//!
//! This module implements the `police check` command, which:
//! - Loads configuration from police.toml (or uses the defaults)
//! - Builds the active rule catalog
//! - Prints the startup banner
//! - Discovers candidate files
//! - Inspects every file in parallel, emitting reports as they are found
//! - Returns an appropriate exit code

use crate::cli::common::{
    EXIT_ABORTED, EXIT_ERROR, EXIT_SUCCESS, build_catalog, config_exit_code, load_config,
};
use crate::config::Config;
use crate::engine::file_walker::{FileWalker, FileWalkerError};
use crate::engine::{FileOutcome, Inspector, ReportSink, SourceFilter, StderrSink};
use crate::error::{ConfigError, EnforcementError, RuleError};
use crate::output::banner;
use crate::rules::RuleCatalog;
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Error type specific to check command
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("File walker error: {0}")]
    FileWalker(#[from] FileWalkerError),
}

/// Result of checking a set of paths
#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Candidate files that were read and inspected
    pub files_checked: usize,
    /// Files for which a report was emitted
    pub files_reported: usize,
    /// Total violations across all reports
    pub violations: usize,
    /// Strict-mode abort for the first offending file in path order
    pub aborted: Option<EnforcementError>,
}

/// Run the check command
///
/// # Arguments
///
/// * `paths` - Paths to check
/// * `config_path` - Location of police.toml
/// * `strict` - Override for `[police] strict`, if given on the command line
/// * `color` - Color choice for banner, reports and errors
///
/// # Returns
///
/// Exit code:
/// - 0: Success (normal mode never fails on violations)
/// - 1: Aborted (strict mode found a violation)
/// - 2: Error (configuration, rule or I/O error)
/// - 3: Parse error (invalid TOML configuration)
pub fn run_check(
    paths: &[PathBuf],
    config_path: &Path,
    strict: Option<bool>,
    color: ColorChoice,
) -> i32 {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return config_exit_code(&e);
        }
    };
    if let Some(strict) = strict {
        config.police.strict = strict;
    }

    if !config.police.enabled {
        tracing::info!("police is disabled in configuration; nothing to do");
        return EXIT_SUCCESS;
    }

    let catalog = match build_catalog(&config) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    print_banner(&catalog, config.police.strict, color);

    match check_paths(paths, &config, catalog, StderrSink::new(color)) {
        Ok(summary) => {
            tracing::info!(
                files = summary.files_checked,
                reported = summary.files_reported,
                violations = summary.violations,
                "check finished"
            );
            match summary.aborted {
                Some(abort) => {
                    print_abort(&abort, color);
                    EXIT_ABORTED
                }
                None => EXIT_SUCCESS,
            }
        }
        Err(CheckError::Config(e)) => {
            eprintln!("Error: {}", e);
            config_exit_code(&e)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Inspect every candidate file below `paths`, sending reports to `sink`
///
/// Files are processed in parallel. In strict mode the first abort in path
/// order is returned in the summary and later files are abandoned.
pub fn check_paths<S: ReportSink>(
    paths: &[PathBuf],
    config: &Config,
    catalog: Arc<RuleCatalog>,
    sink: S,
) -> Result<CheckSummary, CheckError> {
    let filter = SourceFilter::new(&config.files.exclude)?;
    let files = discover_files(paths, &filter)?;
    let inspector = Inspector::with_filter(catalog, config.police, filter, sink);

    let checked = AtomicUsize::new(0);
    let reported = AtomicUsize::new(0);
    let violations = AtomicUsize::new(0);

    let aborted = files.par_iter().find_map_first(|path| {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read file");
                return None;
            }
        };
        // Invalid UTF-8 is replaced, never skipped, so strict mode still sees the file
        let text = String::from_utf8_lossy(&bytes);
        checked.fetch_add(1, Ordering::Relaxed);

        match inspector.on_file(&path.to_string_lossy(), &text) {
            Ok(FileOutcome::Reported(count)) => {
                reported.fetch_add(1, Ordering::Relaxed);
                violations.fetch_add(count, Ordering::Relaxed);
                None
            }
            Ok(_) => None,
            Err(abort) => Some(abort),
        }
    });

    Ok(CheckSummary {
        files_checked: checked.into_inner(),
        files_reported: reported.into_inner(),
        violations: violations.into_inner(),
        aborted,
    })
}

/// Discover candidate files under every path, sorted and de-duplicated
pub(crate) fn discover_files(
    paths: &[PathBuf],
    filter: &SourceFilter,
) -> Result<Vec<PathBuf>, FileWalkerError> {
    let mut all_files = Vec::new();

    for path in paths {
        let walker = FileWalker::new(path, filter)?;
        for result in walker.walk() {
            all_files.push(result?);
        }
    }

    all_files.sort();
    all_files.dedup();
    Ok(all_files)
}

fn print_banner(catalog: &RuleCatalog, strict: bool, color: ColorChoice) {
    let stream = StandardStream::stderr(color);
    let mut out = stream.lock();
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    let _ = write!(out, "{}", banner::render(catalog.len(), strict));
    let _ = out.reset();
}

fn print_abort(abort: &EnforcementError, color: ColorChoice) {
    let stream = StandardStream::stderr(color);
    let mut out = stream.lock();
    let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = writeln!(out, "{}", abort);
    let _ = out.reset();
}
