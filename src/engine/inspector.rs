#![forbid(unsafe_code)]

//! Per-file entry point for host build pipelines
//!
//! The host calls [`Inspector::on_file`] once for every file it processes,
//! with the file identifier and the full text. The inspector:
//! 1. Does nothing if enforcement is disabled
//! 2. Skips files rejected by the [`SourceFilter`]
//! 3. Collects violations (only up to the first one in strict mode)
//! 4. Returns an [`EnforcementError`] on a strict-mode violation
//! 5. Otherwise emits a report for files with violations to its [`ReportSink`]

use crate::config::Config;
use crate::engine::collector::violations;
use crate::engine::file_filter::SourceFilter;
use crate::engine::policy::{Decision, EnforcementOptions, decide};
use crate::error::{EnforcementError, PoliceError};
use crate::output::report::{format_report, format_violation};
use crate::rules::{RuleCatalog, Violation};
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Destination for rendered violation reports
///
/// Implementations must tolerate concurrent calls: a host may inspect many
/// files in parallel through one inspector.
pub trait ReportSink: Send + Sync {
    /// Emit one complete report block
    fn emit(&self, report: &str);
}

/// Writes reports to stderr, highlighted in yellow when color is enabled
#[derive(Debug, Clone, Copy)]
pub struct StderrSink {
    color: ColorChoice,
}

impl StderrSink {
    pub fn new(color: ColorChoice) -> Self {
        Self { color }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

impl ReportSink for StderrSink {
    fn emit(&self, report: &str) {
        let stream = StandardStream::stderr(self.color);
        let mut out = stream.lock();
        let _ = out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = writeln!(out, "{}", report);
        let _ = out.reset();
    }
}

/// Keeps reports in memory, in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every report emitted so far
    pub fn reports(&self) -> Vec<String> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, report: &str) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(report.to_string());
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Arc<S> {
    fn emit(&self, report: &str) {
        (**self).emit(report);
    }
}

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Enforcement is disabled; the file was not looked at
    Inactive,
    /// The inclusion filter rejected the file
    Skipped,
    /// No rule matched
    Clean,
    /// A report with this many violations was emitted
    Reported(usize),
}

/// The rule engine as seen by a host pipeline
///
/// Holds only read-only state besides the sink, so it can be shared across
/// threads whenever the sink can.
pub struct Inspector<S> {
    catalog: Arc<RuleCatalog>,
    options: EnforcementOptions,
    filter: SourceFilter,
    sink: S,
}

impl<S: ReportSink> Inspector<S> {
    /// Creates an inspector with the default inclusion filter
    pub fn new(catalog: Arc<RuleCatalog>, options: EnforcementOptions, sink: S) -> Self {
        Self::with_filter(catalog, options, SourceFilter::default(), sink)
    }

    /// Creates an inspector with a custom inclusion filter
    pub fn with_filter(
        catalog: Arc<RuleCatalog>,
        options: EnforcementOptions,
        filter: SourceFilter,
        sink: S,
    ) -> Self {
        Self {
            catalog,
            options,
            filter,
            sink,
        }
    }

    /// Builds the catalog, filter and options selected by a loaded `police.toml`
    ///
    /// # Errors
    ///
    /// Returns `PoliceError::Rule` if the `[rules]` section selects an unknown
    /// or invalid rule, and `PoliceError::Config` if an exclude glob is invalid.
    pub fn from_config(config: &Config, sink: S) -> Result<Self, PoliceError> {
        let catalog = RuleCatalog::from_config(&config.rules)?;
        let filter = SourceFilter::new(&config.files.exclude)?;
        Ok(Self::with_filter(
            Arc::new(catalog),
            config.police,
            filter,
            sink,
        ))
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn options(&self) -> EnforcementOptions {
        self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Inspect one file
    ///
    /// # Errors
    ///
    /// In strict mode, returns `EnforcementError::Abort` carrying the rendered
    /// report of the first violation in catalog order. Normal mode never
    /// returns an error.
    pub fn on_file(&self, file: &str, text: &str) -> Result<FileOutcome, EnforcementError> {
        if !self.options.enabled {
            return Ok(FileOutcome::Inactive);
        }

        if let Err(reason) = self.filter.check(file) {
            tracing::debug!(file, ?reason, "skipping file");
            return Ok(FileOutcome::Skipped);
        }

        let found = violations(&self.catalog, file, text);
        let found: Vec<Violation<'_>> = if self.options.strict {
            found.take(1).collect()
        } else {
            found.collect()
        };

        match decide(&self.options, found) {
            Decision::Abort(violation) => {
                tracing::debug!(file, rule = %violation.rule.id(), "strict mode abort");
                Err(EnforcementError::Abort {
                    file: file.to_string(),
                    rule_id: violation.rule.id().clone(),
                    report: format_violation(&violation),
                })
            }
            Decision::Continue(found) if found.is_empty() => {
                tracing::trace!(file, "clean");
                Ok(FileOutcome::Clean)
            }
            Decision::Continue(found) => {
                tracing::debug!(file, violations = found.len(), "reporting violations");
                self.sink.emit(&format_report(file, &found));
                Ok(FileOutcome::Reported(found.len()))
            }
        }
    }
}

impl<S> std::fmt::Debug for Inspector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspector")
            .field("rules", &self.catalog.len())
            .field("options", &self.options)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
