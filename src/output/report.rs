#![forbid(unsafe_code)]

//! Human-readable violation reports
//!
//! Pure string construction. Emitting the text is the caller's job.

use crate::rules::Violation;

const RULE: &str = "-----------------------------------------------------";
const BANNER_RULE: &str = "=====================================================";

/// Closing line of every per-file report
pub const REPORT_TRAILER: &str = "🔧 Fix these before they ship! 🔧";

/// Render one violation as a self-contained block
pub fn format_violation(violation: &Violation<'_>) -> String {
    let rule = violation.rule;
    format!(
        "{marker} [{title}] {marker}\n{RULE}\nForbidden pattern found in file: {file}\n\n{message}\n{RULE}\n",
        marker = rule.marker(),
        title = rule.title(),
        file = violation.file,
        message = rule.message(),
    )
}

/// Render every violation of one file, in order, between a header and a trailer
pub fn format_report(file: &str, violations: &[Violation<'_>]) -> String {
    let mut out = String::new();
    out.push_str("Police Report\n");
    out.push_str(BANNER_RULE);
    out.push('\n');
    out.push_str(&format!("File: {}\n", file));
    out.push_str(&format!("Violations: {}\n", violations.len()));
    out.push_str(BANNER_RULE);
    out.push('\n');

    let blocks: Vec<String> = violations.iter().map(format_violation).collect();
    out.push_str(&blocks.join("\n"));

    out.push_str(BANNER_RULE);
    out.push('\n');
    out.push_str(REPORT_TRAILER);
    out.push('\n');
    out.push_str(BANNER_RULE);
    out.push('\n');
    out
}
