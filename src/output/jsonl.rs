#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable rule listings
//!
//! Outputs one JSON object per rule, in catalog order.

use crate::rules::RuleCatalog;
use crate::types::Language;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the catalog as JSONL
    pub fn format(&self, catalog: &RuleCatalog) -> String {
        let mut output = String::new();

        for (index, rule) in catalog.iter().enumerate() {
            let record = RuleRecord {
                record_type: "rule",
                position: index + 1,
                id: rule.id().as_str(),
                title: rule.title(),
                marker: rule.marker(),
                pattern: rule.pattern(),
                languages: rule.languages(),
                message: rule.message(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL record for one rule
#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    position: usize,
    id: &'a str,
    title: &'a str,
    marker: &'a str,
    pattern: &'a str,
    languages: &'a [Language],
    message: &'a str,
}
