//! Output formatters (violation reports, startup banner, JSONL rule listing)

pub mod banner;
pub mod jsonl;
pub mod report;

pub use jsonl::JsonlFormatter;
pub use report::{format_report, format_violation};
