#![forbid(unsafe_code)]

//! Violation collection: run a catalog against one file's text

use crate::rules::{RuleCatalog, Violation};
use crate::types::Language;

/// Lazily yield violations for `text` in catalog order
///
/// Rules restricted to other dialects than the one `file` maps to are not
/// evaluated. Pulling only the first item evaluates rules up to and including
/// the first match and no further.
pub fn violations<'a>(
    catalog: &'a RuleCatalog,
    file: &'a str,
    text: &'a str,
) -> impl Iterator<Item = Violation<'a>> + 'a {
    let language = Language::detect(file);
    catalog
        .iter()
        .filter(move |rule| rule.applies_to(language))
        .filter(move |rule| rule.matches(text))
        .map(move |rule| Violation { rule, file })
}

/// Collect every violation for `text`, in catalog order
///
/// Deterministic and side-effect free: the same catalog and text always
/// produce the same sequence.
pub fn collect<'a>(catalog: &'a RuleCatalog, file: &'a str, text: &'a str) -> Vec<Violation<'a>> {
    violations(catalog, file, text).collect()
}
