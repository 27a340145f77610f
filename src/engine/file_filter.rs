#![forbid(unsafe_code)]

//! Inclusion filter deciding which file identifiers are inspected at all
//!
//! A file is a candidate only if its identifier matches none of the exclude
//! globs (dependency and build-tool directories by default) and its extension
//! maps to a known [`Language`].

use crate::config::default_exclude;
use crate::error::ConfigError;
use crate::types::{GlobPattern, Language, strip_query};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::borrow::Cow;
use std::path::Path;

/// Reason why a file was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Identifier lies under an excluded directory
    ExcludedByPattern,
    /// Extension is not in the source allow-list
    NoMatchingLanguage,
}

/// Pre-compiled inclusion filter
#[derive(Debug, Clone)]
pub struct SourceFilter {
    exclude: GlobSet,
    patterns: Vec<GlobPattern>,
}

impl SourceFilter {
    /// Builds a filter from exclude globs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a glob does not compile.
    pub fn new(exclude: &[GlobPattern]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            let glob = Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
            builder.add(glob);
        }
        let exclude_set = builder
            .build()
            .map_err(|e| ConfigError::Validation(format!("Failed to build GlobSet: {}", e)))?;

        Ok(Self {
            exclude: exclude_set,
            patterns: exclude.to_vec(),
        })
    }

    /// Exclude globs this filter was built from
    pub fn patterns(&self) -> &[GlobPattern] {
        &self.patterns
    }

    /// Checks a file identifier, returning why it is skipped if it is
    pub fn check(&self, file_id: &str) -> Result<Language, SkipReason> {
        let path = normalize(strip_query(file_id));
        if self.exclude.is_match(&*path) {
            return Err(SkipReason::ExcludedByPattern);
        }
        Language::detect(&path).ok_or(SkipReason::NoMatchingLanguage)
    }

    /// True if the file identifier should be inspected
    pub fn is_candidate(&self, file_id: &str) -> bool {
        self.check(file_id).is_ok()
    }

    /// True if everything below `dir` is excluded, so a walker can prune it
    pub fn is_excluded_dir(&self, dir: &Path) -> bool {
        let dir = dir.to_string_lossy();
        let mut dir_path = normalize(&dir).into_owned();
        if !dir_path.ends_with('/') {
            dir_path.push('/');
        }
        self.exclude.is_match(&dir_path)
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        // The default globs are literals that always compile
        let mut builder = GlobSetBuilder::new();
        let patterns = default_exclude();
        for pattern in &patterns {
            if let Ok(glob) = Glob::new(pattern.as_str()) {
                builder.add(glob);
            }
        }
        Self {
            exclude: builder.build().unwrap_or_else(|_| GlobSet::empty()),
            patterns,
        }
    }
}

/// Converts backslashes to forward slashes so globs work on Windows ids
fn normalize(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_source_files() {
        let filter = SourceFilter::default();
        for id in [
            "src/App.vue",
            "src/main.ts",
            "src/main.js",
            "components/Card.tsx",
            "components/Card.jsx",
            "server/api.mts",
            "server/api.cts",
            "/home/dev/app/pages/index.vue?vue&type=script&setup=true&lang.ts",
        ] {
            assert!(filter.is_candidate(id), "{id} should be inspected");
        }
    }

    #[test]
    fn test_skips_vendor_directories() {
        let filter = SourceFilter::default();
        for id in [
            "node_modules/vue/index.js",
            "/home/dev/app/node_modules/axios/lib/axios.js",
            "/home/dev/app/.nuxt/components.d.ts",
            ".nuxt/app.vue",
            "C:\\dev\\app\\node_modules\\lodash\\lodash.js",
        ] {
            assert_eq!(
                filter.check(id),
                Err(SkipReason::ExcludedByPattern),
                "{id} should be excluded"
            );
        }
    }

    #[test]
    fn test_skips_other_extensions() {
        let filter = SourceFilter::default();
        for id in ["src/style.css", "README.md", "src/data.json", "index.html"] {
            assert_eq!(filter.check(id), Err(SkipReason::NoMatchingLanguage));
        }
    }

    #[test]
    fn test_check_returns_language() {
        let filter = SourceFilter::default();
        assert_eq!(filter.check("src/App.vue"), Ok(Language::Vue));
        assert_eq!(filter.check("src/util.mts"), Ok(Language::TypeScript));
    }

    #[test]
    fn test_custom_excludes_replace_defaults() {
        let filter = SourceFilter::new(&[GlobPattern::new("**/generated/**")]).unwrap();
        assert!(!filter.is_candidate("src/generated/api.ts"));
        assert!(filter.is_candidate("node_modules/x/index.js"));
        assert_eq!(filter.patterns(), &[GlobPattern::new("**/generated/**")]);
    }

    #[test]
    fn test_invalid_glob() {
        let err = SourceFilter::new(&[GlobPattern::new("[unclosed")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_is_excluded_dir() {
        let filter = SourceFilter::default();
        assert!(filter.is_excluded_dir(Path::new("app/node_modules")));
        assert!(filter.is_excluded_dir(Path::new("./.nuxt")));
        assert!(!filter.is_excluded_dir(Path::new("app/src")));
    }
}
