//! File discovery and traversal with gitignore support
//!
//! The `police check` command acts as its own host pipeline: it walks the
//! requested paths and hands every candidate file to the inspector. Excluded
//! directories are pruned during the walk so `node_modules` is never entered.

use crate::engine::file_filter::SourceFilter;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Path does not exist: {0}")]
    Missing(PathBuf),
}

/// Iterator over candidate source files below one root
pub struct FileWalker {
    walker: ignore::Walk,
    filter: SourceFilter,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `root` - Directory (or single file) to walk
    /// * `filter` - Inclusion filter; excluded directories are not descended into
    pub fn new(root: &Path, filter: &SourceFilter) -> Result<Self, FileWalkerError> {
        if !root.exists() {
            return Err(FileWalkerError::Missing(root.to_path_buf()));
        }

        let prune = filter.clone();
        let walker = WalkBuilder::new(root)
            .hidden(false) // Don't skip hidden files by default
            .git_ignore(true) // Respect .gitignore
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                if !is_dir {
                    return true;
                }
                entry.file_name() != ".git" && !prune.is_excluded_dir(entry.path())
            })
            .build();

        Ok(Self {
            walker,
            filter: filter.clone(),
        })
    }

    /// Walks the tree, yielding candidate files in walk order
    pub fn walk(self) -> impl Iterator<Item = Result<PathBuf, FileWalkerError>> {
        let filter = self.filter;

        self.walker.filter_map(move |result| match result {
            Ok(entry) => {
                // Only process files (not directories)
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    return None;
                }

                let path = entry.path();
                match filter.check(&path.to_string_lossy()) {
                    Ok(_) => Some(Ok(path.to_path_buf())),
                    Err(reason) => {
                        tracing::trace!(path = %path.display(), ?reason, "not a candidate");
                        None
                    }
                }
            }
            Err(e) => Some(Err(FileWalkerError::Walk(e))),
        })
    }
}
