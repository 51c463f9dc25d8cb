// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Index update pipeline
//!
//! Reads the branch reflog, selects and renders the entries that belong in
//! the index, and rewrites the section below the marker line.
//!
//! # Example
//!
//! ```no_run
//! use reflog_index::update::{UpdateOptions, Updater};
//! use reflog_index_git::GitRepo;
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let updater = Updater::new(UpdateOptions::default());
//! let plan = updater.update_file(&repo, "README.md").expect("update");
//! println!("Indexed {} new commits", plan.added.len());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use reflog_index_git::{GitError, LogProvider};

use crate::filter::EntryFilter;
use crate::render::LinkStyle;
use crate::section::{DEFAULT_MARKER, Document, SectionMode};

// ============================================================================
// Error Types
// ============================================================================

/// Update errors
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Reflog could not be read
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// Target document could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Document path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Target document could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Document path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// No line in the document contains the marker
    #[error("Could not find section to update: no line containing {marker:?} in {path}")]
    MarkerNotFound {
        /// Marker text searched for
        marker: String,
        /// Document path, or `<memory>` for in-memory documents
        path: String,
    },
}

// ============================================================================
// Options
// ============================================================================

/// Options controlling an index update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Text identifying the marker line
    pub marker: String,
    /// How index items link to commits
    pub link_style: LinkStyle,
    /// What happens to the lines already below the marker
    pub mode: SectionMode,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            link_style: LinkStyle::default(),
            mode: SectionMode::default(),
        }
    }
}

impl UpdateOptions {
    /// Set the link style
    #[must_use]
    pub fn with_link_style(mut self, link_style: LinkStyle) -> Self {
        self.link_style = link_style;
        self
    }

    /// Set the section mode
    #[must_use]
    pub fn with_mode(mut self, mode: SectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the marker text
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

// ============================================================================
// Updater
// ============================================================================

/// Result of planning an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Document text before the update
    pub original: String,
    /// Document text after the update
    pub updated: String,
    /// Newly rendered index items, in log order
    pub added: Vec<String>,
}

impl UpdatePlan {
    /// Whether applying the plan would change the document
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.original != self.updated
    }
}

/// Runs the reflog-to-index pipeline
#[derive(Debug, Clone, Default)]
pub struct Updater {
    options: UpdateOptions,
}

impl Updater {
    /// Create an updater with the given options
    #[must_use]
    pub fn new(options: UpdateOptions) -> Self {
        Self { options }
    }

    /// Compute the updated text for an in-memory document
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::MarkerNotFound` if no line contains the marker,
    /// or `UpdateError::Git` if the log cannot be read.
    pub fn plan<P>(&self, provider: &P, text: &str) -> Result<UpdatePlan, UpdateError>
    where
        P: LogProvider + ?Sized,
    {
        self.plan_named(provider, text, "<memory>")
    }

    fn plan_named<P>(
        &self,
        provider: &P,
        text: &str,
        name: &str,
    ) -> Result<UpdatePlan, UpdateError>
    where
        P: LogProvider + ?Sized,
    {
        let document = Document::parse(text);
        let marker = &self.options.marker;
        let marker_index = document
            .find_marker(marker)
            .ok_or_else(|| UpdateError::MarkerNotFound {
                marker: marker.clone(),
                path: name.to_string(),
            })?;
        debug!(line = marker_index + 1, "Found index marker");

        let entries = provider.head_log()?;
        let known = document.known_text(marker_index, self.options.mode);
        let mut filter = EntryFilter::new(&known);
        let selected = filter.select(&entries);
        debug!(
            total = entries.len(),
            selected = selected.len(),
            "Filtered reflog entries"
        );

        let added: Vec<String> = selected
            .iter()
            .map(|e| {
                debug!(
                    sha = e.short_sha(),
                    committer = %e.committer,
                    at = %e.timestamp,
                    "Indexing reflog entry"
                );
                self.options.link_style.render_item(e)
            })
            .collect();
        let updated = document.rewrite(marker_index, self.options.mode, &added);

        Ok(UpdatePlan {
            original: text.to_string(),
            updated,
            added,
        })
    }

    /// Compute the updated text for the document at `path` without writing
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::Read` if the file cannot be read, plus the
    /// errors of [`Updater::plan`].
    pub fn plan_file<P>(
        &self,
        provider: &P,
        path: impl AsRef<Path>,
    ) -> Result<UpdatePlan, UpdateError>
    where
        P: LogProvider + ?Sized,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| UpdateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.plan_named(provider, &text, &path.display().to_string())
    }

    /// Update the index section of the document at `path` in place
    ///
    /// The file is left untouched when the marker is missing or when the
    /// update would not change it.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::Write` if the file cannot be written, plus the
    /// errors of [`Updater::plan_file`].
    pub fn update_file<P>(
        &self,
        provider: &P,
        path: impl AsRef<Path>,
    ) -> Result<UpdatePlan, UpdateError>
    where
        P: LogProvider + ?Sized,
    {
        let path = path.as_ref();
        info!(path = %path.display(), mode = ?self.options.mode, "Updating commit index");

        let plan = self.plan_file(provider, path)?;
        if plan.is_changed() {
            fs::write(path, &plan.updated).map_err(|source| UpdateError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(added = plan.added.len(), "Index updated");
        } else {
            info!("Index already up to date");
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflog_index_git::LogEntry;
    use similar_asserts::assert_eq;

    const README: &str = "# Project\n\n<!-- index starts -->\n";

    /// Provider whose log cannot be read
    struct BrokenLog;

    impl LogProvider for BrokenLog {
        fn head_log(&self) -> Result<Vec<LogEntry>, GitError> {
            Err(GitError::DetachedHead)
        }
    }

    #[test]
    fn test_plan_bare_links() {
        let log = vec![LogEntry::new("abc123", "commit: Fix bug")];
        let plan = Updater::default().plan(&log, README).expect("plan");
        assert_eq!(plan.updated, format!("{README}* [Fix bug](abc123)"));
        assert_eq!(plan.added, vec!["* [Fix bug](abc123)".to_string()]);
        assert!(plan.is_changed());
    }

    #[test]
    fn test_plan_missing_marker() {
        let log = vec![LogEntry::new("abc123", "commit: Fix bug")];
        let err = Updater::default()
            .plan(&log, "# No marker\n")
            .expect_err("marker is missing");
        match err {
            UpdateError::MarkerNotFound { marker, path } => {
                assert_eq!(marker, DEFAULT_MARKER);
                assert_eq!(path, "<memory>");
            }
            other => panic!("Expected MarkerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_marker_checked_before_log_is_read() {
        let err = Updater::default()
            .plan(&BrokenLog, "# No marker\n")
            .expect_err("marker is missing");
        assert!(matches!(err, UpdateError::MarkerNotFound { .. }));
    }

    #[test]
    fn test_log_error_propagates() {
        let err = Updater::default()
            .plan(&BrokenLog, README)
            .expect_err("log is broken");
        assert!(matches!(err, UpdateError::Git(GitError::DetachedHead)));
    }

    #[test]
    fn test_custom_marker() {
        let options = UpdateOptions::default().with_marker("## Commits");
        let log = vec![LogEntry::new("abc123", "commit: Fix bug")];
        let plan = Updater::new(options)
            .plan(&log, "## Commits\n")
            .expect("plan");
        assert_eq!(plan.updated, "## Commits\n* [Fix bug](abc123)");
    }

    #[test]
    fn test_rebuild_ignores_previous_items() {
        let text = format!("{README}* [Fix bug](abc123)");
        let log = vec![
            LogEntry::new("abc123", "commit: Fix bug"),
            LogEntry::new("def456", "commit: Add feature"),
        ];

        let append = Updater::default().plan(&log, &text).expect("append");
        assert_eq!(append.added, vec!["* [Add feature](def456)".to_string()]);

        let rebuild = Updater::new(UpdateOptions::default().with_mode(SectionMode::Rebuild))
            .plan(&log, &text)
            .expect("rebuild");
        assert_eq!(rebuild.added.len(), 2);
        assert_eq!(append.updated, rebuild.updated);
    }

    #[test]
    fn test_sha_only_in_dropped_text_is_indexed() {
        let text = "<!-- index starts -->\n* [Old](aaa)\nsee bbb\n";
        let log = vec![
            LogEntry::new("aaa", "commit: Old"),
            LogEntry::new("bbb", "commit: Lost"),
        ];
        let updater = Updater::default();

        let first = updater.plan(&log, text).expect("first run");
        assert_eq!(
            first.updated,
            "<!-- index starts -->\n* [Old](aaa)\n* [Lost](bbb)"
        );

        let second = updater.plan(&log, &first.updated).expect("second run");
        assert!(!second.is_changed());
    }

    #[test]
    fn test_no_change_when_nothing_new() {
        let text = format!("{README}* [Fix bug](abc123)");
        let log = vec![LogEntry::new("abc123", "commit: Fix bug")];
        let plan = Updater::default().plan(&log, &text).expect("plan");
        assert!(!plan.is_changed());
        assert!(plan.added.is_empty());
    }
}
