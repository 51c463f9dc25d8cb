// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reflog reading
//!
//! This module reads the reflog of the branch HEAD points at using the
//! `git2` crate, and defines [`LogProvider`], the seam the index pipeline
//! reads entries through.

use crate::entry::LogEntry;
use crate::error::GitError;
use chrono::{TimeZone, Utc};
use git2::{ReflogEntry, Repository};
use std::path::Path;
use tracing::debug;

/// A source of reflog entries for the current branch head
///
/// Entries are returned oldest first. Callers keep that order.
pub trait LogProvider {
    /// Read the reflog of the current branch head
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the log cannot be read.
    fn head_log(&self) -> Result<Vec<LogEntry>, GitError>;
}

impl LogProvider for [LogEntry] {
    fn head_log(&self) -> Result<Vec<LogEntry>, GitError> {
        Ok(self.to_vec())
    }
}

impl LogProvider for Vec<LogEntry> {
    fn head_log(&self) -> Result<Vec<LogEntry>, GitError> {
        self.as_slice().head_log()
    }
}

/// A git repository wrapper for reading reflogs
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Full name of the branch HEAD points at, e.g. `refs/heads/main`
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` if HEAD is not on a branch, or the
    /// underlying git2 error if HEAD is unborn.
    pub fn head_branch(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(GitError::DetachedHead);
        }
        head.name()
            .map(str::to_string)
            .ok_or(GitError::DetachedHead)
    }

    fn convert(entry: &ReflogEntry<'_>) -> LogEntry {
        let committer = entry.committer();
        let timestamp = Utc
            .timestamp_opt(committer.when().seconds(), 0)
            .single()
            .unwrap_or_else(Utc::now);

        LogEntry {
            sha: entry.id_new().to_string(),
            message: entry.message().unwrap_or("").to_string(),
            committer: committer.name().unwrap_or("Unknown").to_string(),
            timestamp,
        }
    }
}

impl LogProvider for GitRepo {
    fn head_log(&self) -> Result<Vec<LogEntry>, GitError> {
        let branch = self.head_branch()?;
        let reflog = self.repo.reflog(&branch)?;

        // git2 yields the newest entry first
        let mut entries: Vec<LogEntry> = reflog.iter().map(|e| Self::convert(&e)).collect();
        entries.reverse();

        debug!(branch = %branch, entries = entries.len(), "Read branch reflog");
        Ok(entries)
    }
}
