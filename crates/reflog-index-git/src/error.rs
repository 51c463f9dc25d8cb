// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for reflog-index-git

use thiserror::Error;

/// Errors that can occur while reading a reflog
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// HEAD does not point at a branch, so there is no branch reflog to read
    #[error("HEAD is detached; check out a branch first")]
    DetachedHead,
}
