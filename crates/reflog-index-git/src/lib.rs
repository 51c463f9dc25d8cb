// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! reflog-index-git: branch reflog reading for reflog-index
//!
//! This library crate reads the reflog of the branch HEAD points at and
//! exposes it through the [`LogProvider`] trait, so callers can swap in
//! synthetic entries.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use reflog_index_git::{GitRepo, LogProvider};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! for entry in repo.head_log().expect("read reflog") {
//!     println!("{} {}", entry.short_sha(), entry.message);
//! }
//! ```

pub mod entry;
pub mod error;
pub mod reader;

pub use entry::LogEntry;
pub use error::GitError;
pub use reader::{GitRepo, LogProvider};
