// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reflog entry selection
//!
//! Decides which reflog entries become index items and cleans their
//! messages into display labels.

use std::collections::HashSet;

use reflog_index_git::LogEntry;

/// Token a reflog message must contain to be indexed
pub const INCLUDE_TOKEN: &str = "commit";

/// Tokens that keep an entry out of the index even when it is a commit
pub const EXCLUDE_TOKENS: [&str; 2] = ["[doc]", "clone"];

/// Operation prefixes git writes in front of commit reflog messages
pub const MESSAGE_PREFIXES: [&str; 2] = ["commit: ", "commit (initial): "];

/// Strip every known operation prefix from a reflog message
///
/// Prefixes are removed wherever they occur, not only at the start, and
/// removal repeats until none is left.
#[must_use]
pub fn clean_message(message: &str) -> String {
    let mut cleaned = message.to_string();
    loop {
        let before = cleaned.len();
        for prefix in MESSAGE_PREFIXES {
            cleaned = cleaned.replace(prefix, "");
        }
        if cleaned.len() == before {
            return cleaned;
        }
    }
}

/// Whether a message passes the include/exclude token rules
#[must_use]
pub fn is_indexable(message: &str) -> bool {
    message.contains(INCLUDE_TOKEN) && !EXCLUDE_TOKENS.iter().any(|t| message.contains(t))
}

/// Stateful filter over one run's reflog entries
///
/// An entry is admitted when its message is indexable, its SHA does not
/// occur in the known document text, and no earlier entry in this run had
/// the same SHA.
///
/// The known-text check is a substring search, not whole-line equality, so
/// a SHA mentioned anywhere in a surviving line counts as already listed.
#[derive(Debug)]
pub struct EntryFilter<'a> {
    known: &'a str,
    emitted: HashSet<String>,
}

impl<'a> EntryFilter<'a> {
    /// Create a filter that deduplicates against `known` text
    #[must_use]
    pub fn new(known: &'a str) -> Self {
        Self {
            known,
            emitted: HashSet::new(),
        }
    }

    /// Decide whether `entry` should be indexed, recording it if so
    pub fn admit(&mut self, entry: &LogEntry) -> bool {
        if !is_indexable(&entry.message) || self.known.contains(entry.sha.as_str()) {
            return false;
        }
        self.emitted.insert(entry.sha.clone())
    }

    /// Keep the admitted entries, in their original order
    pub fn select<'e>(&mut self, entries: &'e [LogEntry]) -> Vec<&'e LogEntry> {
        entries.iter().filter(|e| self.admit(e)).collect()
    }
}
