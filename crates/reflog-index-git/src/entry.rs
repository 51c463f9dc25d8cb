//! Reflog entry type

use chrono::{DateTime, Utc};

/// One update of a branch pointer, as recorded in its reflog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The SHA the ref moved to (40 hex characters)
    pub sha: String,
    /// Reflog message, e.g. `commit: Fix bug`
    pub message: String,
    /// Name of the identity that moved the ref
    pub committer: String,
    /// When the ref moved
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    /// Build an entry with only the fields the index cares about.
    ///
    /// The committer is empty and the timestamp is the Unix epoch.
    #[must_use]
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            committer: String::new(),
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: short_sha is always a prefix of at most 7 characters
        #[test]
        fn prop_short_sha_is_prefix(sha in "[0-9a-f]{0,40}") {
            let entry = LogEntry::new(sha.clone(), "commit: x");
            let short = entry.short_sha();
            prop_assert!(short.len() <= 7);
            prop_assert!(sha.starts_with(short));
        }
    }
}
