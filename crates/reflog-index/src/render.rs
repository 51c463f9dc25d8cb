//! Index item rendering

use reflog_index_git::LogEntry;

use crate::filter::clean_message;

/// Web host used for hosted links when none is configured
pub const DEFAULT_HOST: &str = "github.com";

/// How an index item links to its commit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkStyle {
    /// Link target is the bare SHA
    #[default]
    Bare,
    /// Link target is the commit's tree page on a web host
    Hosted {
        /// Web host, e.g. `github.com`
        host: String,
        /// Account owning the repository
        account: String,
        /// Repository name
        repository: String,
    },
}

impl LinkStyle {
    /// Hosted style on the default host
    #[must_use]
    pub fn hosted(account: impl Into<String>, repository: impl Into<String>) -> Self {
        Self::Hosted {
            host: DEFAULT_HOST.to_string(),
            account: account.into(),
            repository: repository.into(),
        }
    }

    /// Link target for `sha`
    #[must_use]
    pub fn target(&self, sha: &str) -> String {
        match self {
            Self::Bare => sha.to_string(),
            Self::Hosted {
                host,
                account,
                repository,
            } => format!("https://{host}/{account}/{repository}/tree/{sha}"),
        }
    }

    /// Render one entry as a Markdown list item
    #[must_use]
    pub fn render_item(&self, entry: &LogEntry) -> String {
        format!(
            "* [{}]({})",
            clean_message(&entry.message),
            self.target(&entry.sha)
        )
    }
}
