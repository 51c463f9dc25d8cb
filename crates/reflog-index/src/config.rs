//! Configuration for the reflog-index command
//!
//! This module provides the command-line configuration, including the
//! repository root, target document, link style and logging options.

use std::path::PathBuf;

use clap::Parser;

use crate::render::{DEFAULT_HOST, LinkStyle};
use crate::section::{DEFAULT_MARKER, SectionMode};
use crate::update::UpdateOptions;

/// Reflog Index - keep a README's commit index in sync with the branch reflog
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "reflog-index")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Account owning the repository on the web host
    ///
    /// When given together with REPOSITORY, index items link to the
    /// commit's tree page instead of the bare SHA.
    #[arg(requires = "repository")]
    pub username: Option<String>,

    /// Repository name on the web host
    #[arg(requires = "username")]
    pub repository: Option<String>,

    /// Directory to look for the repository from
    ///
    /// Any directory inside the working tree works. Defaults to the current
    /// working directory.
    #[arg(short, long, env = "REFLOG_INDEX_ROOT")]
    pub root: Option<PathBuf>,

    /// Document holding the index, relative to the working tree
    ///
    /// Defaults to README.md.
    #[arg(long, env = "REFLOG_INDEX_README")]
    pub readme: Option<PathBuf>,

    /// Text identifying the line the index is written after
    #[arg(long)]
    pub marker: Option<String>,

    /// Web host used for repository links
    #[arg(long, env = "REFLOG_INDEX_HOST")]
    pub host: Option<String>,

    /// Regenerate the whole index instead of appending new commits
    #[arg(long, default_value = "false")]
    pub rebuild: bool,

    /// Print the updated document to stdout instead of writing it
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the discovery start directory, using the current directory as default
    ///
    /// Returns `None` if no root is specified and the current directory
    /// cannot be determined.
    #[must_use]
    pub fn root_path(&self) -> Option<PathBuf> {
        self.root.clone().or_else(|| std::env::current_dir().ok())
    }

    /// Get the document path, resolved against `root` when relative
    #[must_use]
    pub fn readme_path(&self, root: &std::path::Path) -> PathBuf {
        let readme = self
            .readme
            .clone()
            .unwrap_or_else(|| PathBuf::from("README.md"));
        if readme.is_absolute() {
            readme
        } else {
            root.join(readme)
        }
    }

    /// Marker text, falling back to the default marker
    #[must_use]
    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }

    /// Web host, falling back to the default host
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Link style implied by the positional arguments
    #[must_use]
    pub fn link_style(&self) -> LinkStyle {
        match (&self.username, &self.repository) {
            (Some(account), Some(repository)) => LinkStyle::Hosted {
                host: self.host().to_string(),
                account: account.clone(),
                repository: repository.clone(),
            },
            _ => LinkStyle::Bare,
        }
    }

    /// Section mode implied by `--rebuild`
    #[must_use]
    pub fn section_mode(&self) -> SectionMode {
        if self.rebuild {
            SectionMode::Rebuild
        } else {
            SectionMode::Append
        }
    }

    /// Update options for this configuration
    #[must_use]
    pub fn update_options(&self) -> UpdateOptions {
        UpdateOptions::default()
            .with_marker(self.marker())
            .with_link_style(self.link_style())
            .with_mode(self.section_mode())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the root path is specified but doesn't exist or
    /// is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref root) = self.root {
            if !root.exists() {
                return Err(ConfigError::RootNotFound(root.clone()));
            }
            if !root.is_dir() {
                return Err(ConfigError::RootNotDirectory(root.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Root path not found
    #[error("Repository root not found: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("Repository root is not a directory: {0}")]
    RootNotDirectory(PathBuf),
}
