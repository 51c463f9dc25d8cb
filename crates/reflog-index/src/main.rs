//! reflog-index: keep a README's commit index in sync with the branch reflog
//!
//! This binary reads the reflog of the checked-out branch and rewrites the
//! section of the target document below its marker line.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use reflog_index::Updater;
use reflog_index::config::Config;
use reflog_index_git::GitRepo;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so --dry-run output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    config.validate()?;

    let root = config
        .root_path()
        .context("Could not determine the current directory")?;
    let repo = GitRepo::discover(&root)
        .with_context(|| format!("Failed to find a repository at {}", root.display()))?;
    let workdir = repo
        .workdir()
        .context("Bare repositories have no working tree to update")?;
    let readme = config.readme_path(workdir);
    debug!(workdir = %workdir.display(), readme = %readme.display(), "Resolved paths");

    let updater = Updater::new(config.update_options());

    if config.dry_run {
        let plan = updater.plan_file(&repo, &readme)?;
        print!("{}", plan.updated);
    } else {
        updater.update_file(&repo, &readme)?;
    }
    Ok(())
}
