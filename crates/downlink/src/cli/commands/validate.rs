//! Validate command

use clap::Args;
use console::style;
use tracing::info;

use downlink_core::{classify, MAINLINE_BRANCH};
use downlink_git::{CommitRecord, GitRepo, MAINLINE_REMOTE_REF};

use crate::cli::Cli;
use crate::exit_codes;

/// Check that every pushed commit subject matches the tag grammar
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Revision the branch pointed to before the push
    #[arg(long, env = "CI_COMMIT_BEFORE_SHA")]
    pub before_sha: String,

    /// Revision the push ended at
    #[arg(long, env = "CI_COMMIT_SHA")]
    pub commit_sha: String,

    /// Name of the pushed branch
    #[arg(long, env = "CI_COMMIT_REF_NAME")]
    pub branch: String,

    /// Checkout directory of the pushed repository
    #[arg(long, env = "CI_PROJECT_DIR")]
    pub project_dir: std::path::PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(branch = %self.branch, "executing validate command");

        let repo = GitRepo::open(&self.project_dir)?;

        // On a feature branch only the commits past mainline are checked
        let baseline = if self.branch == MAINLINE_BRANCH {
            repo.resolve_baseline(&self.before_sha)?
        } else {
            MAINLINE_REMOTE_REF.to_string()
        };
        let commits = repo.commits_in_range(&baseline, &self.commit_sha)?;

        let invalid = invalid_subjects(&commits);
        if !invalid.is_empty() {
            println!("{}", style("Invalid commit subjects:").red().bold());
            for subject in &invalid {
                println!("  {} {:?}", style("✗").red(), subject);
            }
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        if !cli.quiet {
            println!(
                "{} {} commit subject(s) valid",
                style("✓").green().bold(),
                commits.len()
            );
        }
        Ok(())
    }
}

/// Subjects in the pushed range that do not match the tag grammar
fn invalid_subjects(commits: &[CommitRecord]) -> Vec<&str> {
    commits
        .iter()
        .filter(|c| !classify(&c.subject).is_valid)
        .map(|c| c.subject.as_str())
        .collect()
}
