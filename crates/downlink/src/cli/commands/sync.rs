//! Sync command

use clap::Args;
use console::style;
use tracing::{info, warn};

use downlink_core::{group_by_issue, render_comment, CommentContext, IssueMatcher};
use downlink_git::{CommitRecord, GitRepo};
use downlink_tracker::TrackerClient;

use crate::cli::Cli;
use crate::exit_codes;

/// Post per-issue summary comments for the pushed commit range
#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Issue tracker base URL
    #[arg(long, env = "JIRA_URL")]
    pub tracker_url: String,

    /// Issue tracker user
    #[arg(long, env = "JIRA_USER")]
    pub tracker_user: String,

    /// Issue tracker password or API token
    #[arg(long, env = "JIRA_PASSWORD", hide_env_values = true)]
    pub tracker_password: String,

    /// VCS server base URL used in commit links
    #[arg(long, env = "CI_SERVER_URL")]
    pub server_url: String,

    /// Revision the branch pointed to before the push (all zeros for a new branch)
    #[arg(long, env = "CI_COMMIT_BEFORE_SHA")]
    pub before_sha: String,

    /// Revision the push ended at
    #[arg(long, env = "CI_COMMIT_SHA")]
    pub commit_sha: String,

    /// Name of the pushed branch
    #[arg(long, env = "CI_COMMIT_REF_NAME")]
    pub branch: String,

    /// Project name
    #[arg(long, env = "CI_PROJECT_NAME")]
    pub project_name: String,

    /// Project namespace
    #[arg(long, env = "CI_PROJECT_NAMESPACE")]
    pub project_namespace: String,

    /// Checkout directory of the pushed repository
    #[arg(long, env = "CI_PROJECT_DIR")]
    pub project_dir: std::path::PathBuf,
}

impl SyncCommand {
    /// Execute the sync command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(branch = %self.branch, before = %self.before_sha, "executing sync command");

        let repo = GitRepo::open(&self.project_dir)?;
        let baseline = repo.resolve_baseline(&self.before_sha)?;
        let commits = repo.commits_in_range(&baseline, &self.commit_sha)?;

        let groups = group_by_issue(&commits, &IssueMatcher::tracker_sync());
        if groups.is_empty() {
            if !cli.quiet {
                println!(
                    "{}",
                    style("No issue references in the pushed commits.").yellow()
                );
            }
            return Ok(());
        }

        let ctx = CommentContext {
            server_url: self.server_url.clone(),
            branch_name: self.branch.clone(),
            project_name: self.project_name.clone(),
            project_namespace: self.project_namespace.clone(),
        };
        let client = TrackerClient::new(
            &self.tracker_url,
            &self.tracker_user,
            &self.tracker_password,
        );

        let rt = tokio::runtime::Runtime::new()?;
        let mut failed = 0usize;

        for (issue, commits) in groups.iter() {
            if !cli.quiet {
                println!(
                    "Creating comment in {} with {}",
                    style(issue).cyan(),
                    match commits.len() {
                        1 => "1 commit".to_string(),
                        n => format!("{} commits", n),
                    }
                );
            }

            // Comments list commits oldest first; scan order is newest first
            let oldest_first: Vec<CommitRecord> = commits.iter().rev().cloned().collect();
            let comment = render_comment(&oldest_first, &ctx);

            // One failed issue must not stop the rest
            if let Err(e) = rt.block_on(client.add_comment(issue, &comment)) {
                warn!(issue, error = %e, "failed to post tracker comment");
                eprintln!("{} {}: {}", style("✗").red(), issue, e);
                failed += 1;
            }
        }

        if failed > 0 {
            eprintln!(
                "{} failed to post {} of {} comments",
                style("✗").red().bold(),
                failed,
                groups.len()
            );
            std::process::exit(exit_codes::TRACKER_ERROR);
        }

        if !cli.quiet {
            println!(
                "{} Posted {} comment(s)",
                style("✓").green().bold(),
                groups.len()
            );
        }
        Ok(())
    }
}
