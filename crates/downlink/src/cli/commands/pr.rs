//! Pr command

use clap::Args;
use console::style;
use tracing::info;

use downlink_core::{render_pr_comment, IssueMatcher, PullRequestContext};
use downlink_tracker::TrackerClient;

use crate::cli::Cli;

/// Announce an opened pull request on the issue its branch references
#[derive(Debug, Args)]
pub struct PrCommand {
    /// Issue tracker base URL
    #[arg(long, env = "JIRA_URL")]
    pub tracker_url: String,

    /// Issue tracker user
    #[arg(long, env = "JIRA_USER")]
    pub tracker_user: String,

    /// Issue tracker password or API token
    #[arg(long, env = "JIRA_PASSWORD", hide_env_values = true)]
    pub tracker_password: String,

    /// Author of the pull request
    #[arg(long, env = "CI_PR_AUTHOR_NAME")]
    pub author_name: String,

    /// Pull request title
    #[arg(long, env = "CI_PR_TITLE")]
    pub title: String,

    /// Pull request URL
    #[arg(long, env = "CI_PR_URL")]
    pub url: String,

    /// Source branch of the pull request
    #[arg(long, env = "CI_BRANCH_NAME")]
    pub branch: String,

    /// Branch the pull request targets
    #[arg(long, env = "CI_BASE_BRANCH_NAME")]
    pub base_branch: String,

    /// Project name
    #[arg(long, env = "CI_PROJECT_NAME")]
    pub project_name: String,

    /// Project URL
    #[arg(long, env = "CI_PROJECT_URL")]
    pub project_url: String,
}

impl PrCommand {
    /// Execute the pr command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(branch = %self.branch, "executing pr command");

        // The branch name carries at most one meaningful issue reference;
        // sort for a deterministic pick since extraction is unordered
        let mut issues: Vec<String> = IssueMatcher::general()
            .extract(&self.branch)
            .into_iter()
            .collect();
        issues.sort();

        let Some(issue) = issues.first() else {
            if !cli.quiet {
                println!(
                    "{}",
                    style("Branch name references no issue, nothing to announce.").yellow()
                );
            }
            return Ok(());
        };

        let comment = render_pr_comment(&PullRequestContext {
            author_name: self.author_name.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            branch_name: self.branch.clone(),
            base_branch_name: self.base_branch.clone(),
            project_name: self.project_name.clone(),
            project_url: self.project_url.clone(),
        });

        let client = TrackerClient::new(
            &self.tracker_url,
            &self.tracker_user,
            &self.tracker_password,
        );
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(client.add_comment(issue, &comment))?;

        if !cli.quiet {
            println!(
                "{} Announced pull request on {}",
                style("✓").green().bold(),
                style(issue).cyan()
            );
        }
        Ok(())
    }
}
