//! Tracker comment rendering
//!
//! Produces one Jira-wiki-markup panel per issue summarizing the commits
//! that referenced it. The exact markup strings are an output contract
//! with the tracker; the sink handles any transport escaping.

use downlink_git::CommitRecord;

use crate::subject::classify;

/// Branch name of the designated mainline integration branch
pub const MAINLINE_BRANCH: &str = "master";

/// Panel background for pushes to the mainline branch
const RELEASE_BGCOLOR: &str = "#deebff";
/// Panel background for pushes to any other branch
const FEATURE_BGCOLOR: &str = "#ffffce";
/// Footer text color
const FOOTER_COLOR: &str = "#4c9aff";

/// Repository and branch context a rendered comment links back to
#[derive(Debug, Clone)]
pub struct CommentContext {
    /// Base URL of the VCS server
    pub server_url: String,
    /// Branch the commits were pushed to
    pub branch_name: String,
    /// Project name (last path segment)
    pub project_name: String,
    /// Project namespace (group/user path segment)
    pub project_namespace: String,
}

impl CommentContext {
    fn project_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.server_url, self.project_namespace, self.project_name
        )
    }
}

/// Render the per-issue summary comment for `commits`.
///
/// Commits are emitted in the order given; callers pass them oldest
/// first. Author attribution is collected across all commits, first
/// appearance first.
pub fn render_comment(commits: &[CommitRecord], ctx: &CommentContext) -> String {
    let bgcolor = if ctx.branch_name == MAINLINE_BRANCH {
        RELEASE_BGCOLOR
    } else {
        FEATURE_BGCOLOR
    };

    let mut comment = String::new();
    comment.push_str(&format!(
        "{{panel:bgColor={}|borderStyle=none}}\n",
        bgcolor
    ));

    let mut authors: Vec<&str> = Vec::new();
    for commit in commits {
        let subject = classify(&commit.subject);
        comment.push_str(&format!(
            "{} [{}|{}/-/commit/{}]\n",
            subject.symbol,
            subject.text,
            ctx.project_url(),
            commit.id
        ));
        if !authors.contains(&commit.author.as_str()) {
            authors.push(&commit.author);
        }
    }

    comment.push('\n');
    comment.push_str(&format!(
        "{{color:{}}}{} contributed to [{}|{}/-/tree/{}]",
        FOOTER_COLOR,
        authors.join(" "),
        ctx.project_name,
        ctx.project_url(),
        ctx.branch_name
    ));
    if ctx.branch_name != MAINLINE_BRANCH {
        comment.push_str(&format!(" at *{}*", ctx.branch_name));
    }
    comment.push_str("{color}\n");
    comment.push_str("{panel}");

    comment
}

/// Context for the comment announcing an opened pull request
#[derive(Debug, Clone)]
pub struct PullRequestContext {
    /// Author of the pull request
    pub author_name: String,
    /// Pull request title
    pub title: String,
    /// Pull request URL
    pub url: String,
    /// Source branch of the pull request
    pub branch_name: String,
    /// Branch the pull request targets
    pub base_branch_name: String,
    /// Project name
    pub project_name: String,
    /// Project URL
    pub project_url: String,
}

/// Render the comment posted when a pull request is opened for a branch
/// whose name references an issue.
pub fn render_pr_comment(ctx: &PullRequestContext) -> String {
    let bgcolor = if ctx.branch_name == MAINLINE_BRANCH {
        RELEASE_BGCOLOR
    } else {
        FEATURE_BGCOLOR
    };

    format!(
        "{{panel:bgColor={}|borderStyle=none}}\n\
         *{}* opened a *pull request* \
         in [{}|{}] \
         for branch *{}* \u{2190} *{}*:\
         {{quote}}\
         [{}|{}]\
         {{quote}}\n\
         {{panel}}",
        bgcolor,
        ctx.author_name,
        ctx.project_name,
        ctx.project_url,
        ctx.base_branch_name,
        ctx.branch_name,
        ctx.title,
        ctx.url
    )
}
