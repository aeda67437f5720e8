//! Downlink Core - commit-to-issue correlation pipeline
//!
//! This crate holds the pure logic of the sync: extracting issue keys
//! from commit messages, classifying subject lines against the
//! bracketed-tag grammar, grouping commits per referenced issue, and
//! rendering the tracker comment for each group.

pub mod comment;
pub mod group;
pub mod issues;
pub mod subject;

pub use comment::{
    render_comment, render_pr_comment, CommentContext, PullRequestContext, MAINLINE_BRANCH,
};
pub use group::{group_by_issue, IssueGroups};
pub use issues::{IssueMatcher, GENERAL_BLACKLIST, TRACKER_SYNC_BLACKLIST};
pub use subject::{classify, CommitKind, Subject};
