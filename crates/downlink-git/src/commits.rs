//! Commit history operations

use git2::Sort;
use tracing::debug;

use crate::error::{GitError, Result};
use crate::repository::GitRepo;
use crate::types::CommitRecord;

impl GitRepo {
    /// Get the commits reachable from `end` but not from `start`,
    /// newest first.
    pub fn commits_in_range(&self, start: &str, end: &str) -> Result<Vec<CommitRecord>> {
        let start_oid = self
            .repo
            .revparse_single(start)
            .map_err(|_| GitError::RevisionNotFound(start.to_string()))?
            .id();
        let end_oid = self
            .repo
            .revparse_single(end)
            .map_err(|_| GitError::RevisionNotFound(end.to_string()))?
            .id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(end_oid)?;
        revwalk.hide(start_oid)?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_record(&commit));
        }

        debug!(start, end, count = commits.len(), "retrieved commit range");
        Ok(commits)
    }
}

/// Convert a git2 Commit to a CommitRecord
fn commit_to_record(commit: &git2::Commit<'_>) -> CommitRecord {
    let id = commit.id().to_string();
    let author = commit.author();

    CommitRecord::new(
        id,
        author.name().unwrap_or("Unknown"),
        commit.summary().unwrap_or(""),
        commit.body().unwrap_or(""),
    )
}
