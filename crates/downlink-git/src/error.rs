//! Git error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Revision could not be resolved
    #[error("Failed to resolve revision '{0}'")]
    RevisionNotFound(String),

    /// Mainline branch has no remote tip to serve as a range baseline
    #[error("Mainline branch has no remote tip at {0}")]
    NoMainlineTip(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}
