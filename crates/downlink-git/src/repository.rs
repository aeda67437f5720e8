//! Git repository operations

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::{info, instrument};

use crate::error::{GitError, Result};

/// Remote reference used as the range baseline when a branch is new
pub const MAINLINE_REMOTE_REF: &str = "origin/master";

/// Git repository wrapper
pub struct GitRepo {
    pub(crate) repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at the given path
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "opening git repository");
        let repo = Repository::open(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::RepositoryNotFound(path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            repo,
        })
    }

    /// Discover and open a repository by searching parent directories
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!(start_path = %start_path.display(), "discovering git repository");
        let repo = Repository::discover(start_path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(start_path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the effective range baseline for a pushed branch.
    ///
    /// CI reports the all-zero revision as the "before" SHA when the push
    /// created the branch; in that case the mainline remote tip is the
    /// baseline instead. A mainline without a remote tip is an explicit
    /// error rather than a silent full-history walk.
    pub fn resolve_baseline(&self, start_rev: &str) -> Result<String> {
        if !start_rev.is_empty() && start_rev.chars().all(|c| c == '0') {
            info!(baseline = MAINLINE_REMOTE_REF, "new branch, using mainline tip as baseline");
            let mainline = self
                .repo
                .revparse_single(MAINLINE_REMOTE_REF)
                .map_err(|_| GitError::NoMainlineTip(MAINLINE_REMOTE_REF.to_string()))?;
            return Ok(mainline.id().to_string());
        }
        Ok(start_rev.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_open_missing_repo() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nowhere");
        assert!(GitRepo::open(&missing).is_err());
    }

    #[test]
    fn test_discover_repo() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        let subdir = temp.path().join("sub").join("dir");
        std::fs::create_dir_all(&subdir).unwrap();

        let repo = GitRepo::discover(&subdir).unwrap();
        // Tempdirs can sit behind symlinks, compare canonical paths
        let repo_path = repo.path().canonicalize().unwrap();
        let temp_path = temp.path().canonicalize().unwrap();
        assert_eq!(repo_path, temp_path);
    }

    #[test]
    fn test_resolve_baseline_passthrough() {
        let (_temp, repo) = init_repo();
        let sha = "abc1234567890abc1234567890abc1234567890a";
        assert_eq!(repo.resolve_baseline(sha).unwrap(), sha);
    }

    #[test]
    fn test_resolve_baseline_new_branch_without_mainline_tip() {
        let (_temp, repo) = init_repo();
        let zeros = "0".repeat(40);
        match repo.resolve_baseline(&zeros) {
            Err(GitError::NoMainlineTip(_)) => {}
            other => panic!("expected NoMainlineTip, got {:?}", other.map(|_| ())),
        }
    }
}
