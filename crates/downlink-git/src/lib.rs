//! Downlink Git - commit retrieval for tracker synchronization
//!
//! This crate wraps git2 to produce the ordered commit records the sync
//! pipeline consumes: one record per pushed commit in a revision range.

mod commits;
mod error;
mod repository;
pub mod types;

pub use error::{GitError, Result};
pub use repository::{GitRepo, MAINLINE_REMOTE_REF};
pub use types::CommitRecord;
