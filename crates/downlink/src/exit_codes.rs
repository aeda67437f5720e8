//! Exit codes for the CLI

#![allow(dead_code)]

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Git error
pub const GIT_ERROR: i32 = 2;

/// One or more tracker comments could not be posted
pub const TRACKER_ERROR: i32 = 3;

/// Commit message validation failed
pub const VALIDATION_ERROR: i32 = 4;
