//! Downlink Tracker - issue tracker delivery for rendered comments
//!
//! Thin async REST client: authentication, endpoint construction, and
//! error mapping. No comment content is interpreted here.

mod client;
mod error;

pub use client::TrackerClient;
pub use error::{Result, TrackerError};
