//! Issue tracker REST client
//!
//! Delivers rendered comments to the tracker over its v2 REST API with
//! basic authentication. The client is a pure transport: the comment
//! string arrives fully rendered and is carried as a JSON string field,
//! so serialization handles all escaping.

use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::{debug, info};

use crate::error::{Result, TrackerError};

/// Tracker REST client
pub struct TrackerClient {
    base_url: String,
    username: String,
    password: String,
    client: Client,
}

impl TrackerClient {
    /// Create a client for the tracker at `base_url`
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            username: username.into(),
            password: password.into(),
            client: Client::new(),
        }
    }

    /// REST endpoint for comments on one issue
    fn comment_url(&self, issue: &str) -> String {
        format!("{}/rest/api/2/issue/{}/comment", self.base_url, issue)
    }

    /// Post a comment to an issue.
    ///
    /// Failures surface to the caller; there is no retry.
    pub async fn add_comment(&self, issue: &str, comment: &str) -> Result<()> {
        let url = self.comment_url(issue);
        debug!(issue, url, "posting tracker comment");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&json!({ "body": comment }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TrackerError::AuthenticationFailed(format!(
                "tracker rejected credentials for {}",
                self.username
            )));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TrackerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        info!(issue, "posted tracker comment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_url() {
        let client = TrackerClient::new("https://tracker.example.com", "bot", "secret");
        assert_eq!(
            client.comment_url("AB-12"),
            "https://tracker.example.com/rest/api/2/issue/AB-12/comment"
        );
    }

    #[test]
    fn test_comment_url_trims_trailing_slash() {
        let client = TrackerClient::new("https://tracker.example.com/", "bot", "secret");
        assert_eq!(
            client.comment_url("AB-12"),
            "https://tracker.example.com/rest/api/2/issue/AB-12/comment"
        );
    }

    #[test]
    fn test_comment_body_escaping_is_serializations_job() {
        let body = json!({ "body": "line one\nwith \"quotes\" and \\backslash" });
        assert_eq!(
            body.to_string(),
            r#"{"body":"line one\nwith \"quotes\" and \\backslash"}"#
        );
    }
}
