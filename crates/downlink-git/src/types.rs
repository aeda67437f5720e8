//! Git types

use serde::{Deserialize, Serialize};

/// One logged commit as consumed by the sync pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Commit hash (full)
    pub id: String,
    /// Short hash (first 7 characters)
    pub short_id: String,
    /// Author display name
    pub author: String,
    /// Subject line (first line of the message)
    pub subject: String,
    /// Message body after the subject, may be empty
    pub body: String,
}

impl CommitRecord {
    /// Create a new CommitRecord
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let short_id = id.chars().take(7).collect();

        Self {
            id,
            short_id,
            author: author.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Full message: subject and body joined by a newline
    pub fn message(&self) -> String {
        format!("{}\n{}", self.subject, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_record() {
        let commit = CommitRecord::new(
            "abc1234567890",
            "Author",
            "[feature] add thing",
            "AB-12 details",
        );
        assert_eq!(commit.short_id, "abc1234");
        assert_eq!(commit.message(), "[feature] add thing\nAB-12 details");
    }

    #[test]
    fn test_message_with_empty_body() {
        let commit = CommitRecord::new("abc1234567890", "Author", "subject", "");
        assert_eq!(commit.message(), "subject\n");
    }
}
