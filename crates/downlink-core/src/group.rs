//! Per-issue commit grouping

use std::collections::HashMap;

use downlink_git::CommitRecord;
use tracing::debug;

use crate::issues::IssueMatcher;

/// Insertion-ordered map from issue key to the commits referencing it.
///
/// Iteration yields issues in the order they were first encountered while
/// scanning commits; within one issue, commits keep their append order.
#[derive(Debug, Default)]
pub struct IssueGroups {
    entries: Vec<(String, Vec<CommitRecord>)>,
    index: HashMap<String, usize>,
}

impl IssueGroups {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit to an issue's list, creating the list on first use
    pub fn push(&mut self, issue: impl Into<String>, commit: CommitRecord) {
        let issue = issue.into();
        match self.index.get(&issue) {
            Some(&pos) => self.entries[pos].1.push(commit),
            None => {
                self.index.insert(issue.clone(), self.entries.len());
                self.entries.push((issue, vec![commit]));
            }
        }
    }

    /// Get the commits for one issue
    pub fn get(&self, issue: &str) -> Option<&[CommitRecord]> {
        self.index
            .get(issue)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Iterate issues in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CommitRecord])> {
        self.entries
            .iter()
            .map(|(issue, commits)| (issue.as_str(), commits.as_slice()))
    }

    /// Number of distinct issues
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no issue was referenced at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Group commits by the issues they reference.
///
/// Each commit's subject and body are scanned together; a commit that
/// mentions several issues lands in every one of their lists (fan-out).
/// Commits without issue references are dropped.
pub fn group_by_issue(commits: &[CommitRecord], matcher: &IssueMatcher) -> IssueGroups {
    let mut groups = IssueGroups::new();

    for commit in commits {
        // Sort the extracted set so first-seen issue ordering is stable
        let mut issues: Vec<String> = matcher.extract(&commit.message()).into_iter().collect();
        issues.sort();

        for issue in issues {
            groups.push(issue, commit.clone());
        }
    }

    debug!(
        commits = commits.len(),
        issues = groups.len(),
        "grouped commits by issue"
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(id: &str, subject: &str, body: &str) -> CommitRecord {
        CommitRecord::new(id, "Author", subject, body)
    }

    #[test]
    fn test_group_by_subject_and_body() {
        let commits = vec![
            commit("a1", "[bugfix] Fix AB-12 crash", ""),
            commit("a2", "[feature] New exporter", "Closes AB-34"),
        ];
        let groups = group_by_issue(&commits, &IssueMatcher::tracker_sync());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("AB-12").unwrap().len(), 1);
        assert_eq!(groups.get("AB-34").unwrap()[0].id, "a2");
    }

    #[test]
    fn test_group_fan_out() {
        let commits = vec![commit("a1", "[bugfix] Fix login", "Affects AB-1 and CD-2")];
        let groups = group_by_issue(&commits, &IssueMatcher::tracker_sync());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get("AB-1").unwrap()[0].id, "a1");
        assert_eq!(groups.get("CD-2").unwrap()[0].id, "a1");
    }

    #[test]
    fn test_group_preserves_first_seen_order() {
        let commits = vec![
            commit("a1", "Touches ZZ-9", ""),
            commit("a2", "Touches AB-1", ""),
            commit("a3", "Touches ZZ-9 again", ""),
        ];
        let groups = group_by_issue(&commits, &IssueMatcher::tracker_sync());

        let issues: Vec<&str> = groups.iter().map(|(issue, _)| issue).collect();
        assert_eq!(issues, vec!["ZZ-9", "AB-1"]);

        let zz = groups.get("ZZ-9").unwrap();
        assert_eq!(zz[0].id, "a1");
        assert_eq!(zz[1].id, "a3");
    }

    #[test]
    fn test_group_without_references_is_empty() {
        let commits = vec![
            commit("a1", "[internal] Bump toolchain", ""),
            commit("a2", "Plain message", "no keys here"),
        ];
        let groups = group_by_issue(&commits, &IssueMatcher::tracker_sync());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_respects_blacklist() {
        let commits = vec![commit("a1", "[bugfix] Fix RS-232 handling for AB-7", "")];
        let groups = group_by_issue(&commits, &IssueMatcher::tracker_sync());

        assert_eq!(groups.len(), 1);
        assert!(groups.get("RS-232").is_none());
        assert!(groups.get("AB-7").is_some());
    }

    #[test]
    fn test_group_duplicate_key_in_one_commit_appends_once() {
        let commits = vec![commit("a1", "AB-3 fix", "More about AB-3 and ab-3")];
        let groups = group_by_issue(&commits, &IssueMatcher::tracker_sync());
        assert_eq!(groups.get("AB-3").unwrap().len(), 1);
    }
}
