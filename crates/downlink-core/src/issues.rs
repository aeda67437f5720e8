//! Issue key extraction
//!
//! Scans free-form text for issue-tracker keys of the form "AB-123"
//! (2-4 letters, hyphen, digits) and normalizes them for comparison.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Regex for candidate issue keys
static ISSUE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z]{2,4}-\d+\b").expect("Invalid regex"));

/// Blacklist for general-purpose text scanning (branch names, titles).
///
/// Technical standard names share the key shape and must not be treated
/// as issue references.
pub const GENERAL_BLACKLIST: &[&str] = &["RS-232", "UTF-8", "UTF-16"];

/// Blacklist used when correlating pushed commits with the tracker.
pub const TRACKER_SYNC_BLACKLIST: &[&str] = &["RS-232"];

/// Issue key matcher with a per-call-site blacklist
pub struct IssueMatcher {
    blacklist: &'static [&'static str],
}

impl IssueMatcher {
    /// Create a matcher using the general-purpose blacklist
    pub fn general() -> Self {
        Self {
            blacklist: GENERAL_BLACKLIST,
        }
    }

    /// Create a matcher using the tracker-sync blacklist
    pub fn tracker_sync() -> Self {
        Self {
            blacklist: TRACKER_SYNC_BLACKLIST,
        }
    }

    /// Extract the distinct issue keys referenced in `text`.
    ///
    /// Keys are upper-cased before comparison, so case-only duplicates
    /// collapse to one entry. Blacklisted keys are discarded. The result
    /// carries no ordering guarantee.
    pub fn extract(&self, text: &str) -> HashSet<String> {
        ISSUE_KEY_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_uppercase())
            .filter(|key| !self.blacklist.contains(&key.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(matcher: &IssueMatcher, text: &str) -> Vec<String> {
        let mut keys: Vec<String> = matcher.extract(text).into_iter().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_extract_single_key() {
        let matcher = IssueMatcher::general();
        assert_eq!(keys(&matcher, "Fix AB-123 crash"), vec!["AB-123"]);
    }

    #[test]
    fn test_extract_normalizes_case() {
        let matcher = IssueMatcher::general();
        assert_eq!(keys(&matcher, "ab-123 and AB-123 and Ab-123"), vec!["AB-123"]);
    }

    #[test]
    fn test_extract_key_shape() {
        let matcher = IssueMatcher::general();
        // 2-4 letters is in shape, 1 or 5 is not
        assert_eq!(
            keys(&matcher, "A-1 AB-1 ABCD-1 ABCDE-1"),
            vec!["AB-1", "ABCD-1"]
        );
        // Word boundaries are required
        assert!(matcher.extract("xAB-123 AB-123x").is_empty());
    }

    #[test]
    fn test_general_blacklist_filters_standards() {
        let matcher = IssueMatcher::general();
        assert_eq!(
            keys(&matcher, "Fixed RS-232 driver and AB-12 bug"),
            vec!["AB-12"]
        );
        assert_eq!(keys(&matcher, "Use UTF-8 and AB-12"), vec!["AB-12"]);
        assert!(matcher.extract("Decode UTF-16 input").is_empty());
    }

    #[test]
    fn test_tracker_blacklist_is_narrower() {
        let matcher = IssueMatcher::tracker_sync();
        assert_eq!(
            keys(&matcher, "Fixed RS-232 driver and AB-12 bug"),
            vec!["AB-12"]
        );
        // UTF-8 passes through the tracker-sync blacklist
        assert_eq!(keys(&matcher, "Use UTF-8 and AB-12"), vec!["AB-12", "UTF-8"]);
    }

    #[test]
    fn test_extract_empty_text() {
        let matcher = IssueMatcher::general();
        assert!(matcher.extract("").is_empty());
        assert!(matcher.extract("no references here").is_empty());
    }
}
