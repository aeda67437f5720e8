//! Subject-line classification
//!
//! Commit subjects follow a bracketed-tag grammar: `[TYPE] description`,
//! where TYPE is one of a closed set of commit kinds. Anything that does
//! not match the grammar classifies as invalid and keeps its raw text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// Regex for the bracketed-tag subject grammar
static SUBJECT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([a-z-]+)\] (.*)$").expect("Invalid regex"));

/// Commit kind declared by the subject tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitKind {
    /// New feature
    Feature,
    /// Bug fix
    Bugfix,
    /// Refactoring without behavior change
    Refactoring,
    /// Internal maintenance work
    Internal,
    /// Release commit
    Release,
    /// Start of the next version's development
    NextVersionStart,
}

impl CommitKind {
    /// Display glyph the tracker renders for this kind
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Feature => "(+)",
            Self::Bugfix => "(x)",
            Self::Refactoring => "(*)",
            Self::Internal => "(i)",
            Self::Release => "(flag)",
            Self::NextVersionStart => "(flagoff)",
        }
    }

    /// Subject tag spelling for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bugfix => "bugfix",
            Self::Refactoring => "refactoring",
            Self::Internal => "internal",
            Self::Release => "release",
            Self::NextVersionStart => "next-version-start",
        }
    }
}

impl FromStr for CommitKind {
    type Err = ();

    // Tags are exact: case-sensitive, no abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feature" => Ok(Self::Feature),
            "bugfix" => Ok(Self::Bugfix),
            "refactoring" => Ok(Self::Refactoring),
            "internal" => Ok(Self::Internal),
            "release" => Ok(Self::Release),
            "next-version-start" => Ok(Self::NextVersionStart),
            _ => Err(()),
        }
    }
}

/// Classification of one commit subject line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Whether the subject matched the grammar
    pub is_valid: bool,
    /// Display glyph, empty for invalid subjects
    pub symbol: String,
    /// Parsed description, or the raw subject when invalid
    pub text: String,
}

/// Classify a commit subject line against the bracketed-tag grammar.
///
/// Total: an unparseable subject yields the invalid classification
/// carrying the subject verbatim.
pub fn classify(subject: &str) -> Subject {
    if let Some(caps) = SUBJECT_REGEX.captures(subject) {
        if let Ok(kind) = caps[1].parse::<CommitKind>() {
            return Subject {
                is_valid: true,
                symbol: kind.symbol().to_string(),
                text: caps[2].to_string(),
            };
        }
    }

    Subject {
        is_valid: false,
        symbol: String::new(),
        text: subject.to_string(),
    }
}
