//! Enumerated merge commit message sources.
//!
//! Value sets are fixed by GitHub; user-supplied strings are validated here
//! via [`FromStr`] so invalid values fail before any API call is made.

use super::error::ParseSettingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source of the commit title for squash merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SquashTitle {
    /// The pull request title.
    PrTitle,

    /// The commit title for single-commit PRs, the PR title otherwise.
    CommitOrPrTitle,
}

impl SquashTitle {
    /// Returns the GitHub wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrTitle => "PR_TITLE",
            Self::CommitOrPrTitle => "COMMIT_OR_PR_TITLE",
        }
    }
}

impl fmt::Display for SquashTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SquashTitle {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PR_TITLE" => Ok(Self::PrTitle),
            "COMMIT_OR_PR_TITLE" => Ok(Self::CommitOrPrTitle),
            _ => Err(ParseSettingError::new(
                "squash title",
                s,
                &["PR_TITLE", "COMMIT_OR_PR_TITLE"],
            )),
        }
    }
}

/// Source of the commit message for squash merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SquashMessage {
    /// The pull request body.
    PrBody,

    /// The branch's commit messages.
    CommitMessages,

    /// An empty message.
    Blank,
}

impl SquashMessage {
    /// Returns the GitHub wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrBody => "PR_BODY",
            Self::CommitMessages => "COMMIT_MESSAGES",
            Self::Blank => "BLANK",
        }
    }
}

impl fmt::Display for SquashMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SquashMessage {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PR_BODY" => Ok(Self::PrBody),
            "COMMIT_MESSAGES" => Ok(Self::CommitMessages),
            "BLANK" => Ok(Self::Blank),
            _ => Err(ParseSettingError::new(
                "squash message",
                s,
                &["PR_BODY", "COMMIT_MESSAGES", "BLANK"],
            )),
        }
    }
}

/// Source of the commit title for merge commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeTitle {
    /// The pull request title.
    PrTitle,

    /// GitHub's classic "Merge pull request #N" title.
    MergeMessage,
}

impl MergeTitle {
    /// Returns the GitHub wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrTitle => "PR_TITLE",
            Self::MergeMessage => "MERGE_MESSAGE",
        }
    }
}

impl fmt::Display for MergeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeTitle {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PR_TITLE" => Ok(Self::PrTitle),
            "MERGE_MESSAGE" => Ok(Self::MergeMessage),
            _ => Err(ParseSettingError::new(
                "merge title",
                s,
                &["PR_TITLE", "MERGE_MESSAGE"],
            )),
        }
    }
}

/// Source of the commit message for merge commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeMessage {
    /// The pull request title.
    PrTitle,

    /// The pull request body.
    PrBody,

    /// An empty message.
    Blank,
}

impl MergeMessage {
    /// Returns the GitHub wire name of this value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrTitle => "PR_TITLE",
            Self::PrBody => "PR_BODY",
            Self::Blank => "BLANK",
        }
    }
}

impl fmt::Display for MergeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeMessage {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PR_TITLE" => Ok(Self::PrTitle),
            "PR_BODY" => Ok(Self::PrBody),
            "BLANK" => Ok(Self::Blank),
            _ => Err(ParseSettingError::new(
                "merge message",
                s,
                &["PR_TITLE", "PR_BODY", "BLANK"],
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_wire_names() {
        assert_eq!("PR_TITLE".parse(), Ok(SquashTitle::PrTitle));
        assert_eq!(
            "COMMIT_OR_PR_TITLE".parse(),
            Ok(SquashTitle::CommitOrPrTitle)
        );
        assert_eq!("COMMIT_MESSAGES".parse(), Ok(SquashMessage::CommitMessages));
        assert_eq!("MERGE_MESSAGE".parse(), Ok(MergeTitle::MergeMessage));
        assert_eq!("BLANK".parse(), Ok(MergeMessage::Blank));
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "pr_title".parse::<SquashTitle>().unwrap_err();
        assert!(err.to_string().contains("squash title"));
        assert!(err.to_string().contains("PR_TITLE"));

        assert!("".parse::<MergeMessage>().is_err());
        assert!("COMMIT_MESSAGES".parse::<MergeTitle>().is_err());
    }

    #[test]
    fn serde_names_match_wire_names() {
        let json = serde_json::to_string(&SquashTitle::CommitOrPrTitle).unwrap();
        assert_eq!(json, "\"COMMIT_OR_PR_TITLE\"");

        let parsed: SquashMessage = serde_json::from_str("\"PR_BODY\"").unwrap();
        assert_eq!(parsed, SquashMessage::PrBody);
        assert_eq!(parsed.as_str(), "PR_BODY");
    }
}
