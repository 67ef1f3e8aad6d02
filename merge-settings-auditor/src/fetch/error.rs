//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching a repository's settings.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),
}

impl FetchError {
    /// Returns the HTTP status of the failure, when the API reported one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::GitHub(e) => github_status(e),
        }
    }
}

/// Extracts the HTTP status from an API error, when one exists.
pub(crate) fn github_status(error: &octocrab::Error) -> Option<u16> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}
