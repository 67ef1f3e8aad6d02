//! Update error types.

use crate::fetch::github_status;
use thiserror::Error;

/// Errors that can occur while updating a repository's settings.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),
}

impl UpdateError {
    /// Returns the HTTP status of the failure, when the API reported one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::GitHub(e) => github_status(e),
        }
    }
}
