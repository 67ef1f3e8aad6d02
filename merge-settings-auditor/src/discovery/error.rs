//! Discovery error types.

use thiserror::Error;

/// Errors that can occur while resolving a target.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// The target matched no organization, user, or repository.
    #[error(
        "target '{target}' not found: no matching organization, user, or \
         repository (check the spelling and your token's access)"
    )]
    TargetNotFound { target: String },
}
