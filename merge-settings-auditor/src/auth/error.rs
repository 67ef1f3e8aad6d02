//! Token resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving a token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No source yielded a non-empty token.
    #[error(
        "no GitHub token found; set the GITHUB_TOKEN environment variable, \
         log in with `gh auth login`, or pass --token"
    )]
    NoToken,
}
