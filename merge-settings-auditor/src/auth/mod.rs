//! GitHub token resolution.
//!
//! Resolves an API token from an explicit value, the `GITHUB_TOKEN`
//! environment variable, or the `gh` CLI, in that order.

mod error;

pub use error::AuthError;

use std::fmt;
use std::process::Command;
use tracing::debug;

/// Environment variable consulted when no explicit token is given.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Where a resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Passed explicitly (e.g. via `--token`).
    Flag,

    /// Read from the `GITHUB_TOKEN` environment variable.
    Environment,

    /// Obtained from `gh auth token`.
    GhCli,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flag => "--token flag",
            Self::Environment => "GITHUB_TOKEN environment variable",
            Self::GhCli => "gh CLI",
        };
        f.write_str(name)
    }
}

/// A token together with the source that supplied it.
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    /// The token value.
    pub token: String,

    /// The source that supplied it.
    pub source: TokenSource,
}

/// Resolves a GitHub token.
///
/// Sources are tried in priority order:
///
/// 1. The explicit `token` argument
/// 2. The `GITHUB_TOKEN` environment variable
/// 3. `gh auth token`
///
/// Empty and whitespace-only candidates are treated as absent at every
/// level.
///
/// # Errors
///
/// Returns [`AuthError::NoToken`] when no source yields a token.
pub fn resolve_token(token: Option<String>) -> Result<ResolvedToken, AuthError> {
    if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
        debug!("Using explicitly provided token");
        return Ok(ResolvedToken {
            token,
            source: TokenSource::Flag,
        });
    }

    if let Some(token) = std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|t| !t.trim().is_empty())
    {
        debug!("Using token from {TOKEN_ENV_VAR} environment variable");
        return Ok(ResolvedToken {
            token,
            source: TokenSource::Environment,
        });
    }

    if let Some(token) = token_from_gh_cli() {
        debug!("Using token from gh CLI (gh auth token)");
        return Ok(ResolvedToken {
            token,
            source: TokenSource::GhCli,
        });
    }

    Err(AuthError::NoToken)
}

/// Asks the `gh` CLI for its stored token.
///
/// Returns `None` when `gh` is not installed, not logged in, or prints
/// nothing.
fn token_from_gh_cli() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!token.is_empty()).then_some(token)
}
