//! Per-repository merge settings fetch.
//!
//! One read call per repository, issued sequentially by the runner. A
//! failure here is recorded against the repository and never aborts the
//! run.

mod error;

pub use error::FetchError;
pub(crate) use error::github_status;

use crate::discovery::RepositoryHandle;
use crate::settings::{MergeMessage, MergeSettings, MergeTitle, SquashMessage, SquashTitle};
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, info_span, Instrument};

/// Detailed repository payload, reduced to the merge-settings fields.
#[derive(Debug, Deserialize)]
struct RepoDetail {
    #[serde(default)]
    allow_squash_merge: Option<bool>,
    #[serde(default)]
    allow_merge_commit: Option<bool>,
    #[serde(default)]
    allow_rebase_merge: Option<bool>,
    #[serde(default)]
    squash_merge_commit_title: Option<SquashTitle>,
    #[serde(default)]
    squash_merge_commit_message: Option<SquashMessage>,
    #[serde(default)]
    merge_commit_title: Option<MergeTitle>,
    #[serde(default)]
    merge_commit_message: Option<MergeMessage>,
}

impl From<RepoDetail> for MergeSettings {
    fn from(detail: RepoDetail) -> Self {
        Self {
            squash_enabled: detail.allow_squash_merge.unwrap_or(false),
            merge_enabled: detail.allow_merge_commit.unwrap_or(false),
            rebase_enabled: detail.allow_rebase_merge.unwrap_or(false),
            squash_title: detail.squash_merge_commit_title,
            squash_message: detail.squash_merge_commit_message,
            merge_title: detail.merge_commit_title,
            merge_message: detail.merge_commit_message,
        }
    }
}

/// Fetches the merge settings of a single repository.
///
/// # Errors
///
/// Returns [`FetchError`] on API failure (403/404/network). The caller is
/// expected to record the failure and continue with the next repository;
/// GitHub may report 404 for insufficient scope, so no attempt is made to
/// distinguish the two.
pub async fn fetch_merge_settings(
    octocrab: &Octocrab,
    repo: &RepositoryHandle,
) -> Result<MergeSettings, FetchError> {
    let span = info_span!("fetch_settings", repo = %repo.full_name);

    async {
        debug!("Fetching merge settings");
        let detail: RepoDetail = octocrab
            .get(format!("/repos/{}/{}", repo.owner, repo.name), None::<&()>)
            .await?;
        Ok(detail.into())
    }
    .instrument(span)
    .await
}
