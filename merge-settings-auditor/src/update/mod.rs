//! Applying computed changes to repositories.
//!
//! One write call per repository, issued sequentially by the runner and
//! only in apply mode. The PATCH body carries the changed fields and
//! nothing else.

mod error;
mod status;

pub use error::UpdateError;
pub use status::UpdateStatus;

use crate::diff::{ChangeSet, FieldChange};
use crate::discovery::RepositoryHandle;
use crate::settings::{MergeMessage, MergeTitle, SquashMessage, SquashTitle};
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{info, info_span, Instrument};

/// PATCH body for a repository settings update.
#[derive(Debug, Default, Serialize)]
struct UpdateRepoBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    squash_merge_commit_title: Option<SquashTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    squash_merge_commit_message: Option<SquashMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merge_commit_title: Option<MergeTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merge_commit_message: Option<MergeMessage>,
}

impl UpdateRepoBody {
    fn from_changes(changes: &ChangeSet) -> Self {
        let mut body = Self::default();
        for change in &changes.changes {
            match *change {
                FieldChange::SquashTitle { desired, .. } => {
                    body.squash_merge_commit_title = Some(desired)
                }
                FieldChange::SquashMessage { desired, .. } => {
                    body.squash_merge_commit_message = Some(desired)
                }
                FieldChange::MergeTitle { desired, .. } => {
                    body.merge_commit_title = Some(desired)
                }
                FieldChange::MergeMessage { desired, .. } => {
                    body.merge_commit_message = Some(desired)
                }
            }
        }
        body
    }
}

/// Applies a non-empty change set to a repository.
///
/// # Errors
///
/// Returns [`UpdateError`] on API failure. The caller records the failure
/// and continues; a 404 here may equally mean the token lacks write scope,
/// and is surfaced as-is.
pub async fn apply_changes(
    octocrab: &Octocrab,
    repo: &RepositoryHandle,
    changes: &ChangeSet,
) -> Result<(), UpdateError> {
    let span = info_span!("apply_changes", repo = %repo.full_name, fields = changes.len());

    async {
        info!("Updating merge settings");
        let body = UpdateRepoBody::from_changes(changes);
        let _: serde_json::Value = octocrab
            .patch(
                format!("/repos/{}/{}", repo.owner, repo.name),
                Some(&body),
            )
            .await?;
        Ok(())
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_contains_only_changed_fields() {
        let changes = ChangeSet {
            changes: vec![
                FieldChange::SquashTitle {
                    current: Some(SquashTitle::CommitOrPrTitle),
                    desired: SquashTitle::PrTitle,
                },
                FieldChange::SquashMessage {
                    current: None,
                    desired: SquashMessage::PrBody,
                },
            ],
        };

        let body = UpdateRepoBody::from_changes(&changes);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "squash_merge_commit_title": "PR_TITLE",
                "squash_merge_commit_message": "PR_BODY",
            })
        );
    }

    #[test]
    fn empty_changes_serialize_to_empty_body() {
        let body = UpdateRepoBody::from_changes(&ChangeSet::default());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json, serde_json::json!({}));
    }
}
