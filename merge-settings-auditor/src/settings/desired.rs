//! Desired-settings overrides.

use super::values::{MergeMessage, MergeTitle, SquashMessage, SquashTitle};

/// A partial override of merge settings.
///
/// Unset fields mean "leave unchanged" and are never flagged when diffing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesiredSettings {
    /// Desired squash merge commit title source.
    pub squash_title: Option<SquashTitle>,

    /// Desired squash merge commit message source.
    pub squash_message: Option<SquashMessage>,

    /// Desired merge commit title source.
    pub merge_title: Option<MergeTitle>,

    /// Desired merge commit message source.
    pub merge_message: Option<MergeMessage>,
}

impl DesiredSettings {
    /// Preset for squash merges using the PR title and body.
    pub fn fix_squash() -> Self {
        Self {
            squash_title: Some(SquashTitle::PrTitle),
            squash_message: Some(SquashMessage::PrBody),
            ..Self::default()
        }
    }

    /// The baseline the `list` summary counts against: squash merges use the
    /// PR title and body, merge commits use the PR title for both fields.
    pub fn standard() -> Self {
        Self {
            squash_title: Some(SquashTitle::PrTitle),
            squash_message: Some(SquashMessage::PrBody),
            merge_title: Some(MergeTitle::PrTitle),
            merge_message: Some(MergeMessage::PrTitle),
        }
    }

    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.squash_title.is_none()
            && self.squash_message.is_none()
            && self.merge_title.is_none()
            && self.merge_message.is_none()
    }
}
