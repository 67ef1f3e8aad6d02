//! Field-by-field comparison of fetched settings against desired values.
//!
//! Pure logic, no I/O. A field left unset in [`DesiredSettings`] is never
//! flagged, and neither is a field whose merge strategy is disabled on the
//! repository.

use crate::settings::{
    DesiredSettings, MergeMessage, MergeSettings, MergeTitle, SquashMessage, SquashTitle,
};

/// A single field-level difference between current and desired settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    /// Squash merge commit title differs.
    SquashTitle {
        current: Option<SquashTitle>,
        desired: SquashTitle,
    },

    /// Squash merge commit message differs.
    SquashMessage {
        current: Option<SquashMessage>,
        desired: SquashMessage,
    },

    /// Merge commit title differs.
    MergeTitle {
        current: Option<MergeTitle>,
        desired: MergeTitle,
    },

    /// Merge commit message differs.
    MergeMessage {
        current: Option<MergeMessage>,
        desired: MergeMessage,
    },
}

impl FieldChange {
    /// Short field name used in reports.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::SquashTitle { .. } => "squash_title",
            Self::SquashMessage { .. } => "squash_message",
            Self::MergeTitle { .. } => "merge_title",
            Self::MergeMessage { .. } => "merge_message",
        }
    }

    /// Current value as its wire name, when set.
    pub fn current_str(&self) -> Option<&'static str> {
        match self {
            Self::SquashTitle { current, .. } => current.map(SquashTitle::as_str),
            Self::SquashMessage { current, .. } => current.map(SquashMessage::as_str),
            Self::MergeTitle { current, .. } => current.map(MergeTitle::as_str),
            Self::MergeMessage { current, .. } => current.map(MergeMessage::as_str),
        }
    }

    /// Desired value as its wire name.
    pub fn desired_str(&self) -> &'static str {
        match self {
            Self::SquashTitle { desired, .. } => desired.as_str(),
            Self::SquashMessage { desired, .. } => desired.as_str(),
            Self::MergeTitle { desired, .. } => desired.as_str(),
            Self::MergeMessage { desired, .. } => desired.as_str(),
        }
    }
}

/// The differences computed for one repository, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// The field-level changes. Empty means no action needed.
    pub changes: Vec<FieldChange>,
}

impl ChangeSet {
    /// Returns true when no field differs.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of differing fields.
    pub fn len(&self) -> usize {
        self.changes.len()
    }
}

/// Computes the changes needed to bring `current` in line with `desired`.
pub fn diff_settings(current: &MergeSettings, desired: &DesiredSettings) -> ChangeSet {
    let mut changes = Vec::new();

    if current.squash_enabled {
        if let Some(want) = desired.squash_title {
            if current.squash_title != Some(want) {
                changes.push(FieldChange::SquashTitle {
                    current: current.squash_title,
                    desired: want,
                });
            }
        }
        if let Some(want) = desired.squash_message {
            if current.squash_message != Some(want) {
                changes.push(FieldChange::SquashMessage {
                    current: current.squash_message,
                    desired: want,
                });
            }
        }
    }

    if current.merge_enabled {
        if let Some(want) = desired.merge_title {
            if current.merge_title != Some(want) {
                changes.push(FieldChange::MergeTitle {
                    current: current.merge_title,
                    desired: want,
                });
            }
        }
        if let Some(want) = desired.merge_message {
            if current.merge_message != Some(want) {
                changes.push(FieldChange::MergeMessage {
                    current: current.merge_message,
                    desired: want,
                });
            }
        }
    }

    ChangeSet { changes }
}
