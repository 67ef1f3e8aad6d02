//! Merge-setting value types.
//!
//! This module holds the closed enumerations GitHub defines for merge commit
//! message sources, the per-repository [`MergeSettings`] snapshot, and the
//! partial [`DesiredSettings`] override used for diffing and updates.

mod desired;
mod error;
mod values;

pub use desired::DesiredSettings;
pub use error::ParseSettingError;
pub use values::{MergeMessage, MergeTitle, SquashMessage, SquashTitle};

/// Merge settings of a single repository at fetch time.
///
/// The four message fields are optional because the API omits them on some
/// repositories (and for strategies that have never been configured).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSettings {
    /// Whether squash merging is allowed.
    pub squash_enabled: bool,

    /// Whether merge commits are allowed.
    pub merge_enabled: bool,

    /// Whether rebase merging is allowed.
    pub rebase_enabled: bool,

    /// Default squash merge commit title source.
    pub squash_title: Option<SquashTitle>,

    /// Default squash merge commit message source.
    pub squash_message: Option<SquashMessage>,

    /// Default merge commit title source.
    pub merge_title: Option<MergeTitle>,

    /// Default merge commit message source.
    pub merge_message: Option<MergeMessage>,
}
