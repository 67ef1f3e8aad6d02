//! Per-repository result types.

use crate::diff::ChangeSet;
use crate::discovery::RepositoryHandle;
use crate::settings::MergeSettings;
use crate::update::UpdateStatus;

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub struct RepoReport {
    /// The repository this result belongs to.
    pub handle: RepositoryHandle,

    /// What happened to it.
    pub outcome: RepoOutcome,
}

/// Outcome of processing a single repository.
#[derive(Debug, Clone)]
pub enum RepoOutcome {
    /// Settings were fetched and diffed.
    Audited {
        /// The fetched settings.
        settings: MergeSettings,
        /// Differences against the desired settings.
        changes: ChangeSet,
        /// Update outcome; `None` outside apply mode or when nothing
        /// needed updating.
        update: Option<UpdateStatus>,
    },

    /// The settings fetch failed.
    FetchFailed {
        /// HTTP status, when the API reported one.
        status: Option<u16>,
        /// Error message.
        error: String,
    },
}
