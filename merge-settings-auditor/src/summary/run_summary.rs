//! Run summary types.

use super::result::{RepoOutcome, RepoReport};
use crate::update::UpdateStatus;

/// Aggregated counters for a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories scanned (including failed fetches).
    pub repositories_scanned: usize,

    /// Number of repositories whose settings could not be fetched.
    pub fetches_failed: usize,

    /// Number of repositories with squash merging enabled.
    pub squash_enabled: usize,

    /// Number of repositories with merge commits enabled.
    pub merge_enabled: usize,

    /// Number of repositories with rebase merging enabled.
    pub rebase_enabled: usize,

    /// Number of repositories already matching the desired settings.
    pub up_to_date: usize,

    /// Number of repositories deviating from the desired settings.
    pub needs_update: usize,

    /// Number of updates applied successfully.
    pub updates_applied: usize,

    /// Number of updates that failed.
    pub updates_failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the counters with one repository's result.
    pub fn record_repo(&mut self, report: &RepoReport) {
        self.repositories_scanned += 1;

        match &report.outcome {
            RepoOutcome::FetchFailed { .. } => self.fetches_failed += 1,
            RepoOutcome::Audited {
                settings,
                changes,
                update,
            } => {
                if settings.squash_enabled {
                    self.squash_enabled += 1;
                }
                if settings.merge_enabled {
                    self.merge_enabled += 1;
                }
                if settings.rebase_enabled {
                    self.rebase_enabled += 1;
                }

                if changes.is_empty() {
                    self.up_to_date += 1;
                } else {
                    self.needs_update += 1;
                }

                match update {
                    Some(UpdateStatus::Applied) => self.updates_applied += 1,
                    Some(UpdateStatus::Failed { .. }) => self.updates_failed += 1,
                    None => {}
                }
            }
        }
    }

    /// Returns true if any per-repository operation failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fetches_failed > 0 || self.updates_failed > 0
    }

    /// Returns true if every repository was fetched and updated cleanly.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.fetches_failed == 0 && self.updates_failed == 0
    }
}
