//! Orchestrates audit and update runs.

use crate::diff::diff_settings;
use crate::discovery::{resolve_target, DiscoveryError, RepoFilter};
use crate::fetch::fetch_merge_settings;
use crate::settings::DesiredSettings;
use crate::summary::{RepoOutcome, RepoReport, RunReport, RunSummary};
use crate::update::{apply_changes, UpdateStatus};
use octocrab::Octocrab;
use tracing::{info, warn};
use url::Url;

/// Configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Organization, user, or "owner/repo" to operate on.
    target: String,
    /// GitHub token used for API calls.
    token: String,
    /// Desired settings to diff (and optionally update) against.
    desired: DesiredSettings,
    /// Whether to apply updates; false means dry run.
    apply: bool,
    /// Whether to keep archived repositories in enumerated listings.
    include_archived: bool,
    /// Whether to keep forked repositories in enumerated listings.
    include_forks: bool,
    /// Custom API base URL (GitHub Enterprise).
    base_uri: Option<String>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        target: impl Into<String>,
        token: impl Into<String>,
        desired: DesiredSettings,
        apply: bool,
    ) -> Self {
        Self {
            target: target.into(),
            token: token.into(),
            desired,
            apply,
            include_archived: false,
            include_forks: false,
            base_uri: None,
        }
    }

    /// Keeps archived repositories in enumerated listings.
    pub fn with_include_archived(mut self, include_archived: bool) -> Self {
        self.include_archived = include_archived;
        self
    }

    /// Keeps forked repositories in enumerated listings.
    pub fn with_include_forks(mut self, include_forks: bool) -> Self {
        self.include_forks = include_forks;
        self
    }

    /// Sets a custom API base URL (GitHub Enterprise instances).
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Returns the target of the run.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the desired settings.
    pub fn desired(&self) -> &DesiredSettings {
        &self.desired
    }

    /// Returns whether updates will be applied.
    pub fn apply(&self) -> bool {
        self.apply
    }

    /// Returns whether archived repositories are kept.
    pub fn include_archived(&self) -> bool {
        self.include_archived
    }

    /// Returns whether forked repositories are kept.
    pub fn include_forks(&self) -> bool {
        self.include_forks
    }
}

/// Errors that abort a run before or during target resolution.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Target resolution errors, including target-not-found.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// The configured API base URL is not a valid URL.
    #[error("invalid GitHub API base URL: {0}")]
    InvalidBaseUri(#[from] url::ParseError),
}

/// Drives one audit/update run over a resolved repository list.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let mut builder = Octocrab::builder();
        if let Some(base_uri) = &config.base_uri {
            let parsed = Url::parse(base_uri)?;
            builder = builder.base_uri(parsed.as_str())?;
        }
        let octocrab = builder.personal_token(config.token.clone()).build()?;

        Ok(Self { config, octocrab })
    }

    /// Executes the full pipeline: resolve, fetch, diff, optionally update.
    ///
    /// Each repository is processed sequentially and independently; fetch
    /// and update failures are recorded in the report and never abort the
    /// run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] only for fatal conditions: the target cannot
    /// be resolved at all, or the API client fails outright while listing.
    pub async fn run(&self) -> Result<RunReport, RunnerError> {
        let filter = RepoFilter {
            include_archived: self.config.include_archived,
            include_forks: self.config.include_forks,
        };

        info!(target = %self.config.target, "Resolving target");
        let handles = resolve_target(&self.octocrab, &self.config.target, filter).await?;

        info!(count = handles.len(), dry_run = !self.config.apply, "Auditing repositories");
        let mut repos = Vec::with_capacity(handles.len());

        for handle in handles {
            let settings = match fetch_merge_settings(&self.octocrab, &handle).await {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(repo = %handle.full_name, error = %e, "Failed to fetch merge settings");
                    repos.push(RepoReport {
                        handle,
                        outcome: RepoOutcome::FetchFailed {
                            status: e.status(),
                            error: e.to_string(),
                        },
                    });
                    continue;
                }
            };

            let changes = diff_settings(&settings, &self.config.desired);

            let update = if self.config.apply && !changes.is_empty() {
                match apply_changes(&self.octocrab, &handle, &changes).await {
                    Ok(()) => {
                        info!(repo = %handle.full_name, "Merge settings updated");
                        Some(UpdateStatus::Applied)
                    }
                    Err(e) => {
                        warn!(repo = %handle.full_name, error = %e, "Failed to update merge settings");
                        Some(UpdateStatus::Failed {
                            status: e.status(),
                            error: e.to_string(),
                        })
                    }
                }
            } else {
                None
            };

            repos.push(RepoReport {
                handle,
                outcome: RepoOutcome::Audited {
                    settings,
                    changes,
                    update,
                },
            });
        }

        let mut summary = RunSummary::new(!self.config.apply);
        for repo in &repos {
            summary.record_repo(repo);
        }

        Ok(RunReport {
            target: self.config.target.clone(),
            dry_run: !self.config.apply,
            repos,
            summary,
        })
    }
}
