//! Target resolution and repository enumeration.
//!
//! A target string is either `owner/repo` (single repository, fetched
//! directly) or a bare name probed as an organization first and a user
//! second. Enumerated listings preserve API order and honor the
//! archived/fork filters; explicit single-repo targets bypass both.

mod error;

pub use error::DiscoveryError;

use crate::fetch::github_status;
use octocrab::{Octocrab, Page};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, Instrument};

/// Results per page for repository listings.
const REPOS_PER_PAGE: u8 = 100;

/// A repository selected for auditing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Whether the repository is archived.
    pub archived: bool,

    /// Whether the repository is a fork.
    pub fork: bool,
}

/// Filters applied to enumerated repository listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepoFilter {
    /// Keep archived repositories.
    pub include_archived: bool,

    /// Keep forked repositories.
    pub include_forks: bool,
}

/// Listing payload for a repository.
#[derive(Debug, Deserialize)]
struct RepoSummary {
    name: String,
    full_name: String,
    owner: RepoOwner,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    fork: bool,
}

#[derive(Debug, Deserialize)]
struct RepoOwner {
    login: String,
}

impl From<RepoSummary> for RepositoryHandle {
    fn from(repo: RepoSummary) -> Self {
        Self {
            owner: repo.owner.login,
            name: repo.name,
            full_name: repo.full_name,
            archived: repo.archived,
            fork: repo.fork,
        }
    }
}

#[derive(Serialize)]
struct ListParams {
    per_page: u8,
}

/// Resolves a target into an ordered list of repositories.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `target` - Organization or user name, or "owner/repo"
/// * `filter` - Archived/fork filters for enumerated listings
///
/// # Errors
///
/// Returns [`DiscoveryError::TargetNotFound`] when the target matches no
/// repository, organization, or user, and [`DiscoveryError::GitHub`] for
/// other API failures. Both are fatal; per-repository errors only occur
/// later, when settings are fetched.
pub async fn resolve_target(
    octocrab: &Octocrab,
    target: &str,
    filter: RepoFilter,
) -> Result<Vec<RepositoryHandle>, DiscoveryError> {
    let span = info_span!("resolve_target", target = %target);

    async {
        if let Some((owner, name)) = target.split_once('/') {
            if owner.is_empty() || name.is_empty() {
                return Err(DiscoveryError::TargetNotFound {
                    target: target.to_string(),
                });
            }

            info!("Fetching single repository");
            let repo = match octocrab
                .get::<RepoSummary, _, _>(format!("/repos/{owner}/{name}"), None::<&()>)
                .await
            {
                Ok(repo) => repo,
                Err(e) if github_status(&e) == Some(404) => {
                    return Err(DiscoveryError::TargetNotFound {
                        target: target.to_string(),
                    })
                }
                Err(e) => return Err(e.into()),
            };

            return Ok(vec![repo.into()]);
        }

        // Try the target as an organization first, then as a user.
        let listed = match list_owner_repos(octocrab, format!("/orgs/{target}/repos")).await {
            Ok(repos) => {
                info!(count = repos.len(), "Listed organization repositories");
                repos
            }
            Err(e) if github_status(&e) == Some(404) => {
                debug!("Not an organization, trying as user");
                match list_owner_repos(octocrab, format!("/users/{target}/repos")).await {
                    Ok(repos) => {
                        info!(count = repos.len(), "Listed user repositories");
                        repos
                    }
                    Err(e) if github_status(&e) == Some(404) => {
                        return Err(DiscoveryError::TargetNotFound {
                            target: target.to_string(),
                        })
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Err(e) => return Err(e.into()),
        };

        let handles = listed.into_iter().map(RepositoryHandle::from).collect();
        Ok(apply_filters(handles, filter))
    }
    .instrument(span)
    .await
}

/// Lists all repositories under an owner route, following pagination.
async fn list_owner_repos(
    octocrab: &Octocrab,
    route: String,
) -> Result<Vec<RepoSummary>, octocrab::Error> {
    let mut page: Page<RepoSummary> = octocrab
        .get(
            &route,
            Some(&ListParams {
                per_page: REPOS_PER_PAGE,
            }),
        )
        .await?;

    let mut repos = std::mem::take(&mut page.items);

    while let Some(mut next) = octocrab.get_page::<RepoSummary>(&page.next).await? {
        repos.append(&mut next.items);
        page.next = next.next;
    }

    Ok(repos)
}

/// Applies archived/fork filters, preserving listing order.
pub fn apply_filters(repos: Vec<RepositoryHandle>, filter: RepoFilter) -> Vec<RepositoryHandle> {
    let mut skipped_archived = 0usize;
    let mut skipped_forks = 0usize;

    let filtered: Vec<RepositoryHandle> = repos
        .into_iter()
        .filter(|repo| {
            if !filter.include_archived && repo.archived {
                skipped_archived += 1;
                return false;
            }
            if !filter.include_forks && repo.fork {
                skipped_forks += 1;
                return false;
            }
            true
        })
        .collect();

    if skipped_archived > 0 {
        info!(count = skipped_archived, "Skipped archived repositories");
    }
    if skipped_forks > 0 {
        info!(count = skipped_forks, "Skipped forked repositories");
    }

    filtered
}
