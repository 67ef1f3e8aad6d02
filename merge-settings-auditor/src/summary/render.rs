//! Report rendering.
//!
//! Both renderers are deterministic and preserve repository listing order.

use super::result::RepoOutcome;
use super::RunReport;
use crate::diff::FieldChange;
use crate::update::UpdateStatus;
use std::fmt::Write;

/// Renders the summary view: counters, repositories needing updates with
/// their field deltas, and failed repositories.
pub fn render_compact(report: &RunReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(out, "Summary for {}:", report.target);
    let _ = writeln!(
        out,
        "  Mode: {}",
        if report.dry_run { "Dry Run" } else { "Live" }
    );
    let _ = writeln!(
        out,
        "  Total repositories: {}",
        summary.repositories_scanned
    );
    let _ = writeln!(out, "  Squash merge enabled: {}", summary.squash_enabled);
    let _ = writeln!(out, "  Merge commit enabled: {}", summary.merge_enabled);
    let _ = writeln!(out, "  Rebase merge enabled: {}", summary.rebase_enabled);
    let _ = writeln!(out, "  Up to date: {}", summary.up_to_date);
    let _ = writeln!(out, "  Needing update: {}", summary.needs_update);

    if !report.dry_run {
        let _ = writeln!(out, "  Updates applied: {}", summary.updates_applied);
        let _ = writeln!(out, "  Updates failed: {}", summary.updates_failed);
    }
    if summary.fetches_failed > 0 {
        let _ = writeln!(out, "  Fetch failures: {}", summary.fetches_failed);
    }

    let needing: Vec<_> = report.needing_update().collect();
    if !needing.is_empty() {
        let _ = writeln!(out, "\nRepositories needing updates ({}):", needing.len());
        for repo in needing {
            if let RepoOutcome::Audited { changes, update, .. } = &repo.outcome {
                let deltas: Vec<String> =
                    changes.changes.iter().map(render_field_change).collect();
                let mut line = format!("  {}: {}", repo.handle.full_name, deltas.join(", "));
                if let Some(UpdateStatus::Failed { status, error }) = update {
                    match status {
                        Some(code) => {
                            let _ = write!(line, " [update failed (HTTP {code}): {error}]");
                        }
                        None => {
                            let _ = write!(line, " [update failed: {error}]");
                        }
                    }
                }
                let _ = writeln!(out, "{line}");
            }
        }
    }

    let failed: Vec<_> = report.fetch_failures().collect();
    if !failed.is_empty() {
        let _ = writeln!(out, "\nFailed repositories ({}):", failed.len());
        for repo in failed {
            if let RepoOutcome::FetchFailed { status, error } = &repo.outcome {
                match status {
                    Some(code) => {
                        let _ = writeln!(
                            out,
                            "  {}: fetch failed (HTTP {code}): {error}",
                            repo.handle.full_name
                        );
                    }
                    None => {
                        let _ = writeln!(
                            out,
                            "  {}: fetch failed: {error}",
                            repo.handle.full_name
                        );
                    }
                }
            }
        }
    }

    if report.dry_run && summary.needs_update > 0 {
        let _ = writeln!(out, "\nRun with --apply to make changes");
    }

    out
}

/// Renders the verbose view: one table row per repository with all fetched
/// settings.
pub fn render_verbose(report: &RunReport) -> String {
    let mut out = String::new();

    let name_width = report
        .repos
        .iter()
        .map(|r| r.handle.full_name.len())
        .chain(std::iter::once("Repository".len()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{:<name_width$}  {:<6}  {:<18}  {:<15}  {:<6}  {:<13}  {:<9}  Rebase",
        "Repository", "Squash", "Squash Title", "Squash Msg", "Merge", "Merge Title", "Merge Msg",
    );

    for repo in &report.repos {
        match &repo.outcome {
            RepoOutcome::Audited { settings, .. } => {
                let _ = writeln!(
                    out,
                    "{:<name_width$}  {:<6}  {:<18}  {:<15}  {:<6}  {:<13}  {:<9}  {}",
                    repo.handle.full_name,
                    enabled(settings.squash_enabled),
                    settings.squash_title.map_or("-", |v| v.as_str()),
                    settings.squash_message.map_or("-", |v| v.as_str()),
                    enabled(settings.merge_enabled),
                    settings.merge_title.map_or("-", |v| v.as_str()),
                    settings.merge_message.map_or("-", |v| v.as_str()),
                    enabled(settings.rebase_enabled),
                );
            }
            RepoOutcome::FetchFailed { status, error } => {
                let detail = match status {
                    Some(code) => format!("fetch failed (HTTP {code}): {error}"),
                    None => format!("fetch failed: {error}"),
                };
                let _ = writeln!(
                    out,
                    "{:<name_width$}  {detail}",
                    repo.handle.full_name
                );
            }
        }
    }

    out
}

fn render_field_change(change: &FieldChange) -> String {
    format!(
        "{}: {} -> {}",
        change.field_name(),
        change.current_str().unwrap_or("(unset)"),
        change.desired_str()
    )
}

fn enabled(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "-"
    }
}
