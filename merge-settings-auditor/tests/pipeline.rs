//! End-to-end pipeline tests against a mocked GitHub API.
//!
//! Each test points a real [`Runner`] at a wiremock server, exercising
//! target resolution, sequential fetching, diffing, and the dry-run/apply
//! split without touching the network.

use merge_settings_auditor::{
    DesiredSettings, RepoOutcome, Runner, RunnerConfig, UpdateStatus,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo_summary(owner: &str, name: &str, archived: bool, fork: bool) -> serde_json::Value {
    json!({
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "owner": { "login": owner },
        "archived": archived,
        "fork": fork,
    })
}

fn repo_detail(squash_title: &str, squash_message: &str) -> serde_json::Value {
    json!({
        "allow_squash_merge": true,
        "allow_merge_commit": true,
        "allow_rebase_merge": false,
        "squash_merge_commit_title": squash_title,
        "squash_merge_commit_message": squash_message,
        "merge_commit_title": "PR_TITLE",
        "merge_commit_message": "PR_TITLE",
    })
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest",
    }))
}

fn runner(server: &MockServer, target: &str, desired: DesiredSettings, apply: bool) -> Runner {
    let config = RunnerConfig::new(target, "test-token", desired, apply)
        .with_base_uri(server.uri());
    Runner::new(config).expect("client should build")
}

#[tokio::test]
async fn dry_run_issues_no_writes_and_reports_deviations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_summary("acme", "widgets", false, false),
            repo_summary("acme", "tidy", false, false),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(repo_detail("COMMIT_OR_PR_TITLE", "COMMIT_MESSAGES")),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/tidy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_detail("PR_TITLE", "PR_BODY")))
        .mount(&server)
        .await;

    // Dry run must never write.
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let report = runner(&server, "acme", DesiredSettings::fix_squash(), false)
        .run()
        .await
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.summary.repositories_scanned, 2);
    assert_eq!(report.summary.needs_update, 1);
    assert_eq!(report.summary.up_to_date, 1);
    assert_eq!(report.summary.updates_applied, 0);

    match &report.repos[0].outcome {
        RepoOutcome::Audited { changes, update, .. } => {
            assert_eq!(changes.len(), 2);
            assert!(update.is_none());
        }
        other => panic!("expected audited outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn apply_patches_only_deviating_repos_with_only_changed_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_summary("acme", "widgets", false, false),
            repo_summary("acme", "tidy", false, false),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widgets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(repo_detail("COMMIT_OR_PR_TITLE", "COMMIT_MESSAGES")),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/tidy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_detail("PR_TITLE", "PR_BODY")))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/repos/acme/widgets"))
        .and(body_partial_json(json!({
            "squash_merge_commit_title": "PR_TITLE",
            "squash_merge_commit_message": "PR_BODY",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/repos/acme/tidy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let report = runner(&server, "acme", DesiredSettings::fix_squash(), true)
        .run()
        .await
        .unwrap();

    assert!(!report.dry_run);
    assert_eq!(report.summary.updates_applied, 1);
    assert_eq!(report.summary.updates_failed, 0);

    match &report.repos[0].outcome {
        RepoOutcome::Audited { update, .. } => {
            assert_eq!(update.as_ref(), Some(&UpdateStatus::Applied));
        }
        other => panic!("expected audited outcome, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_failure_is_recorded_and_run_continues() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_summary("acme", "private", false, false),
            repo_summary("acme", "tidy", false, false),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/private"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/tidy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_detail("PR_TITLE", "PR_BODY")))
        .mount(&server)
        .await;

    let report = runner(&server, "acme", DesiredSettings::fix_squash(), false)
        .run()
        .await
        .unwrap();

    assert_eq!(report.summary.repositories_scanned, 2);
    assert_eq!(report.summary.fetches_failed, 1);
    assert_eq!(report.summary.up_to_date, 1);

    match &report.repos[0].outcome {
        RepoOutcome::FetchFailed { status, .. } => assert_eq!(*status, Some(404)),
        other => panic!("expected fetch failure, got {other:?}"),
    }
}

#[tokio::test]
async fn single_repo_target_bypasses_enumeration() {
    let server = MockServer::start().await;

    // Serves both the resolver probe and the settings fetch.
    Mock::given(method("GET"))
        .and(path("/repos/acme-uk/backbone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "backbone",
            "full_name": "acme-uk/backbone",
            "owner": { "login": "acme-uk" },
            "archived": false,
            "fork": false,
            "allow_squash_merge": true,
            "allow_merge_commit": false,
            "allow_rebase_merge": false,
            "squash_merge_commit_title": "COMMIT_OR_PR_TITLE",
            "squash_merge_commit_message": "COMMIT_MESSAGES",
        })))
        .expect(2)
        .mount(&server)
        .await;

    let report = runner(
        &server,
        "acme-uk/backbone",
        DesiredSettings::fix_squash(),
        false,
    )
    .run()
    .await
    .unwrap();

    assert_eq!(report.repos.len(), 1);
    assert_eq!(report.repos[0].handle.full_name, "acme-uk/backbone");
    assert_eq!(report.summary.needs_update, 1);
}

#[tokio::test]
async fn unknown_target_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/ghost/repos"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/ghost/repos"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let error = runner(&server, "ghost", DesiredSettings::fix_squash(), false)
        .run()
        .await
        .unwrap_err();

    assert!(error.to_string().contains("'ghost' not found"));
}

#[tokio::test]
async fn user_fallback_after_org_miss() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/solo/repos"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/solo/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_summary("solo", "dotfiles", false, false),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/solo/dotfiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_detail("PR_TITLE", "PR_BODY")))
        .mount(&server)
        .await;

    let report = runner(&server, "solo", DesiredSettings::fix_squash(), false)
        .run()
        .await
        .unwrap();

    assert_eq!(report.repos.len(), 1);
    assert_eq!(report.repos[0].handle.full_name, "solo/dotfiles");
}

#[tokio::test]
async fn archived_and_forked_repos_are_filtered_from_listings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_summary("acme", "active", false, false),
            repo_summary("acme", "attic", true, false),
            repo_summary("acme", "mirror", false, true),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_detail("PR_TITLE", "PR_BODY")))
        .mount(&server)
        .await;

    let report = runner(&server, "acme", DesiredSettings::fix_squash(), false)
        .run()
        .await
        .unwrap();

    assert_eq!(report.summary.repositories_scanned, 1);
    assert_eq!(report.repos[0].handle.name, "active");
}
