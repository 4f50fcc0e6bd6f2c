//! Metrics collection against a mocked GitHub API.

use chrono::{DateTime, TimeZone, Utc};
use httpmock::Method::GET;
use httpmock::MockServer;
use kodegen_repo_insight::{GitHubClient, GitHubError, GitHubMetricsCollector};
use serde_json::json;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn collector(server: &MockServer) -> GitHubMetricsCollector {
    let client = GitHubClient::builder()
        .base_uri(server.base_url())
        .build()
        .unwrap();
    GitHubMetricsCollector::new(client)
}

#[tokio::test]
async fn assembles_snapshot_and_degrades_optional_fetches() {
    let server = MockServer::start_async().await;

    let repo = server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/demo");
            then.status(200).json_body(json!({
                "id": 42,
                "name": "demo",
                "owner": {"login": "octo"},
                "description": null,
                "html_url": "https://github.com/octo/demo",
                "created_at": "2024-01-10T00:00:00Z",
                "updated_at": "2025-05-30T00:00:00Z",
                "pushed_at": "2023-12-01T00:00:00Z",
                "language": "Rust",
                "size": 512,
                "default_branch": "main",
                "stargazers_count": 120,
                "forks_count": 7,
                "watchers_count": 120,
                "open_issues_count": 3,
                "has_wiki": true,
                "has_issues": true,
                "has_pages": false,
                "archived": false,
                "disabled": false,
                "private": false,
                "topics": ["cli", "scoring"]
            }));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/demo/languages");
            then.status(200).json_body(json!({"Rust": 9000, "Shell": 120}));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/demo/actions/workflows");
            then.status(200).json_body(json!({
                "total_count": 1,
                "workflows": [{"name": "CI", "path": ".github/workflows/ci.yml", "state": "active"}]
            }));
        })
        .await;

    let tree = server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/demo/git/trees/main");
            then.status(200).json_body(json!({
                "sha": "abc",
                "truncated": false,
                "tree": [
                    {"path": "src", "type": "tree"},
                    {"path": "src/main.rs", "type": "blob"},
                    {"path": "src/cli.test.ts", "type": "blob"},
                    {"path": "Cargo.toml", "type": "blob"},
                    {"path": "README.md", "type": "blob"},
                    {"path": "docs/guide.md", "type": "blob"}
                ]
            }));
        })
        .await;

    let snapshot = collector(&server)
        .get_complete_metrics_at("octo", "demo", now())
        .await
        .unwrap();

    repo.assert_async().await;
    tree.assert_async().await;

    assert_eq!(snapshot.full_name(), "octo/demo");
    assert_eq!(snapshot.id, 42);
    assert_eq!(snapshot.description, "");
    assert_eq!(snapshot.language.as_deref(), Some("Rust"));
    assert_eq!(snapshot.stars, 120);
    assert_eq!(snapshot.topics, vec!["cli", "scoring"]);
    assert_eq!(snapshot.languages.len(), 2);

    assert_eq!(snapshot.file_count, 5);
    assert_eq!(snapshot.directory_count, 1);
    assert_eq!(snapshot.markdown_files(), 2);
    assert_eq!(snapshot.test_files, 1);
    assert_eq!(snapshot.config_files, vec!["Cargo.toml"]);

    assert!(snapshot.has_github_actions);
    assert_eq!(snapshot.workflow_count, 1);

    // Push older than creation is clamped so the snapshot stays valid.
    assert_eq!(snapshot.pushed_at, snapshot.created_at);
    assert!(snapshot.validate().is_ok());

    // Unmocked endpoints degrade to empty values.
    assert_eq!(snapshot.contributors, 0);
    assert_eq!(snapshot.branches, 0);
    assert_eq!(snapshot.prs_merged, 0);
    assert_eq!(snapshot.commit_count, 0);
    assert!(snapshot.latest_commit_date.is_none());
    assert!(!snapshot.has_readme);
    assert_eq!(snapshot.readme_length, 0);
    assert_eq!(snapshot.dependencies_total, 0);
}

#[tokio::test]
async fn missing_repository_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/ghost");
            then.status(404).json_body(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/repos/repos#get-a-repository"
            }));
        })
        .await;

    let err = collector(&server)
        .get_complete_metrics_at("octo", "ghost", now())
        .await
        .unwrap_err();
    assert!(matches!(err, GitHubError::NotFound(ref what) if what == "octo/ghost"));
}

fn commit_json(sha: &str, date: &str, message: &str) -> serde_json::Value {
    json!({
        "url": format!("https://api.github.com/repos/octo/busy/commits/{sha}"),
        "sha": sha,
        "node_id": format!("C_{sha}"),
        "html_url": format!("https://github.com/octo/busy/commit/{sha}"),
        "comments_url": format!("https://api.github.com/repos/octo/busy/commits/{sha}/comments"),
        "commit": {
            "url": format!("https://api.github.com/repos/octo/busy/git/commits/{sha}"),
            "author": {"name": "Octo", "email": "octo@example.com", "date": date},
            "committer": {"name": "Octo", "email": "octo@example.com", "date": date},
            "message": message,
            "tree": {
                "sha": "0000000000000000000000000000000000000000",
                "url": "https://api.github.com/repos/octo/busy/git/trees/0000000000000000000000000000000000000000"
            },
            "comment_count": 0,
            "verification": {
                "verified": false,
                "reason": "unsigned",
                "signature": null,
                "payload": null,
                "verified_at": null
            }
        },
        "author": null,
        "committer": null,
        "parents": []
    })
}

#[tokio::test]
async fn commit_count_comes_from_history_pagination() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/busy");
            then.status(200).json_body(json!({
                "id": 7,
                "name": "busy",
                "owner": {"login": "octo"},
                "html_url": "https://github.com/octo/busy",
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2025-05-31T00:00:00Z",
                "pushed_at": "2025-05-31T00:00:00Z",
                "default_branch": ""
            }));
        })
        .await;

    let last = server.url("/repositories/7/commits?per_page=1&page=1234");
    let next = server.url("/repositories/7/commits?per_page=1&page=2");
    let history = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/repos/octo/busy/commits")
                .query_param("per_page", "1");
            then.status(200)
                .header("Link", format!("<{next}>; rel=\"next\", <{last}>; rel=\"last\""))
                .json_body(json!([commit_json("a1", "2025-05-30T10:00:00Z", "Ship it")]));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/repos/octo/busy/commits")
                .query_param("per_page", "100");
            then.status(200).json_body(json!([
                commit_json("a1", "2025-05-30T10:00:00Z", "Ship it"),
                commit_json("b2", "2025-05-12T10:00:00Z", "Tidy up")
            ]));
        })
        .await;

    let snapshot = collector(&server)
        .get_complete_metrics_at("octo", "busy", now())
        .await
        .unwrap();

    history.assert_async().await;
    assert_eq!(snapshot.commit_count, 1234);
    assert_eq!(snapshot.commits_last_week, 1);
    assert_eq!(snapshot.commits_last_month, 2);
    assert_eq!(snapshot.latest_commit_message, "Ship it");
    assert!(snapshot.latest_commit_date.is_some());

    // No default branch means no tree request; the tree counts stay empty.
    assert_eq!(snapshot.file_count, 0);
}
