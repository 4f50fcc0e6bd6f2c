//! File content reads through `GitHubClient`.

use httpmock::Method::GET;
use httpmock::MockServer;
use kodegen_repo_insight::{GitHubClient, GitHubError};
use serde_json::json;

fn client(server: &MockServer) -> GitHubClient {
    GitHubClient::builder()
        .base_uri(server.base_url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn directory_path_is_not_a_text_file() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/demo/contents/docs");
            then.status(200).json_body(json!([{
                "type": "file",
                "encoding": null,
                "size": 625,
                "name": "guide.md",
                "path": "docs/guide.md",
                "content": null,
                "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
                "url": "https://api.github.com/repos/octo/demo/contents/docs/guide.md",
                "git_url": "https://api.github.com/repos/octo/demo/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
                "html_url": "https://github.com/octo/demo/blob/main/docs/guide.md",
                "download_url": "https://raw.githubusercontent.com/octo/demo/main/docs/guide.md",
                "_links": {
                    "self": "https://api.github.com/repos/octo/demo/contents/docs/guide.md",
                    "git": "https://api.github.com/repos/octo/demo/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
                    "html": "https://github.com/octo/demo/blob/main/docs/guide.md"
                }
            }]));
        })
        .await;

    let result = client(&server)
        .read_text_file("octo", "demo", "docs")
        .await
        .unwrap();
    assert!(matches!(result, Err(GitHubError::Api(ref msg)) if msg.contains("docs")));
}

#[tokio::test]
async fn missing_file_reads_as_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/repos/octo/demo/contents/package.json");
            then.status(404).json_body(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest/repos/contents#get-repository-content"
            }));
        })
        .await;

    let result = client(&server)
        .read_text_file("octo", "demo", "package.json")
        .await
        .unwrap();
    assert!(matches!(result, Ok(None)));
}
