//! Repository URL parsing

use lazy_static::lazy_static;
use regex::Regex;

use crate::github::error::{GitHubError, GitHubResult};

lazy_static! {
    static ref REPO_URL_RE: Result<Regex, regex::Error> =
        Regex::new(r"^(?:https?://)?(?:www\.)?github\.com/([^/\s]+)/([^/\s]+?)(?:\.git)?/?$");
}

/// Splits `https://github.com/<owner>/<repo>` into `(owner, repo)`.
///
/// The scheme, a trailing slash and a `.git` suffix are optional.
pub fn parse_repository_url(url: &str) -> GitHubResult<(String, String)> {
    let re = REPO_URL_RE
        .as_ref()
        .map_err(|e| GitHubError::InvalidInput(format!("URL pattern failed to compile: {e}")))?;

    let caps = re
        .captures(url.trim())
        .ok_or_else(|| GitHubError::InvalidInput(format!("Not a GitHub repository URL: {url}")))?;

    match (caps.get(1), caps.get(2)) {
        (Some(owner), Some(repo)) if !repo.as_str().is_empty() => {
            Ok((owner.as_str().to_string(), repo.as_str().to_string()))
        }
        _ => Err(GitHubError::InvalidInput(format!(
            "Not a GitHub repository URL: {url}"
        ))),
    }
}
