//! File tree metrics

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

use crate::github::get_tree::TreeEntry;

lazy_static! {
    static ref TEST_FILE_RE: Result<Regex, regex::Error> =
        Regex::new(r"(?i)\.(test|spec)\.(js|ts|jsx|tsx|py|java|go|rb)$");
    static ref CONFIG_FILE_RE: Result<Regex, regex::Error> = Regex::new(
        r"(?i)^(\.?)(dockerfile|docker-compose|\.env|package\.json|\.github|pyproject\.toml|setup\.py|Cargo\.toml|go\.mod|pom\.xml)$"
    );
}

/// Counts derived from a recursive tree listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub file_count: u32,
    pub directory_count: u32,
    pub files_by_type: BTreeMap<String, u32>,
    pub test_files: u32,
    pub config_files: Vec<String>,
}

fn extension_of(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_string(),
        _ => "unknown".to_string(),
    }
}

fn matches(re: &Result<Regex, regex::Error>, path: &str) -> bool {
    match re.as_ref() {
        Ok(re) => re.is_match(path),
        Err(_) => false,
    }
}

/// Walks the tree once, counting files, directories, extensions, test and config files.
#[must_use]
pub fn analyze_tree(entries: &[TreeEntry]) -> TreeSummary {
    let mut summary = TreeSummary::default();

    for entry in entries {
        if entry.is_dir() {
            summary.directory_count += 1;
        } else if entry.is_file() {
            summary.file_count += 1;
            *summary
                .files_by_type
                .entry(extension_of(&entry.path))
                .or_insert(0) += 1;

            if matches(&TEST_FILE_RE, &entry.path) {
                summary.test_files += 1;
            }
            if matches(&CONFIG_FILE_RE, &entry.path) {
                summary.config_files.push(entry.path.clone());
            }
        }
    }

    summary
}

/// Guesses test tooling from the extension histogram.
#[must_use]
pub fn detect_test_frameworks(files_by_type: &BTreeMap<String, u32>) -> Vec<String> {
    let has = |ext: &str| files_by_type.get(ext).is_some_and(|&n| n > 0);
    let mut frameworks = Vec::new();

    if has("test") || has("spec") {
        frameworks.push("Jest/Vitest".to_string());
    }
    if has("py") {
        frameworks.push("pytest/unittest".to_string());
    }
    if has("go") {
        frameworks.push("testing".to_string());
    }
    frameworks
}
