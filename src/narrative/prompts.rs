//! Prompt builders for the three narrative artifacts

use chrono::{DateTime, Utc};

use crate::analysis::{MetricsSnapshot, Tier};

fn language_list(snapshot: &MetricsSnapshot, limit: usize) -> String {
    let names: Vec<&str> = snapshot
        .languages
        .keys()
        .take(limit)
        .map(String::as_str)
        .collect();
    if names.is_empty() {
        "Unknown".to_string()
    } else {
        names.join(", ")
    }
}

fn days_since_update(snapshot: &MetricsSnapshot, now: DateTime<Utc>) -> i64 {
    snapshot.days_since_update(now).round() as i64
}

pub(crate) fn summary_prompt(snapshot: &MetricsSnapshot, score: u8, now: DateTime<Utc>) -> String {
    let tier = Tier::from_score(score);
    let description = if snapshot.description.is_empty() {
        "No description"
    } else {
        snapshot.description.as_str()
    };
    format!(
        "You are a senior code reviewer. Analyze this repository and provide a brief, honest 2-3 sentence assessment:\n\n\
         Repository: {full_name}\n\
         Score: {score}/100 ({tier} level)\n\
         Description: {description}\n\
         Size: {files} files in {dirs} directories\n\
         Languages: {languages}\n\
         Stars: {stars} | Contributors: {contributors} | Commits: {commits}\n\n\
         Documentation: README={readme} | License={license} | Changelog={changelog} | Contributing={contributing}\n\
         Quality: Tests={tests} | CI/CD={ci} | Wiki={wiki}\n\
         Activity: Last update {days} days ago | {month} commits last month\n\n\
         Focus on what's working well and what needs improvement. Be specific and constructive.",
        full_name = snapshot.full_name(),
        files = snapshot.file_count,
        dirs = snapshot.directory_count,
        languages = language_list(snapshot, usize::MAX),
        stars = snapshot.stars,
        contributors = snapshot.contributors,
        commits = snapshot.commit_count,
        readme = snapshot.has_readme,
        license = snapshot.has_license,
        changelog = snapshot.has_changelog,
        contributing = snapshot.has_contributing,
        tests = snapshot.has_tests,
        ci = snapshot.has_github_actions,
        wiki = snapshot.has_wiki,
        days = days_since_update(snapshot, now),
        month = snapshot.commits_last_month,
    )
}

pub(crate) fn assessment_prompt(snapshot: &MetricsSnapshot, now: DateTime<Utc>) -> String {
    format!(
        "Analyze this GitHub repository and list its top 3-4 strengths and weaknesses:\n\n\
         Repository: {full_name}\n\
         Files: {files} | Contributors: {contributors} | Stars: {stars}\n\
         Has: README={readme}, Tests={tests}, CI/CD={ci}, License={license}\n\
         Languages: {languages}\n\
         Activity: {month} commits last month, last update {days} days ago\n\n\
         Respond ONLY in JSON format (no markdown, no code blocks):\n\
         {{\n  \"strengths\": [\"specific strength 1\", \"specific strength 2\", \"specific strength 3\"],\n  \
         \"weaknesses\": [\"specific weakness 1\", \"specific weakness 2\", \"specific weakness 3\"]\n}}",
        full_name = snapshot.full_name(),
        files = snapshot.file_count,
        contributors = snapshot.contributors,
        stars = snapshot.stars,
        readme = snapshot.has_readme,
        tests = snapshot.has_tests,
        ci = snapshot.has_github_actions,
        license = snapshot.has_license,
        languages = language_list(snapshot, 5),
        month = snapshot.commits_last_month,
        days = days_since_update(snapshot, now),
    )
}

pub(crate) fn roadmap_prompt(snapshot: &MetricsSnapshot, score: u8) -> String {
    format!(
        "Generate a personalized improvement roadmap for this GitHub repository. Return ONLY valid JSON (no markdown):\n\n\
         Repository: {full_name}\n\
         Current Score: {score}/100\n\
         Files: {files} | Tests: {tests} | Docs: {readme} | CI/CD: {ci}\n\n\
         Return a JSON array with 5-7 actionable items:\n\
         [\n  {{\n    \"title\": \"specific action\",\n    \"description\": \"why and how to do it\",\n    \
         \"difficulty\": \"Easy|Medium|Hard\",\n    \"priority\": \"Critical|High|Medium|Low\",\n    \
         \"timeEstimate\": \"1-2 hours\",\n    \
         \"category\": \"Documentation|Testing|Code Quality|DevOps|Performance\",\n    \
         \"impact\": \"how it improves the score\"\n  }}\n]",
        full_name = snapshot.full_name(),
        files = snapshot.file_count,
        tests = snapshot.has_tests,
        readme = snapshot.has_readme,
        ci = snapshot.has_github_actions,
    )
}
