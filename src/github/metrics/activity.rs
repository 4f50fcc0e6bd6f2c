//! Commit and pull request activity

use chrono::{DateTime, Duration, Utc};

use crate::github::list_pull_requests::PullTiming;

/// Commits inside the trailing week, month and year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitWindows {
    pub last_week: u32,
    pub last_month: u32,
    pub last_year: u32,
}

/// Counts commit dates strictly younger than 7, 30 and 365 days.
#[must_use]
pub fn count_commit_windows<I>(dates: I, now: DateTime<Utc>) -> CommitWindows
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut windows = CommitWindows::default();
    for date in dates {
        let age = now - date;
        if age < Duration::days(7) {
            windows.last_week += 1;
        }
        if age < Duration::days(30) {
            windows.last_month += 1;
        }
        if age < Duration::days(365) {
            windows.last_year += 1;
        }
    }
    windows
}

/// Total commits on the default branch.
///
/// `total` comes from pagination of the history listing; the one-year window
/// stands in when that listing failed. At least one when a latest commit exists.
#[must_use]
pub fn commit_count(total: u32, windows: &CommitWindows, has_latest_commit: bool) -> u32 {
    let seen = total.max(windows.last_year);
    if has_latest_commit { seen.max(1) } else { seen }
}

/// Closed pull request figures
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PullRequestStats {
    pub merged: u32,
    pub average_review_hours: f64,
}

/// `merged` counts every closed pull request returned; the average covers
/// only those with both timestamps and is rounded to one decimal.
#[must_use]
pub fn pull_request_stats(pulls: &[PullTiming]) -> PullRequestStats {
    let review_hours: Vec<f64> = pulls
        .iter()
        .filter_map(|pr| match (pr.created_at, pr.merged_at) {
            (Some(created), Some(merged)) => {
                Some((merged - created).num_milliseconds() as f64 / 3_600_000.0)
            }
            _ => None,
        })
        .collect();

    let average = if review_hours.is_empty() {
        0.0
    } else {
        review_hours.iter().sum::<f64>() / review_hours.len() as f64
    };

    PullRequestStats {
        merged: pulls.len() as u32,
        average_review_hours: (average * 10.0).round() / 10.0,
    }
}
