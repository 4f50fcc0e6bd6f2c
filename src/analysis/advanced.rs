//! Snapshot-only security, complexity, performance and code review heuristics
//!
//! Nothing here reads source code. Complexity is estimated from the ratio of
//! files to directories and the number of languages; every other result is a
//! rule over snapshot flags and counts.

use serde::{Deserialize, Serialize};

use crate::analysis::score::{clamp_score, flag};
use crate::analysis::types::MetricsSnapshot;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum VulnerabilitySeverity {
    Critical,
    High,
    Medium,
    Low,
}

/// A repository hygiene gap with security impact
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SecurityVulnerability {
    pub id: String,
    pub title: String,
    pub severity: VulnerabilitySeverity,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cve: Option<String>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ComplexityLevel {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            76.. => ComplexityLevel::VeryHigh,
            61..=75 => ComplexityLevel::High,
            41..=60 => ComplexityLevel::Medium,
            _ => ComplexityLevel::Low,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMetrics {
    pub cyclomatic_complexity: u32,
    /// Estimated at 150 lines per file
    pub lines_of_code: u64,
    pub maintainability_index: u32,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeComplexity {
    pub score: u8,
    pub level: ComplexityLevel,
    pub file_count: u32,
    /// Files per directory, times ten
    pub avg_complexity: u32,
    pub hotspots: Vec<String>,
    pub metrics: ComplexityMetrics,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub build_time: String,
    pub bundle_size: String,
    pub dependencies: u32,
    /// Estimated as 15% of `dependencies`
    pub outdated_deps: u32,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PerformanceAnalysis {
    pub score: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub metrics: PerformanceMetrics,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CodeReviewSuggestion {
    pub category: String,
    pub title: String,
    pub severity: SuggestionSeverity,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub solution: String,
}

/// All four heuristics for one snapshot
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedAnalysis {
    pub vulnerabilities: Vec<SecurityVulnerability>,
    pub complexity: CodeComplexity,
    pub performance: PerformanceAnalysis,
    pub code_review: Vec<CodeReviewSuggestion>,
}

/// Thresholds shared by the security and review rules
#[derive(Debug, Clone)]
pub struct AdvancedThresholds {
    pub unmanaged_repo_files: u32,
    pub short_readme_chars: u32,
    pub thin_docs_readme_chars: u32,
    pub busy_repo_commits: u32,
    pub team_contributors: u32,
    pub heavy_dependencies: u32,
}

pub const ADVANCED_THRESHOLDS: AdvancedThresholds = AdvancedThresholds {
    unmanaged_repo_files: 500,
    short_readme_chars: 500,
    thin_docs_readme_chars: 1000,
    busy_repo_commits: 100,
    team_contributors: 5,
    heavy_dependencies: 50,
};

#[derive(Debug, Clone)]
pub struct ComplexityWeights {
    pub baseline: f64,
    pub crowded_ratio: f64,
    pub crowded_points: f64,
    pub tidy_ratio: f64,
    pub tidy_points: f64,
    pub many_languages: usize,
    pub many_languages_points: f64,
}

pub const COMPLEXITY_WEIGHTS: ComplexityWeights = ComplexityWeights {
    baseline: 50.0,
    crowded_ratio: 10.0,
    crowded_points: 20.0,
    tidy_ratio: 2.0,
    tidy_points: -10.0,
    many_languages: 5,
    many_languages_points: 15.0,
};

#[derive(Debug, Clone)]
pub struct PerformanceWeights {
    pub baseline: f64,
    pub heavy_dependencies: f64,
    pub no_ci: f64,
    pub no_tests: f64,
}

pub const PERFORMANCE_WEIGHTS: PerformanceWeights = PerformanceWeights {
    baseline: 80.0,
    heavy_dependencies: -15.0,
    no_ci: -10.0,
    no_tests: -5.0,
};

fn vulnerability(
    id: &str,
    title: &str,
    severity: VulnerabilitySeverity,
    description: &str,
    recommendation: &str,
) -> SecurityVulnerability {
    SecurityVulnerability {
        id: id.to_string(),
        title: title.to_string(),
        severity,
        description: description.to_string(),
        file: None,
        recommendation: recommendation.to_string(),
        cve: None,
    }
}

/// Security-relevant hygiene gaps, in rule order.
#[must_use]
pub fn analyze_security(s: &MetricsSnapshot) -> Vec<SecurityVulnerability> {
    let t = &ADVANCED_THRESHOLDS;
    let mut found = Vec::new();

    if !s.has_license {
        found.push(vulnerability(
            "sec-001",
            "Missing License File",
            VulnerabilitySeverity::High,
            "No LICENSE file found in repository. This creates legal ambiguity about usage rights.",
            "Add a LICENSE file (MIT, Apache 2.0, or GPL recommended for open source)",
        ));
    }

    if !s.has_contributing {
        found.push(vulnerability(
            "sec-002",
            "No Contributing Guidelines",
            VulnerabilitySeverity::Medium,
            "Missing CONTRIBUTING.md makes it unclear how to safely contribute code.",
            "Create CONTRIBUTING.md with security guidelines, code review process, and reporting vulnerabilities",
        ));
    }

    if s.file_count > t.unmanaged_repo_files && !s.has_github_actions {
        found.push(SecurityVulnerability {
            cve: Some("Multiple potential CVEs from outdated packages".to_string()),
            ..vulnerability(
                "sec-003",
                "No Dependency Management CI/CD",
                VulnerabilitySeverity::High,
                "Without automated CI/CD, outdated dependencies might slip through code review.",
                "Setup GitHub Actions with Dependabot to automatically check for vulnerable dependencies",
            )
        });
    }

    if s.has_readme && s.readme_length < t.short_readme_chars {
        found.push(SecurityVulnerability {
            file: Some("README.md".to_string()),
            ..vulnerability(
                "sec-004",
                "Incomplete Security Documentation",
                VulnerabilitySeverity::Medium,
                "README doesn't contain security best practices or vulnerability reporting info.",
                "Add security.txt file or SECURITY.md with vulnerability disclosure policy and contact information",
            )
        });
    }

    if s.commit_count > t.busy_repo_commits && s.contributors > t.team_contributors {
        found.push(vulnerability(
            "sec-005",
            "Multi-contributor repo without evident branch protection",
            VulnerabilitySeverity::Medium,
            "Large team with significant activity should enforce branch protection rules.",
            "Enable branch protection on main/master with required reviews, status checks, and dismiss stale PRs",
        ));
    }

    found
}

/// Complexity estimate from the file/directory ratio and language count.
#[must_use]
pub fn analyze_complexity(s: &MetricsSnapshot) -> CodeComplexity {
    let w = &COMPLEXITY_WEIGHTS;
    let files = s.file_count.max(1);
    let ratio = f64::from(files) / f64::from(s.directory_count.max(1));

    let raw = w.baseline
        + flag(ratio > w.crowded_ratio, w.crowded_points)
        + flag(ratio < w.tidy_ratio, w.tidy_points)
        + flag(s.languages.len() > w.many_languages, w.many_languages_points);
    let score = clamp_score(raw);

    let estimate = |share: u32| files * share / 10;
    let full_name = s.full_name();

    CodeComplexity {
        score,
        level: ComplexityLevel::from_score(score),
        file_count: files,
        avg_complexity: (ratio * 10.0).round() as u32,
        hotspots: vec![
            format!("Folder: {full_name}/src (estimated {} files)", estimate(4)),
            format!("Folder: {full_name}/tests (estimated {} files)", estimate(2)),
            format!("Folder: {full_name}/lib (estimated {} files)", estimate(3)),
        ],
        metrics: ComplexityMetrics {
            cyclomatic_complexity: (5.0 + f64::from(score) / 100.0 * 50.0).round() as u32,
            lines_of_code: u64::from(files) * 150,
            maintainability_index: (100.0 - f64::from(score) * 0.6).round() as u32,
        },
    }
}

fn has_language(s: &MetricsSnapshot, language: &str) -> bool {
    s.languages.get(language).is_some_and(|&bytes| bytes > 0)
}

/// Build and runtime performance signals.
#[must_use]
pub fn analyze_performance(s: &MetricsSnapshot) -> PerformanceAnalysis {
    let w = &PERFORMANCE_WEIGHTS;
    let dependencies = s.dependencies_total;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();
    let mut raw = w.baseline;

    if dependencies > ADVANCED_THRESHOLDS.heavy_dependencies {
        issues.push(format!(
            "High dependency count ({dependencies}) may impact install and build time"
        ));
        recommendations.push("Review and consolidate dependencies, remove unused packages".to_string());
        raw += w.heavy_dependencies;
    }

    if !s.has_github_actions {
        issues.push("No automated build pipeline detected".to_string());
        recommendations.push("Setup CI/CD to catch performance regressions".to_string());
        raw += w.no_ci;
    }

    if !s.has_tests {
        issues.push("No test suite for performance regression detection".to_string());
        recommendations.push("Add performance tests to catch slowdowns before deployment".to_string());
        raw += w.no_tests;
    }

    let javascript = has_language(s, "JavaScript") || has_language(s, "TypeScript");
    if javascript {
        recommendations.push("Use tree-shaking and code splitting to reduce bundle size".to_string());
    }
    if has_language(s, "Python") {
        recommendations.push("Profile code for bottlenecks using cProfile".to_string());
    }

    PerformanceAnalysis {
        score: clamp_score(raw),
        issues,
        recommendations,
        metrics: PerformanceMetrics {
            build_time: if s.has_github_actions { "~30-45s" } else { "Unknown" }.to_string(),
            bundle_size: if javascript {
                "~150-250KB (estimated)"
            } else {
                "N/A"
            }
            .to_string(),
            dependencies,
            outdated_deps: dependencies * 15 / 100,
        },
    }
}

fn suggestion(
    category: &str,
    title: &str,
    severity: SuggestionSeverity,
    description: &str,
    solution: &str,
) -> CodeReviewSuggestion {
    CodeReviewSuggestion {
        category: category.to_string(),
        title: title.to_string(),
        severity,
        description: description.to_string(),
        example: None,
        solution: solution.to_string(),
    }
}

const DOC_COMMENT_EXAMPLE: &str = "/**\n * Analyzes repository metrics\n * @param {string} url - GitHub repo URL\n * @returns {Promise<Analysis>}\n */";

/// Review suggestions: three always present, two conditional.
#[must_use]
pub fn code_review_suggestions(s: &MetricsSnapshot) -> Vec<CodeReviewSuggestion> {
    let mut suggestions = vec![suggestion(
        "Code Style",
        "Consistent naming conventions",
        SuggestionSeverity::Warning,
        "Repository uses inconsistent naming patterns across different modules",
        "Enforce naming conventions using ESLint/Pylint. Use camelCase for JS, snake_case for Python consistently",
    )];

    if !s.has_tests {
        suggestions.push(suggestion(
            "Error Handling",
            "Missing error handling tests",
            SuggestionSeverity::Error,
            "No visible test coverage for error scenarios and edge cases",
            "Add try-catch tests and edge case validation. Test both happy and sad paths",
        ));
    }

    if !s.has_readme || s.readme_length < ADVANCED_THRESHOLDS.thin_docs_readme_chars {
        suggestions.push(CodeReviewSuggestion {
            example: Some(DOC_COMMENT_EXAMPLE.to_string()),
            ..suggestion(
                "Documentation",
                "Insufficient API documentation",
                SuggestionSeverity::Warning,
                "Functions and classes lack detailed docstrings",
                "Add JSDoc/docstrings to all public functions. Include examples and parameter descriptions",
            )
        });
    }

    suggestions.push(suggestion(
        "Performance",
        "Dependency optimization",
        SuggestionSeverity::Info,
        "Consider optimizing dependencies for better performance",
        "Run `npm audit` or `pip check`. Remove unused dependencies. Use lighter alternatives",
    ));
    suggestions.push(suggestion(
        "Security",
        "Add security headers",
        SuggestionSeverity::Warning,
        "Web-based projects should include security headers",
        "Add Content-Security-Policy, X-Frame-Options, X-Content-Type-Options headers",
    ));

    suggestions
}

#[must_use]
pub fn advanced_analysis(s: &MetricsSnapshot) -> AdvancedAnalysis {
    AdvancedAnalysis {
        vulnerabilities: analyze_security(s),
        complexity: analyze_complexity(s),
        performance: analyze_performance(s),
        code_review: code_review_suggestions(s),
    }
}
