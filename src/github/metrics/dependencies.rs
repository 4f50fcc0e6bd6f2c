//! Dependency metrics from `package.json`

use serde_json::Value as JsonValue;
use std::collections::BTreeSet;

/// Known framework packages and their display names, matched by substring
const KNOWN_FRAMEWORKS: [(&str, &str); 7] = [
    ("react", "React"),
    ("vue", "Vue"),
    ("angular", "Angular"),
    ("express", "Express"),
    ("fastapi", "FastAPI"),
    ("django", "Django"),
    ("nextjs", "Next.js"),
];

/// Dependency counts and recognised frameworks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySummary {
    pub total: u32,
    /// Always zero: no registry lookups are made
    pub outdated: u32,
    pub frameworks: Vec<String>,
}

/// Display names of frameworks whose key appears in any dependency name, deduplicated.
#[must_use]
pub fn detect_frameworks<'a>(dependency_names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut frameworks: Vec<String> = Vec::new();
    for dep in dependency_names {
        for (key, display) in KNOWN_FRAMEWORKS {
            if dep.contains(key) && !frameworks.iter().any(|f| f == display) {
                frameworks.push(display.to_string());
            }
        }
    }
    frameworks
}

/// Merges `dependencies` and `devDependencies`. Unparsable input yields an empty summary.
#[must_use]
pub fn analyze_package_json(text: &str) -> DependencySummary {
    let Ok(parsed) = serde_json::from_str::<JsonValue>(text) else {
        return DependencySummary::default();
    };

    let names: BTreeSet<&str> = ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|section| parsed.get(section).and_then(JsonValue::as_object))
        .flat_map(|deps| deps.keys().map(String::as_str))
        .collect();

    DependencySummary {
        total: names.len() as u32,
        outdated: 0,
        frameworks: detect_frameworks(names.iter().copied()),
    }
}
