//! Parsing of generated text into artifacts

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::{Assessment, RoadmapItem};
use crate::narrative::types::{ArtifactKind, NarrativeError, NarrativeResult};

lazy_static! {
    static ref CODE_FENCE_RE: Result<Regex, regex::Error> = Regex::new(r"```(?:json)?\n?");
}

/// Removes markdown code fences models like to wrap JSON in.
pub(crate) fn strip_code_fences(text: &str) -> String {
    match CODE_FENCE_RE.as_ref() {
        Ok(re) => re.replace_all(text, "").trim().to_string(),
        Err(_) => text.trim().to_string(),
    }
}

fn malformed(kind: ArtifactKind, details: impl Into<String>) -> NarrativeError {
    NarrativeError::MalformedResponse {
        kind,
        details: details.into(),
    }
}

pub(crate) fn parse_summary(text: &str) -> NarrativeResult<String> {
    let summary = text.trim();
    if summary.is_empty() {
        return Err(malformed(ArtifactKind::Summary, "empty text"));
    }
    Ok(summary.to_string())
}

pub(crate) fn parse_assessment(text: &str) -> NarrativeResult<Assessment> {
    let kind = ArtifactKind::StrengthsWeaknesses;
    let assessment: Assessment = serde_json::from_str(&strip_code_fences(text))
        .map_err(|e| malformed(kind, e.to_string()))?;
    if assessment.strengths.is_empty() && assessment.weaknesses.is_empty() {
        return Err(malformed(kind, "no strengths or weaknesses listed"));
    }
    Ok(assessment)
}

pub(crate) fn parse_roadmap(text: &str) -> NarrativeResult<Vec<RoadmapItem>> {
    let kind = ArtifactKind::Roadmap;
    let items: Vec<RoadmapItem> = serde_json::from_str(&strip_code_fences(text))
        .map_err(|e| malformed(kind, e.to_string()))?;
    if items.is_empty() {
        return Err(malformed(kind, "empty roadmap"));
    }
    Ok(items)
}
