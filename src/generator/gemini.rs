//! Gemini `generateContent` client

use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use super::{GenerationError, GenerationResult, TextGenerator};

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";
pub const GEMINI_ENDPOINT_ENV: &str = "GEMINI_ENDPOINT";

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL up to and including the API version segment
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Reads `GEMINI_API_KEY` plus optional `GEMINI_MODEL` and `GEMINI_ENDPOINT`.
    pub fn from_env() -> GenerationResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| GenerationError::MissingApiKey {
            env_var: GEMINI_API_KEY_ENV.to_string(),
        })?;
        let mut config = Self::new(api_key);
        if let Ok(model) = env::var(GEMINI_MODEL_ENV) {
            config.model = model;
        }
        if let Ok(endpoint) = env::var(GEMINI_ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// [`TextGenerator`] backed by Google's Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new(config: GeminiConfig) -> GenerationResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn from_env() -> GenerationResult<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    #[must_use]
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        debug!("Requesting {} ({} prompt bytes)", self.config.model, prompt.len());
        let response = self
            .http
            .post(self.config.url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.json::<GenerateResponse>().await?.into_text();
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}
