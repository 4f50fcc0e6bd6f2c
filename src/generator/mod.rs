//! Text-generation collaborator
//!
//! The narrative layer only needs `generate(prompt) -> text`; anything that
//! can fail does so through [`GenerationError`], and every variant is treated
//! the same way upstream.

mod gemini;

pub use gemini::{
    GEMINI_API_KEY_ENV, GEMINI_ENDPOINT_ENV, GEMINI_MODEL_ENV, GeminiConfig, GeminiGenerator,
};

use std::future::Future;
use thiserror::Error;

/// Errors from a text-generation backend
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generation API returned no text")]
    EmptyResponse,

    #[error("Missing API key. Set {env_var}")]
    MissingApiKey { env_var: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Produces free text for a prompt
pub trait TextGenerator: Send + Sync + 'static {
    fn generate(&self, prompt: &str) -> impl Future<Output = GenerationResult<String>> + Send;
}

impl<T: TextGenerator> TextGenerator for std::sync::Arc<T> {
    fn generate(&self, prompt: &str) -> impl Future<Output = GenerationResult<String>> + Send {
        (**self).generate(prompt)
    }
}

/// Generator selected from configuration.
///
/// `Unavailable` stands in when no API key is configured: every call fails
/// with [`GenerationError::MissingApiKey`], so each artifact takes its
/// fallback and analysis still completes.
#[derive(Debug, Clone)]
pub enum ConfiguredGenerator {
    Gemini(GeminiGenerator),
    Unavailable { env_var: String },
}

impl ConfiguredGenerator {
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, ConfiguredGenerator::Gemini(_))
    }
}

impl TextGenerator for ConfiguredGenerator {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        match self {
            ConfiguredGenerator::Gemini(gemini) => gemini.generate(prompt).await,
            ConfiguredGenerator::Unavailable { env_var } => Err(GenerationError::MissingApiKey {
                env_var: env_var.clone(),
            }),
        }
    }
}
