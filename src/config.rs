//! Application configuration file
//!
//! ```toml
//! [narrative]
//! cache_ttl_secs = 86400
//! max_calls_per_window = 3
//! rate_limit_window_secs = 60
//! cache_capacity = 1000
//!
//! [gemini]
//! model = "gemini-2.0-flash"
//! endpoint = "https://generativelanguage.googleapis.com/v1beta"
//! timeout_secs = 60
//! ```
//!
//! Every key is optional. Environment variables take precedence over the
//! `[gemini]` section.

use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::generator::{
    ConfiguredGenerator, GEMINI_API_KEY_ENV, GEMINI_ENDPOINT_ENV, GEMINI_MODEL_ENV, GeminiConfig,
    GeminiGenerator, GenerationError, GenerationResult,
};
use crate::narrative::NarrativeConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// `[narrative]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NarrativeSection {
    pub cache_ttl_secs: Option<u64>,
    pub max_calls_per_window: Option<u32>,
    pub rate_limit_window_secs: Option<u64>,
    pub cache_capacity: Option<usize>,
}

/// `[gemini]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeminiSection {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Parsed configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub narrative: NarrativeSection,
    pub gemini: GeminiSection,
}

impl AppConfig {
    /// Loads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Narrative bounds with file values layered over the defaults
    #[must_use]
    pub fn narrative_config(&self) -> NarrativeConfig {
        let defaults = NarrativeConfig::default();
        let section = &self.narrative;
        NarrativeConfig {
            cache_capacity: section.cache_capacity.unwrap_or(defaults.cache_capacity),
            cache_ttl: section
                .cache_ttl_secs
                .map_or(defaults.cache_ttl, Duration::from_secs),
            max_calls_per_window: section
                .max_calls_per_window
                .unwrap_or(defaults.max_calls_per_window),
            rate_limit_window: section
                .rate_limit_window_secs
                .map_or(defaults.rate_limit_window, Duration::from_secs),
        }
    }

    /// Gemini settings: API key from the environment, then environment,
    /// file and built-in defaults for the rest.
    pub fn gemini_config(&self) -> GenerationResult<GeminiConfig> {
        self.gemini_config_with_key(std::env::var(GEMINI_API_KEY_ENV).ok())
    }

    fn gemini_config_with_key(&self, api_key: Option<String>) -> GenerationResult<GeminiConfig> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::MissingApiKey {
                env_var: GEMINI_API_KEY_ENV.to_string(),
            })?;
        let mut config = GeminiConfig::new(api_key);

        if let Some(model) = std::env::var(GEMINI_MODEL_ENV)
            .ok()
            .or_else(|| self.gemini.model.clone())
        {
            config.model = model;
        }
        if let Some(endpoint) = std::env::var(GEMINI_ENDPOINT_ENV)
            .ok()
            .or_else(|| self.gemini.endpoint.clone())
        {
            config.endpoint = endpoint;
        }
        if let Some(secs) = self.gemini.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Text generator for narratives.
    ///
    /// A missing API key is not an error: the result is
    /// [`ConfiguredGenerator::Unavailable`] and every artifact falls back.
    pub fn text_generator(&self) -> GenerationResult<ConfiguredGenerator> {
        self.text_generator_with_key(std::env::var(GEMINI_API_KEY_ENV).ok())
    }

    fn text_generator_with_key(
        &self,
        api_key: Option<String>,
    ) -> GenerationResult<ConfiguredGenerator> {
        match self.gemini_config_with_key(api_key) {
            Ok(config) => Ok(ConfiguredGenerator::Gemini(GeminiGenerator::new(config)?)),
            Err(GenerationError::MissingApiKey { env_var }) => {
                warn!("{env_var} is not set; narratives will use rule-based fallbacks");
                Ok(ConfiguredGenerator::Unavailable { env_var })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TextGenerator;
    use std::io::Write;

    #[test]
    fn missing_path_gives_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        let narrative = config.narrative_config();
        assert_eq!(narrative.max_calls_per_window, 3);
        assert_eq!(narrative.cache_ttl, Duration::from_secs(86_400));
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[narrative]\nmax_calls_per_window = 10\ncache_ttl_secs = 600\n\n[gemini]\ntimeout_secs = 5"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        let narrative = config.narrative_config();
        assert_eq!(narrative.max_calls_per_window, 10);
        assert_eq!(narrative.cache_ttl, Duration::from_secs(600));
        assert_eq!(narrative.rate_limit_window, Duration::from_secs(60));
        assert_eq!(narrative.cache_capacity, 1000);
        assert_eq!(config.gemini.timeout_secs, Some(5));
        assert_eq!(config.gemini.model, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[narrative]\nmax_calls = 10").unwrap();
        assert!(matches!(
            AppConfig::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn missing_api_key_yields_fallback_generator() {
        let generator = AppConfig::default().text_generator_with_key(None).unwrap();
        assert!(!generator.is_available());
        assert!(matches!(
            generator.generate("summarize").await,
            Err(GenerationError::MissingApiKey { .. })
        ));

        let blank = AppConfig::default()
            .text_generator_with_key(Some("  ".to_string()))
            .unwrap();
        assert!(!blank.is_available());
    }

    #[test]
    fn api_key_selects_gemini_with_file_timeout() {
        let config = AppConfig {
            gemini: GeminiSection {
                timeout_secs: Some(5),
                ..Default::default()
            },
            ..Default::default()
        };
        match config.text_generator_with_key(Some("key".to_string())).unwrap() {
            ConfiguredGenerator::Gemini(gemini) => {
                assert_eq!(gemini.config().api_key, "key");
                assert_eq!(gemini.config().timeout, Duration::from_secs(5));
            }
            other => panic!("expected Gemini, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }
}
