use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::classifier::{Classifier, ClassifierError, DEFAULT_K};

/// Threshold used when reclassifying against stored categorizations.
/// Deliberately lower than the library default: any overlap counts.
pub const PIPELINE_MIN_SIMILARITY: f32 = 0.01;
pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Invalid classifier settings: {0}")]
    Classifier(#[from] ClassifierError),
}

/// Settings for the LLM categorizer
#[derive(Debug, Clone)]
pub struct CategorizerConfig {
    /// Base URL of the Ollama server
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for CategorizerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Settings for classifiers built per reclassification request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnnSettings {
    pub k: usize,
    pub min_similarity_threshold: f32,
}

impl Default for KnnSettings {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            min_similarity_threshold: PIPELINE_MIN_SIMILARITY,
        }
    }
}

impl KnnSettings {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        Classifier::validate_settings(self.k, self.min_similarity_threshold)
    }
}

/// Application configuration, passed explicitly to every collaborator
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub categorizer: CategorizerConfig,
    pub knn: KnnSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            categorizer: CategorizerConfig::default(),
            knn: KnnSettings::default(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from defaults overridden by environment variables:
    /// `CONTEXTUAL_DATA`, `CONTEXTUAL_OLLAMA_URL`, `CONTEXTUAL_OLLAMA_MODEL`,
    /// `CONTEXTUAL_K` and `CONTEXTUAL_MIN_SIMILARITY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = env::var("CONTEXTUAL_OLLAMA_URL") {
            config.categorizer.base_url = url;
        }
        if let Ok(model) = env::var("CONTEXTUAL_OLLAMA_MODEL") {
            config.categorizer.model = model;
        }
        if let Ok(value) = env::var("CONTEXTUAL_K") {
            config.knn.k = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "CONTEXTUAL_K",
                value: value.clone(),
            })?;
        }
        if let Ok(value) = env::var("CONTEXTUAL_MIN_SIMILARITY") {
            config.knn.min_similarity_threshold =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "CONTEXTUAL_MIN_SIMILARITY",
                    value: value.clone(),
                })?;
        }

        config.knn.validate()?;
        Ok(config)
    }
}

/// Returns the default data directory path
pub fn default_data_dir() -> PathBuf {
    // 1. Check environment variable
    if let Ok(path) = env::var("CONTEXTUAL_DATA") {
        return PathBuf::from(path);
    }

    // 2. Use platform-specific data directory
    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("contextual");
    }

    // 3. Fallback to user's home directory
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".local").join("share").join("contextual");
    }

    // 4. If all else fails, use system temp directory
    env::temp_dir().join("contextual")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-wide, keep every env mutation in one test
    #[test]
    fn test_from_env() {
        env::set_var("CONTEXTUAL_DATA", "/tmp/contextual-test-data");
        env::set_var("CONTEXTUAL_OLLAMA_MODEL", "mistral");
        env::set_var("CONTEXTUAL_K", "3");
        env::remove_var("CONTEXTUAL_MIN_SIMILARITY");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/contextual-test-data"));
        assert_eq!(config.categorizer.model, "mistral");
        assert_eq!(config.knn.k, 3);
        assert_eq!(config.knn.min_similarity_threshold, PIPELINE_MIN_SIMILARITY);

        env::set_var("CONTEXTUAL_K", "zero");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::InvalidValue { name: "CONTEXTUAL_K", .. })
        ));

        env::set_var("CONTEXTUAL_K", "0");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::Classifier(ClassifierError::InvalidK(0)))
        ));

        env::remove_var("CONTEXTUAL_DATA");
        env::remove_var("CONTEXTUAL_OLLAMA_MODEL");
        env::remove_var("CONTEXTUAL_K");

        let path = default_data_dir();
        assert!(path.to_string_lossy().contains("contextual"));
    }

    #[test]
    fn test_knn_defaults() {
        let settings = KnnSettings::default();
        assert_eq!(settings.k, 5);
        assert_eq!(settings.min_similarity_threshold, 0.01);
        assert!(settings.validate().is_ok());
    }
}
