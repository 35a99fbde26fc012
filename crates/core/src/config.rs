//! Configuration management for faqdex.
//!
//! Configuration is assembled once at startup from three layers, later
//! layers winning: built-in defaults, an optional YAML config file
//! (`faqdex.yaml`), environment variables, and finally command-line
//! flags. The resulting `AppConfig` is passed by reference into the
//! collaborators that need it; no module reads the process environment
//! on its own after startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the FAQ corpus JSON file
    pub corpus_file: Option<PathBuf>,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// LLM provider for answer generation ("openai", "ollama")
    pub provider: String,

    /// Model identifier for the active provider
    pub model: String,

    /// API key for the LLM provider
    pub api_key: Option<String>,

    /// Optional prompt definition file overriding the built-in template
    pub prompt_file: Option<PathBuf>,

    /// Maximum tokens to generate per answer
    pub max_tokens: u32,

    /// Sampling temperature for answer generation
    pub temperature: f32,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Provider configurations from the config file
    pub llm: Option<LlmConfig>,
}

/// LLM configuration section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(rename = "activeProvider")]
    pub active_provider: String,

    pub providers: HashMap<String, ProviderConfig>,
}

/// Provider-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderConfig {
    OpenAI {
        #[serde(rename = "apiKeyEnv")]
        api_key_env: String,
        model: String,
        endpoint: Option<String>,
    },
    Ollama {
        endpoint: String,
        model: String,
        timeout: Option<u64>,
    },
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    corpus: Option<String>,
    llm: Option<LlmConfig>,
    generation: Option<GenerationConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenerationConfig {
    #[serde(rename = "maxTokens")]
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus_file: None,
            config_file: None,
            provider: "openai".to_string(),
            model: "gpt-3.5-turbo-instruct".to_string(),
            api_key: None,
            prompt_file: None,
            max_tokens: 50,
            temperature: 1.0,
            log_level: None,
            verbose: false,
            no_color: false,
            llm: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `FAQDEX_CORPUS`: Path to the FAQ corpus JSON file
    /// - `FAQDEX_CONFIG`: Path to the config file
    /// - `FAQDEX_PROVIDER`: LLM provider
    /// - `FAQDEX_MODEL`: Model identifier
    /// - `FAQDEX_API_KEY`: API key
    /// - `FAQDEX_PROMPT`: Prompt definition file
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(config_file) = std::env::var("FAQDEX_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Load from YAML config file if it exists
        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("faqdex.yaml"));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(corpus) = std::env::var("FAQDEX_CORPUS") {
            config.corpus_file = Some(PathBuf::from(corpus));
        }

        if let Ok(provider) = std::env::var("FAQDEX_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(model) = std::env::var("FAQDEX_MODEL") {
            config.model = model;
        }

        if let Ok(prompt) = std::env::var("FAQDEX_PROMPT") {
            config.prompt_file = Some(PathBuf::from(prompt));
        }

        if let Ok(key) = std::env::var("FAQDEX_API_KEY") {
            config.api_key = Some(key);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(corpus) = config_file.corpus {
            result.corpus_file = Some(PathBuf::from(corpus));
        }

        if let Some(generation) = config_file.generation {
            if let Some(max_tokens) = generation.max_tokens {
                result.max_tokens = max_tokens;
            }
            if let Some(temperature) = generation.temperature {
                result.temperature = temperature;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        if let Some(llm) = config_file.llm {
            result.provider = llm.active_provider.clone();

            if let Some(provider_config) = llm.providers.get(&llm.active_provider) {
                result.model = match provider_config {
                    ProviderConfig::OpenAI { model, .. } => model.clone(),
                    ProviderConfig::Ollama { model, .. } => model.clone(),
                };
            }

            result.llm = Some(llm);
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over both the config file and
    /// environment variables.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        corpus_file: Option<PathBuf>,
        config_file: Option<PathBuf>,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(corpus_file) = corpus_file {
            self.corpus_file = Some(corpus_file);
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// The corpus file path, or a configuration error if none was given.
    pub fn require_corpus_file(&self) -> AppResult<&PathBuf> {
        self.corpus_file.as_ref().ok_or_else(|| {
            AppError::Config(
                "No corpus file configured. Pass --corpus, set FAQDEX_CORPUS, \
                 or add `corpus:` to faqdex.yaml."
                    .to_string(),
            )
        })
    }

    /// Get the configuration for a provider, if the config file has one.
    pub fn get_provider_config(&self, provider: &str) -> Option<ProviderConfig> {
        self.llm
            .as_ref()
            .and_then(|llm| llm.providers.get(provider).cloned())
    }

    /// Resolve the API key for a provider.
    ///
    /// An explicit `FAQDEX_API_KEY` wins; otherwise the provider's
    /// `apiKeyEnv` indirection is followed, defaulting to
    /// `OPENAI_API_KEY` for the OpenAI provider.
    pub fn resolve_api_key(&self, provider: &str) -> Option<String> {
        if let Some(ref key) = self.api_key {
            return Some(key.clone());
        }

        let env_var = match self.get_provider_config(provider) {
            Some(ProviderConfig::OpenAI { api_key_env, .. }) => Some(api_key_env),
            Some(ProviderConfig::Ollama { .. }) => None,
            None if provider == "openai" => Some("OPENAI_API_KEY".to_string()),
            None => None,
        };

        env_var.and_then(|var| std::env::var(var).ok())
    }

    /// Resolve the endpoint URL for a provider, if configured.
    pub fn resolve_endpoint(&self, provider: &str) -> Option<String> {
        match self.get_provider_config(provider) {
            Some(ProviderConfig::OpenAI { endpoint, .. }) => endpoint,
            Some(ProviderConfig::Ollama { endpoint, .. }) => Some(endpoint),
            None => None,
        }
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let provider = &self.provider;
        let known_providers = ["openai", "ollama"];

        if !known_providers.contains(&provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                provider,
                known_providers.join(", ")
            )));
        }

        if provider == "openai" && self.resolve_api_key(provider).is_none() {
            return Err(AppError::Config(
                "OpenAI provider requires an API key. Set OPENAI_API_KEY \
                 (or the configured apiKeyEnv) or FAQDEX_API_KEY."
                    .to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "openai");
        assert_eq!(config.max_tokens, 50);
        assert_eq!(config.temperature, 1.0);
        assert!(config.corpus_file.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            Some(PathBuf::from("faq.json")),
            None,
            Some("ollama".to_string()),
            Some("llama3.2".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(overridden.corpus_file, Some(PathBuf::from("faq.json")));
        assert_eq!(overridden.provider, "ollama");
        assert_eq!(overridden.model, "llama3.2");
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_require_corpus_file_missing() {
        let config = AppConfig::default();
        assert!(config.require_corpus_file().is_err());
    }

    #[test]
    fn test_validate_unknown_provider() {
        let mut config = AppConfig::default();
        config.provider = "unknown".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_ollama_needs_no_key() {
        let mut config = AppConfig::default();
        config.provider = "ollama".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "corpus: data/faq.json\n\
             generation:\n  maxTokens: 120\n  temperature: 0.4\n\
             llm:\n  activeProvider: ollama\n  providers:\n    ollama:\n      endpoint: http://localhost:11434\n      model: llama3.2\n"
        )
        .unwrap();

        let mut config = AppConfig::default();
        let merged = config.merge_yaml(&file.path().to_path_buf()).unwrap();

        assert_eq!(merged.corpus_file, Some(PathBuf::from("data/faq.json")));
        assert_eq!(merged.max_tokens, 120);
        assert_eq!(merged.temperature, 0.4);
        assert_eq!(merged.provider, "ollama");
        assert_eq!(merged.model, "llama3.2");
        assert_eq!(
            merged.resolve_endpoint("ollama"),
            Some("http://localhost:11434".to_string())
        );
    }
}
