// ABOUTME: Environment configuration for the narrative backend and deployment mode
// ABOUTME: Parses LLM provider selection, per-provider endpoints, and narrative limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Everything is read once at startup. The scoring crate never sees any of
//! these values; only the narrative layer does.

use pierre_health_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Environment variable selecting the deployment mode
    pub const ENV_VAR: &'static str = "ENVIRONMENT";

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Load from `ENVIRONMENT`
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR)
            .map(|s| Self::from_str_or_default(&s))
            .unwrap_or_default()
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Narrative backend provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// Local Ollama server (default)
    #[default]
    Ollama,
    /// Google Gemini through its `OpenAI`-compatible endpoint
    Gemini,
    /// `OpenRouter` hosted models
    OpenRouter,
}

impl LlmProviderType {
    /// Environment variable for primary provider selection
    pub const ENV_VAR: &'static str = "PRIMARY_LLM_PROVIDER";

    /// Parse from string with fallback to default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "gemini" | "google" => Self::Gemini,
            "openrouter" => Self::OpenRouter,
            _ => Self::Ollama,
        }
    }

    /// Load from environment variable
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR)
            .map(|s| Self::from_str_or_default(&s))
            .unwrap_or_default()
    }

    /// Providers to try, primary first
    #[must_use]
    pub const fn provider_order(&self) -> [Self; 3] {
        match self {
            Self::Ollama => [Self::Ollama, Self::Gemini, Self::OpenRouter],
            Self::Gemini => [Self::Gemini, Self::Ollama, Self::OpenRouter],
            Self::OpenRouter => [Self::OpenRouter, Self::Gemini, Self::Ollama],
        }
    }

    /// Whether the provider is a hosted service that needs an API key
    #[must_use]
    pub const fn requires_api_key(&self) -> bool {
        !matches!(self, Self::Ollama)
    }
}

impl LlmProviderType {
    /// Stable provider identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::Gemini => "gemini",
            Self::OpenRouter => "openrouter",
        }
    }

    /// Human-readable provider name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ollama => "Ollama (Local)",
            Self::Gemini => "Google Gemini",
            Self::OpenRouter => "OpenRouter",
        }
    }
}

impl Display for LlmProviderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint settings for one provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// `OpenAI`-compatible base URL (without `/chat/completions`)
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// API key, `None` when unset or empty
    pub api_key: Option<String>,
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ProviderSettings {
    fn from_env(base_url: (&str, &str), model: (&str, &str), api_key: Option<&str>) -> Self {
        Self {
            base_url: env_var_or(base_url.0, base_url.1),
            model: env_var_or(model.0, model.1),
            api_key: api_key.and_then(|key| env::var(key).ok().filter(|k| !k.is_empty())),
        }
    }
}

/// Default Ollama `OpenAI`-compatible endpoint
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";
/// Default Ollama model
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";
/// Default Gemini `OpenAI`-compatible endpoint
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
/// Default `OpenRouter` endpoint
pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Default `OpenRouter` model
pub const DEFAULT_OPENROUTER_MODEL: &str = "deepseek/deepseek-chat";

/// Settings for every narrative backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Provider tried first
    pub primary: LlmProviderType,
    /// Local Ollama server
    pub ollama: ProviderSettings,
    /// Google Gemini
    pub gemini: ProviderSettings,
    /// `OpenRouter`
    pub openrouter: ProviderSettings,
}

impl LlmConfig {
    /// Load provider settings from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            primary: LlmProviderType::from_env(),
            ollama: ProviderSettings::from_env(
                ("OLLAMA_BASE_URL", DEFAULT_OLLAMA_BASE_URL),
                ("OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
                None,
            ),
            gemini: ProviderSettings::from_env(
                ("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
                ("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                Some("GEMINI_API_KEY"),
            ),
            openrouter: ProviderSettings::from_env(
                ("OPENROUTER_BASE_URL", DEFAULT_OPENROUTER_BASE_URL),
                ("OPENROUTER_MODEL", DEFAULT_OPENROUTER_MODEL),
                Some("OPENROUTER_API_KEY"),
            ),
        }
    }

    /// Settings for one provider
    #[must_use]
    pub const fn settings(&self, provider: LlmProviderType) -> &ProviderSettings {
        match provider {
            LlmProviderType::Ollama => &self.ollama,
            LlmProviderType::Gemini => &self.gemini,
            LlmProviderType::OpenRouter => &self.openrouter,
        }
    }

    /// Whether a provider has everything it needs to be called
    #[must_use]
    pub const fn is_configured(&self, provider: LlmProviderType) -> bool {
        !provider.requires_api_key() || self.settings(provider).api_key.is_some()
    }
}

/// Limits applied to the personalized plan request
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeConfig {
    /// Bounded wait for the narrative backend
    pub timeout: Duration,
    /// Target length passed to the backend
    pub max_words: u32,
    /// Completion token cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl NarrativeConfig {
    /// Default bounded wait in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
    /// Default target length
    pub const DEFAULT_MAX_WORDS: u32 = 200;
    /// Default completion token cap
    pub const DEFAULT_MAX_TOKENS: u32 = 300;
    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Load narrative limits from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is set but unparseable, or
    /// the timeout is zero.
    pub fn from_env() -> AppResult<Self> {
        let timeout_secs: u64 = parse_env("NARRATIVE_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AppError::config(
                "NARRATIVE_TIMEOUT_SECS must be greater than zero",
            ));
        }

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            max_words: parse_env("NARRATIVE_MAX_WORDS", Self::DEFAULT_MAX_WORDS)?,
            max_tokens: parse_env("NARRATIVE_MAX_TOKENS", Self::DEFAULT_MAX_TOKENS)?,
            temperature: parse_env("NARRATIVE_TEMPERATURE", Self::DEFAULT_TEMPERATURE)?,
        })
    }
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            max_words: Self::DEFAULT_MAX_WORDS,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HealthRiskConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Narrative backend providers
    pub llm: LlmConfig,
    /// Narrative request limits
    pub narrative: NarrativeConfig,
}

impl HealthRiskConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any numeric variable is invalid.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_env(),
            llm: LlmConfig::from_env(),
            narrative: NarrativeConfig::from_env()?,
        };

        config.warn_unconfigured_providers();
        info!("Configuration loaded successfully");
        Ok(config)
    }

    fn warn_unconfigured_providers(&self) {
        for provider in self.llm.primary.provider_order() {
            if !self.llm.is_configured(provider) {
                warn!(%provider, "Provider has no API key and will be skipped");
            }
        }
    }

    /// Configuration summary for logging, without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        let order = self
            .llm
            .primary
            .provider_order()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");

        format!(
            "Pierre Health Risk Configuration:\n\
             - Environment: {}\n\
             - Provider order: {order}\n\
             - Narrative timeout: {}s\n\
             - Narrative length: {} words / {} tokens",
            self.environment,
            self.narrative.timeout.as_secs(),
            self.narrative.max_words,
            self.narrative.max_tokens,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        _ => Ok(default),
    }
}
