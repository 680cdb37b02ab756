// ABOUTME: Tests for environment-driven configuration of the narrative backends
// ABOUTME: Validates provider selection, defaults, API key handling, and limit parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_health_risk::config::environment::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_OLLAMA_BASE_URL, DEFAULT_OPENROUTER_MODEL,
};
use pierre_health_risk::config::{
    Environment, HealthRiskConfig, LlmConfig, LlmProviderType, NarrativeConfig,
};
use pierre_health_risk::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "ENVIRONMENT",
    "PRIMARY_LLM_PROVIDER",
    "OLLAMA_BASE_URL",
    "OLLAMA_MODEL",
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GEMINI_BASE_URL",
    "OPENROUTER_API_KEY",
    "OPENROUTER_MODEL",
    "OPENROUTER_BASE_URL",
    "NARRATIVE_TIMEOUT_SECS",
    "NARRATIVE_MAX_WORDS",
    "NARRATIVE_MAX_TOKENS",
    "NARRATIVE_TEMPERATURE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = HealthRiskConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.llm.primary, LlmProviderType::Ollama);
    assert_eq!(config.llm.ollama.base_url, DEFAULT_OLLAMA_BASE_URL);
    assert_eq!(config.llm.gemini.base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(config.llm.openrouter.model, DEFAULT_OPENROUTER_MODEL);
    assert_eq!(config.narrative, NarrativeConfig::default());
    assert_eq!(config.narrative.timeout, Duration::from_secs(15));

    assert!(config.llm.is_configured(LlmProviderType::Ollama));
    assert!(!config.llm.is_configured(LlmProviderType::Gemini));
    assert!(!config.llm.is_configured(LlmProviderType::OpenRouter));
}

#[test]
#[serial]
fn test_provider_settings_from_environment() {
    clear_env();
    env::set_var("PRIMARY_LLM_PROVIDER", "OpenRouter");
    env::set_var("OPENROUTER_API_KEY", "sk-or-test");
    env::set_var("OPENROUTER_MODEL", "meta-llama/llama-3.1-8b-instruct");
    env::set_var("GEMINI_API_KEY", "");

    let config = LlmConfig::from_env();
    clear_env();

    assert_eq!(config.primary, LlmProviderType::OpenRouter);
    assert_eq!(config.openrouter.api_key.as_deref(), Some("sk-or-test"));
    assert_eq!(config.openrouter.model, "meta-llama/llama-3.1-8b-instruct");
    assert!(config.gemini.api_key.is_none());
    assert!(config.is_configured(LlmProviderType::OpenRouter));
}

#[test]
#[serial]
fn test_api_keys_are_redacted_in_debug_output() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "super-secret-key");
    let config = LlmConfig::from_env();
    clear_env();

    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("[REDACTED]"));
}

#[test]
#[serial]
fn test_narrative_limits_from_environment() {
    clear_env();
    env::set_var("NARRATIVE_TIMEOUT_SECS", "5");
    env::set_var("NARRATIVE_MAX_WORDS", "120");
    env::set_var("NARRATIVE_TEMPERATURE", "0.2");

    let narrative = NarrativeConfig::from_env().unwrap();
    clear_env();

    assert_eq!(narrative.timeout, Duration::from_secs(5));
    assert_eq!(narrative.max_words, 120);
    assert_eq!(narrative.max_tokens, NarrativeConfig::DEFAULT_MAX_TOKENS);
    assert!((narrative.temperature - 0.2).abs() < f32::EPSILON);
}

#[test]
#[serial]
fn test_invalid_narrative_limits_are_rejected() {
    clear_env();
    env::set_var("NARRATIVE_TIMEOUT_SECS", "0");
    let zero = NarrativeConfig::from_env().unwrap_err();
    assert_eq!(zero.code, ErrorCode::ConfigError);

    env::set_var("NARRATIVE_TIMEOUT_SECS", "soon");
    let garbage = NarrativeConfig::from_env().unwrap_err();
    assert!(garbage.message.contains("NARRATIVE_TIMEOUT_SECS"));
    clear_env();
}

#[test]
#[serial]
fn test_summary_lists_provider_order_without_secrets() {
    clear_env();
    env::set_var("PRIMARY_LLM_PROVIDER", "gemini");
    env::set_var("GEMINI_API_KEY", "secret");
    let config = HealthRiskConfig::from_env().unwrap();
    clear_env();

    let summary = config.summary();
    assert!(summary.contains("gemini -> ollama -> openrouter"));
    assert!(!summary.contains("secret"));
}
