// ABOUTME: Ordered fallback across the configured narrative backends
// ABOUTME: Skips hosted providers without API keys and tries the rest until one answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Provider Fallback
//!
//! The primary provider from `PRIMARY_LLM_PROVIDER` is tried first, then the
//! remaining ones in [`LlmProviderType::provider_order`]. A failure on one
//! backend is logged and the next backend is tried.

use async_trait::async_trait;
use pierre_health_core::errors::AppError;
use tracing::{debug, info, warn};

use super::{
    ChatRequest, ChatResponse, LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider,
};
use crate::config::LlmConfig;

/// Chat provider that tries each backend in order
pub struct FallbackChatProvider {
    providers: Vec<Box<dyn LlmProvider>>,
}

impl FallbackChatProvider {
    /// Build the provider chain from configuration
    ///
    /// Hosted providers without an API key are left out of the chain.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no provider is usable, or if an HTTP
    /// client cannot be created.
    pub fn from_config(config: &LlmConfig) -> Result<Self, AppError> {
        let mut providers: Vec<Box<dyn LlmProvider>> = Vec::new();

        for provider_type in config.primary.provider_order() {
            if !config.is_configured(provider_type) {
                debug!(provider = %provider_type, "Skipping provider without API key");
                continue;
            }
            let provider_config =
                OpenAiCompatibleConfig::for_provider(provider_type, config.settings(provider_type));
            providers.push(Box::new(OpenAiCompatibleProvider::new(provider_config)?));
        }

        let chain = Self::with_providers(providers)?;
        info!(
            "Narrative providers: {}",
            chain
                .providers()
                .map(LlmProvider::display_name)
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        Ok(chain)
    }

    /// Build a chain from explicit providers, tried in the given order
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `providers` is empty.
    pub fn with_providers(providers: Vec<Box<dyn LlmProvider>>) -> Result<Self, AppError> {
        if providers.is_empty() {
            return Err(AppError::config("No narrative provider is configured"));
        }
        Ok(Self { providers })
    }

    /// Providers in the order they are tried
    pub fn providers(&self) -> impl Iterator<Item = &dyn LlmProvider> {
        self.providers.iter().map(|provider| &**provider)
    }
}

#[async_trait]
impl LlmProvider for FallbackChatProvider {
    fn name(&self) -> &'static str {
        self.providers.first().map_or("fallback", |p| p.name())
    }

    fn display_name(&self) -> &'static str {
        self.providers.first().map_or("Fallback", |p| p.display_name())
    }

    fn default_model(&self) -> &str {
        self.providers.first().map_or("", |p| p.default_model())
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let mut failures = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            // A model override only makes sense for the provider it names
            let attempt = ChatRequest {
                model: None,
                ..request.clone()
            };
            match provider.complete(&attempt).await {
                Ok(response) => {
                    info!(provider = provider.name(), model = %response.model, "Narrative generated");
                    return Ok(response);
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "Provider failed, trying next");
                    failures.push(format!("{}: {}", provider.name(), e.message));
                }
            }
        }

        Err(AppError::external_unavailable(
            "narrative",
            format!("All providers failed ({})", failures.join("; ")),
        ))
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        for provider in &self.providers {
            if matches!(provider.health_check().await, Ok(true)) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
