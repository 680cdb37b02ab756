// ABOUTME: OpenAI-compatible chat completions client for Ollama, Gemini, and OpenRouter
// ABOUTME: Maps HTTP status codes onto structured errors and parses choice content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! All three narrative backends speak the `/chat/completions` protocol:
//!
//! - **Ollama**: <http://localhost:11434/v1>
//! - **Gemini**: <https://generativelanguage.googleapis.com/v1beta/openai>
//! - **`OpenRouter`**: <https://openrouter.ai/api/v1>
//!
//! `OpenRouter` additionally receives `HTTP-Referer` and `X-Title` attribution
//! headers.

use async_trait::async_trait;
use pierre_health_core::errors::{AppError, ErrorCode};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::config::{LlmProviderType, ProviderSettings};

/// Connection timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Whole-request timeout, independent of the narrative wait
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Attribution headers sent to `OpenRouter`
const OPENROUTER_REFERER: &str = "http://localhost:5173";
const OPENROUTER_TITLE: &str = "Pierre Health Risk";

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for OpenAiMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Which backend this endpoint belongs to
    pub provider: LlmProviderType,
    /// Base URL for the API
    pub base_url: String,
    /// Bearer token, `None` for local servers
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Extra headers sent with every request
    pub extra_headers: Vec<(&'static str, &'static str)>,
}

impl OpenAiCompatibleConfig {
    /// Configuration for a backend from its loaded settings
    #[must_use]
    pub fn for_provider(provider: LlmProviderType, settings: &ProviderSettings) -> Self {
        let extra_headers = match provider {
            LlmProviderType::OpenRouter => vec![
                ("HTTP-Referer", OPENROUTER_REFERER),
                ("X-Title", OPENROUTER_TITLE),
            ],
            LlmProviderType::Ollama | LlmProviderType::Gemini => Vec::new(),
        };

        Self {
            provider,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            default_model: settings.model.clone(),
            extra_headers,
        }
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Chat completions client for any `OpenAI`-compatible endpoint
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Provider configuration
    #[must_use]
    pub const fn config(&self) -> &OpenAiCompatibleConfig {
        &self.config
    }

    fn api_url(&self, endpoint: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}/{endpoint}")
    }

    fn service(&self) -> &'static str {
        self.config.provider.display_name()
    }

    fn decorate(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }
        for (name, value) in &self.config.extra_headers {
            request = request.header(*name, *value);
        }
        request
    }

    fn send_error(&self, e: &reqwest::Error) -> AppError {
        error!(provider = self.config.provider.as_str(), "Request failed: {e}");
        if e.is_connect() {
            AppError::external_unavailable(
                self.service(),
                format!(
                    "Cannot connect to {}. Is the server running at {}?",
                    self.service(),
                    self.config.base_url
                ),
            )
        } else if e.is_timeout() {
            AppError::external_unavailable(self.service(), "Request timed out")
        } else {
            AppError::external_service(self.service(), format!("Failed to connect: {e}"))
        }
    }

    /// Map a non-success HTTP response onto a structured error
    fn parse_error_response(&self, status: StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<OpenAiErrorResponse>(body).map_or_else(
            |_| body.chars().take(200).collect::<String>(),
            |parsed| parsed.error.message,
        );

        match status.as_u16() {
            401 | 403 => AppError::auth_invalid(format!(
                "{} rejected the API key: {detail}",
                self.service()
            )),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                format!("{} rate limit reached: {detail}", self.service()),
            ),
            500..=599 => AppError::external_unavailable(
                self.service(),
                format!("Service unavailable ({status}): {detail}"),
            ),
            _ => AppError::external_service(
                self.service(),
                format!("API error ({status}): {detail}"),
            ),
        }
    }

    fn parse_completion(&self, body: &str, requested_model: &str) -> Result<ChatResponse, AppError> {
        let response: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
            error!("Failed to parse API response: {e}");
            AppError::external_service(self.service(), format!("Failed to parse response: {e}"))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(self.service(), "API returned no choices"))?;

        Ok(ChatResponse {
            content: choice.message.content.unwrap_or_default(),
            model: response
                .model
                .unwrap_or_else(|| requested_model.to_owned()),
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        self.config.provider.as_str()
    }

    fn display_name(&self) -> &'static str {
        self.config.provider.display_name()
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(provider = self.name()))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model,
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        debug!(
            messages = openai_request.messages.len(),
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .decorate(http_request)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(self.service(), format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(self.parse_error_response(status, &body));
        }

        let completion = self.parse_completion(&body, model)?;
        debug!(
            chars = completion.content.len(),
            finish_reason = ?completion.finish_reason,
            "Received chat completion"
        );
        Ok(completion)
    }

    #[instrument(skip(self), fields(provider = self.name()))]
    async fn health_check(&self) -> Result<bool, AppError> {
        let response = self
            .decorate(self.client.get(self.api_url("models")))
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let healthy = response.status().is_success();
        if healthy {
            debug!("Health check passed");
        } else {
            warn!(status = %response.status(), "Health check failed");
        }
        Ok(healthy)
    }
}
