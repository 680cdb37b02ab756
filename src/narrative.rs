// ABOUTME: Narrative adapter that turns scored results into a personalized plan paragraph
// ABOUTME: Renders the patient summary and asks an LLM provider for free text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Narrative Adapter
//!
//! The narrative is the only non-deterministic part of an assessment. It is
//! produced from a plain-text summary of the already computed scores, so a
//! backend never sees anything the report does not already contain.

use std::sync::Arc;

use async_trait::async_trait;
use pierre_health_core::errors::{AppError, AppResult};
use pierre_health_core::models::HealthProfile;
use pierre_risk_scoring::ClinicalScores;
use tracing::{debug, instrument};

use crate::config::NarrativeConfig;
use crate::llm::{preventive_medicine_prompt, ChatMessage, ChatRequest, LlmProvider};

/// Input for one narrative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeRequest {
    /// Structured patient summary
    pub summary: String,
    /// Target length of the paragraph
    pub max_words: u32,
}

/// Produces one free-text paragraph from a patient summary
#[async_trait]
pub trait NarrativeAdapter: Send + Sync {
    /// Generate the narrative
    ///
    /// # Errors
    ///
    /// Any backend failure. Callers substitute a fixed fallback text.
    async fn narrate(&self, request: &NarrativeRequest) -> AppResult<String>;
}

/// Narrative adapter backed by an [`LlmProvider`]
pub struct LlmNarrativeAdapter {
    provider: Arc<dyn LlmProvider>,
    max_tokens: u32,
    temperature: f32,
}

impl LlmNarrativeAdapter {
    /// Wrap a provider using the sampling limits from `config`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, config: &NarrativeConfig) -> Self {
        Self {
            provider,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    fn chat_request(&self, request: &NarrativeRequest) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(preventive_medicine_prompt(request.max_words)),
            ChatMessage::user(request.summary.as_str()),
        ])
        .with_temperature(self.temperature)
        .with_max_tokens(self.max_tokens)
    }
}

#[async_trait]
impl NarrativeAdapter for LlmNarrativeAdapter {
    #[instrument(skip_all, fields(provider = self.provider.name()))]
    async fn narrate(&self, request: &NarrativeRequest) -> AppResult<String> {
        let response = self.provider.complete(&self.chat_request(request)).await?;
        let plan = response.content.trim();
        if plan.is_empty() {
            return Err(AppError::external_service(
                self.provider.display_name(),
                "Narrative response was empty",
            ));
        }
        debug!(chars = plan.len(), "Narrative received");
        Ok(plan.to_owned())
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Render the patient summary sent to the narrative backend
#[must_use]
pub fn build_summary(profile: &HealthProfile, scores: &ClinicalScores) -> String {
    let (heart_level, heart_percentage) = scores.heart_disease_risk.as_ref().map_or_else(
        || ("Not calculated".to_owned(), "N/A".to_owned()),
        |heart| (heart.risk_level.to_string(), heart.percentage.to_string()),
    );

    format!(
        "Patient Profile:\n\
         - Age: {age}, Gender: {gender}\n\
         - BMI: {bmi:.1} ({category})\n\
         - Diabetes Risk: {diabetes_level} ({diabetes_percentage}% in 10 years)\n\
         - Heart Disease Risk: {heart_level} ({heart_percentage}% in 10 years)\n\
         - Overall Health Score: {score}/100\n\
         \n\
         Key Risk Factors:\n\
         - Smoking: {smoking}\n\
         - Physical Activity: {activity}\n\
         - Family diabetes history: {family}\n",
        age = profile.age,
        gender = profile.gender,
        bmi = scores.bmi.value,
        category = scores.bmi.category.label(),
        diabetes_level = scores.diabetes_risk.risk_level,
        diabetes_percentage = scores.diabetes_risk.percentage,
        score = scores.overall_health_score,
        smoking = yes_no(profile.currently_smoking),
        activity = profile.physical_activity,
        family = yes_no(profile.family_diabetes),
    )
}
