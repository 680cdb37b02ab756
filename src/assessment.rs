// ABOUTME: Health assessment orchestrator combining deterministic scores with the narrative
// ABOUTME: Bounds the narrative wait and substitutes fixed text on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Assessment Service
//!
//! Scoring is pure and always completes. The narrative call is the only
//! suspension point: it gets one attempt bounded by the configured timeout,
//! and any error or timeout yields [`FALLBACK_PLAN`]. The report is returned
//! either way.

use std::sync::Arc;
use std::time::Duration;

use pierre_health_core::errors::AppResult;
use pierre_health_core::models::HealthProfile;
use pierre_risk_scoring::{score_profile, BmiResult, ClinicalScores, RiskScore, ScreeningSet};
use serde::Serialize;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use crate::config::NarrativeConfig;
use crate::narrative::{build_summary, NarrativeAdapter, NarrativeRequest};

/// Plan text used whenever the narrative backend is unavailable
pub const FALLBACK_PLAN: &str = "Focus on maintaining a healthy lifestyle with regular exercise, balanced nutrition, and preventive screenings.";

/// Complete assessment returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    /// BMI with optional waist-to-hip ratio
    pub bmi: BmiResult,
    /// FINDRISC diabetes risk
    pub diabetes_risk: RiskScore,
    /// Framingham cardiovascular risk, absent without complete labs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_disease_risk: Option<RiskScore>,
    /// Cancer screening recommendations
    pub cancer_screening: ScreeningSet,
    /// Composite 0-100 score
    pub overall_health_score: u8,
    /// Narrative plan or [`FALLBACK_PLAN`]
    pub personalized_plan: String,
    /// Ordered urgent actions
    pub priority_actions: Vec<String>,
}

impl AssessmentReport {
    fn from_scores(scores: ClinicalScores, personalized_plan: String) -> Self {
        Self {
            bmi: scores.bmi,
            diabetes_risk: scores.diabetes_risk,
            heart_disease_risk: scores.heart_disease_risk,
            cancer_screening: scores.cancer_screening,
            overall_health_score: scores.overall_health_score,
            personalized_plan,
            priority_actions: scores.priority_actions,
        }
    }

    /// Whether the plan came from the fallback text
    #[must_use]
    pub fn used_fallback_plan(&self) -> bool {
        self.personalized_plan == FALLBACK_PLAN
    }
}

/// Runs assessments
#[derive(Clone)]
pub struct HealthAssessmentService {
    narrator: Option<Arc<dyn NarrativeAdapter>>,
    timeout: Duration,
    max_words: u32,
}

impl HealthAssessmentService {
    /// Service that asks `narrator` for the personalized plan
    #[must_use]
    pub fn new(narrator: Arc<dyn NarrativeAdapter>, config: &NarrativeConfig) -> Self {
        Self {
            narrator: Some(narrator),
            timeout: config.timeout,
            max_words: config.max_words,
        }
    }

    /// Service that never contacts a narrative backend
    #[must_use]
    pub fn offline() -> Self {
        let config = NarrativeConfig::default();
        Self {
            narrator: None,
            timeout: config.timeout,
            max_words: config.max_words,
        }
    }

    /// Assess a profile
    ///
    /// Never fails. The profile is assumed valid; see [`Self::assess_validated`].
    #[instrument(skip_all, fields(age = profile.age, gender = %profile.gender))]
    pub async fn assess(&self, profile: &HealthProfile) -> AssessmentReport {
        let scores = score_profile(profile);
        let personalized_plan = self.personalized_plan(profile, &scores).await;

        info!(
            overall_health_score = scores.overall_health_score,
            diabetes_score = scores.diabetes_risk.score,
            cardiovascular = scores.heart_disease_risk.is_some(),
            "Assessment complete"
        );
        AssessmentReport::from_scores(scores, personalized_plan)
    }

    /// Validate the profile, then assess it
    ///
    /// # Errors
    ///
    /// Returns the validation error for implausible input.
    pub async fn assess_validated(&self, profile: &HealthProfile) -> AppResult<AssessmentReport> {
        profile.validate()?;
        Ok(self.assess(profile).await)
    }

    async fn personalized_plan(&self, profile: &HealthProfile, scores: &ClinicalScores) -> String {
        let Some(narrator) = &self.narrator else {
            return FALLBACK_PLAN.to_owned();
        };

        let request = NarrativeRequest {
            summary: build_summary(profile, scores),
            max_words: self.max_words,
        };

        match timeout(self.timeout, narrator.narrate(&request)).await {
            Ok(Ok(plan)) => plan,
            Ok(Err(e)) => {
                warn!(error = %e, "Narrative generation failed, using fallback plan");
                FALLBACK_PLAN.to_owned()
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Narrative generation timed out, using fallback plan"
                );
                FALLBACK_PLAN.to_owned()
            }
        }
    }
}
