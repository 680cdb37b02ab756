// ABOUTME: Runs every scorer over one profile in dependency order
// ABOUTME: Body composition, diabetes, cardiovascular, screening, composite score, actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_health_core::models::HealthProfile;
use serde::Serialize;
use tracing::debug;

use crate::body_composition::{calculate_body_composition, BmiResult};
use crate::findrisc::calculate_diabetes_risk;
use crate::framingham::calculate_cardiovascular_risk;
use crate::health_score::overall_health_score;
use crate::priority_actions::{priority_actions, ActionContext};
use crate::risk_score::RiskScore;
use crate::screening::{cancer_screening, ScreeningSet};

/// Deterministic scoring results for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClinicalScores {
    /// BMI with optional waist-to-hip ratio
    pub bmi: BmiResult,
    /// FINDRISC result
    pub diabetes_risk: RiskScore,
    /// Framingham result, absent without complete labs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_disease_risk: Option<RiskScore>,
    /// Cancer screening set
    pub cancer_screening: ScreeningSet,
    /// Composite 0-100 score
    pub overall_health_score: u8,
    /// Ordered urgent actions, never empty
    pub priority_actions: Vec<String>,
}

/// Score a profile
///
/// Pure and synchronous. The profile is assumed to be validated already.
#[must_use]
pub fn score_profile(profile: &HealthProfile) -> ClinicalScores {
    let bmi = calculate_body_composition(
        profile.height_cm,
        profile.weight_kg,
        profile.gender,
        profile.waist_cm,
        profile.hip_cm,
    );
    let diabetes_risk = calculate_diabetes_risk(profile);
    let heart_disease_risk = calculate_cardiovascular_risk(profile);
    let cancer_screening = cancer_screening(profile.age, profile.gender);

    let overall_health_score =
        overall_health_score(profile, bmi.value, &diabetes_risk, heart_disease_risk.as_ref());

    let context = ActionContext::new(
        profile,
        bmi.value,
        &diabetes_risk,
        heart_disease_risk.as_ref(),
        &cancer_screening,
    );
    let priority_actions = priority_actions(&context);

    debug!(
        overall_health_score,
        actions = priority_actions.len(),
        cardiovascular = heart_disease_risk.is_some(),
        "Profile scored"
    );

    ClinicalScores {
        bmi,
        diabetes_risk,
        heart_disease_risk,
        cancer_screening,
        overall_health_score,
        priority_actions,
    }
}
