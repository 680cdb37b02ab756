// ABOUTME: Ordered urgent action list derived from every scorer's output
// ABOUTME: Fixed-order rule table with a single "maintain healthy habits" fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_health_core::models::HealthProfile;

use crate::findrisc::SCREENING_THRESHOLD;
use crate::framingham::HIGH_PERCENTAGE;
use crate::risk_score::RiskScore;
use crate::rules::{collect_advice, Rule};
use crate::screening::ScreeningSet;

/// BMI (reported value) at which weight management becomes a priority
const OBESITY_BMI: f64 = 30.0;

/// Message used when no other action applies
pub const MAINTAIN_HEALTHY_HABITS: &str =
    "✅ MAINTAIN HEALTHY HABITS: Your risk profile is good - keep it up!";

/// Everything the prioritizer looks at
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    /// FINDRISC score
    pub diabetes_score: i32,
    /// Framingham percentage when calculated
    pub cardiovascular_percentage: Option<u8>,
    /// 1-decimal BMI from the report
    pub reported_bmi: f64,
    /// Current smoker
    pub smoker: bool,
    /// Number of `Recommended` screenings
    pub recommended_screenings: usize,
}

impl ActionContext {
    /// Gather the prioritizer inputs from scorer results
    #[must_use]
    pub fn new(
        profile: &HealthProfile,
        reported_bmi: f64,
        diabetes: &RiskScore,
        cardiovascular: Option<&RiskScore>,
        screening: &ScreeningSet,
    ) -> Self {
        Self {
            diabetes_score: diabetes.score,
            cardiovascular_percentage: cardiovascular.map(|heart| heart.percentage),
            reported_bmi,
            smoker: profile.currently_smoking,
            recommended_screenings: screening.total_recommended,
        }
    }
}

fn diabetes_screening_due(ctx: &ActionContext) -> bool {
    ctx.diabetes_score >= SCREENING_THRESHOLD
}

fn high_cardiovascular_risk(ctx: &ActionContext) -> bool {
    ctx.cardiovascular_percentage
        .is_some_and(|pct| pct >= HIGH_PERCENTAGE)
}

fn obese(ctx: &ActionContext) -> bool {
    ctx.reported_bmi >= OBESITY_BMI
}

fn smokes(ctx: &ActionContext) -> bool {
    ctx.smoker
}

fn screenings_due(ctx: &ActionContext) -> bool {
    ctx.recommended_screenings > 0
}

fn screenings_message(ctx: &ActionContext) -> String {
    format!(
        "📋 CANCER SCREENINGS: You're due for {} recommended screening(s)",
        ctx.recommended_screenings
    )
}

const ACTIONS: &[Rule<ActionContext>] = &[
    Rule::fixed(
        diabetes_screening_due,
        "🔴 GET DIABETES SCREENING: Your risk is elevated - test HbA1c or fasting glucose",
    ),
    Rule::fixed(
        high_cardiovascular_risk,
        "🔴 SEE CARDIOLOGIST: High cardiovascular risk - discuss preventive medications",
    ),
    Rule::fixed(
        obese,
        "⚠️ WEIGHT MANAGEMENT: Obesity increases multiple disease risks",
    ),
    Rule::fixed(
        smokes,
        "🚨 QUIT SMOKING: Single most important action to improve health",
    ),
    Rule::formatted(screenings_due, screenings_message),
];

/// Ordered priority actions, never empty
#[must_use]
pub fn priority_actions(ctx: &ActionContext) -> Vec<String> {
    collect_advice(ACTIONS, ctx, MAINTAIN_HEALTHY_HABITS)
}
