// ABOUTME: FINDRISC (Finnish Diabetes Risk Score) 10-year type 2 diabetes risk
// ABOUTME: Point tables for age, BMI, waist, lifestyle, and history with five risk tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diabetes Risk Scorer
//!
//! Implements the Finnish Diabetes Risk Score questionnaire. The raw score
//! ranges from 0 to 26 and maps onto five risk tiers with fixed 10-year
//! probability anchors.
//!
//! # Scientific References
//!
//! - Lindström, J. & Tuomilehto, J. (2003). The Diabetes Risk Score: a
//!   practical tool to predict type 2 diabetes risk. *Diabetes Care*, 26(3),
//!   725-731. <https://doi.org/10.2337/diacare.26.3.725>

use pierre_health_core::models::{Gender, HealthProfile, PhysicalActivity};
use tracing::debug;

use crate::body_composition::body_mass_index;
use crate::risk_score::{RiskLevel, RiskScore};
use crate::rules::{collect_advice, Rule};
use crate::tiers::Tiered;

/// Maximum attainable FINDRISC score
pub const MAX_SCORE: i32 = 26;

/// Score at which laboratory screening is advised
pub const SCREENING_THRESHOLD: i32 = 12;

const AGE_POINTS: Tiered<u32, i32> = Tiered::new(&[(45, 0), (54, 2), (64, 3)], 4);

const BMI_POINTS: Tiered<f64, i32> = Tiered::new(&[(25.0, 0), (30.0, 1)], 3);

const INSUFFICIENT_ACTIVITY_POINTS: i32 = 2;
const NO_DAILY_VEGETABLES_POINTS: i32 = 1;
const BP_MEDICATION_POINTS: i32 = 2;
const HIGH_GLUCOSE_HISTORY_POINTS: i32 = 5;
const FAMILY_HISTORY_POINTS: i32 = 5;

/// Gender-specific waist circumference table
struct WaistTable {
    points: Tiered<f64, i32>,
    /// Waist at which the top tier starts and reduction advice is given
    reduction_threshold_cm: f64,
}

const MALE_WAIST: WaistTable = WaistTable {
    points: Tiered::new(&[(94.0, 0), (102.0, 3)], 4),
    reduction_threshold_cm: 102.0,
};

const FEMALE_WAIST: WaistTable = WaistTable {
    points: Tiered::new(&[(80.0, 0), (88.0, 3)], 4),
    reduction_threshold_cm: 88.0,
};

fn waist_table(gender: Gender) -> &'static WaistTable {
    match gender {
        Gender::Male => &MALE_WAIST,
        Gender::Female => &FEMALE_WAIST,
    }
}

const RISK_TIERS: Tiered<i32, (RiskLevel, u8)> = Tiered::new(
    &[
        (7, (RiskLevel::Low, 1)),
        (12, (RiskLevel::SlightlyElevated, 4)),
        (15, (RiskLevel::Moderate, 17)),
        (20, (RiskLevel::High, 33)),
    ],
    (RiskLevel::VeryHigh, 50),
);

/// Points contributed by each FINDRISC factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindriscPoints {
    /// Age band
    pub age: i32,
    /// BMI band
    pub bmi: i32,
    /// Waist band, 0 when waist was not measured
    pub waist: i32,
    /// Less than high physical activity
    pub physical_activity: i32,
    /// No daily vegetables or fruit
    pub diet: i32,
    /// Antihypertensive medication
    pub blood_pressure_medication: i32,
    /// History of high blood glucose
    pub high_glucose_history: i32,
    /// Family history of diabetes
    pub family_history: i32,
}

impl FindriscPoints {
    /// Sum of all factors
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.age
            + self.bmi
            + self.waist
            + self.physical_activity
            + self.diet
            + self.blood_pressure_medication
            + self.high_glucose_history
            + self.family_history
    }
}

/// Score each FINDRISC factor for a profile
#[must_use]
pub fn score_factors(profile: &HealthProfile) -> FindriscPoints {
    let bmi = body_mass_index(profile.height_cm, profile.weight_kg);
    let flag = |present: bool, points: i32| if present { points } else { 0 };

    FindriscPoints {
        age: AGE_POINTS.lookup(profile.age),
        bmi: BMI_POINTS.lookup(bmi),
        waist: profile
            .waist_cm
            .map_or(0, |waist| waist_table(profile.gender).points.lookup(waist)),
        physical_activity: flag(
            profile.physical_activity != PhysicalActivity::High,
            INSUFFICIENT_ACTIVITY_POINTS,
        ),
        diet: flag(!profile.daily_vegetables, NO_DAILY_VEGETABLES_POINTS),
        blood_pressure_medication: flag(profile.blood_pressure_medication, BP_MEDICATION_POINTS),
        high_glucose_history: flag(
            profile.high_blood_glucose_history,
            HIGH_GLUCOSE_HISTORY_POINTS,
        ),
        family_history: flag(profile.family_diabetes, FAMILY_HISTORY_POINTS),
    }
}

/// Risk tier and 10-year percentage for a FINDRISC score
#[must_use]
pub fn risk_tier(score: i32) -> (RiskLevel, u8) {
    RISK_TIERS.lookup(score)
}

/// Inputs the recommendation rules look at
struct DiabetesFactors {
    score: i32,
    bmi: f64,
    activity: PhysicalActivity,
    daily_vegetables: bool,
    waist_above_threshold: bool,
}

fn needs_screening(factors: &DiabetesFactors) -> bool {
    factors.score >= SCREENING_THRESHOLD
}

fn is_overweight(factors: &DiabetesFactors) -> bool {
    factors.bmi >= 25.0
}

fn is_inactive(factors: &DiabetesFactors) -> bool {
    factors.activity == PhysicalActivity::Low
}

fn lacks_vegetables(factors: &DiabetesFactors) -> bool {
    !factors.daily_vegetables
}

fn has_large_waist(factors: &DiabetesFactors) -> bool {
    factors.waist_above_threshold
}

const RECOMMENDATIONS: &[Rule<DiabetesFactors>] = &[
    Rule::fixed(
        needs_screening,
        "Consult your doctor for diabetes screening (HbA1c or fasting glucose test)",
    ),
    Rule::fixed(
        is_overweight,
        "Weight loss of 5-10% can reduce diabetes risk by 50%",
    ),
    Rule::fixed(is_inactive, "Increase physical activity to 30+ minutes daily"),
    Rule::fixed(
        lacks_vegetables,
        "Include vegetables and fruits in your daily diet",
    ),
    Rule::fixed(
        has_large_waist,
        "Reduce waist circumference through diet and exercise",
    ),
];

const DEFAULT_RECOMMENDATION: &str = "Maintain healthy lifestyle habits";

/// Calculate the FINDRISC 10-year diabetes risk for a profile
#[must_use]
pub fn calculate_diabetes_risk(profile: &HealthProfile) -> RiskScore {
    let points = score_factors(profile);
    let score = points.total();
    let (risk_level, percentage) = risk_tier(score);

    let factors = DiabetesFactors {
        score,
        bmi: body_mass_index(profile.height_cm, profile.weight_kg),
        activity: profile.physical_activity,
        daily_vegetables: profile.daily_vegetables,
        waist_above_threshold: profile
            .waist_cm
            .is_some_and(|waist| waist >= waist_table(profile.gender).reduction_threshold_cm),
    };
    let recommendations = collect_advice(RECOMMENDATIONS, &factors, DEFAULT_RECOMMENDATION);

    debug!(?points, score, %risk_level, percentage, "FINDRISC score calculated");

    RiskScore::new(
        score,
        risk_level,
        percentage,
        format!(
            "Your FINDRISC score is {score}/{MAX_SCORE}. This indicates a {percentage}% chance of developing type 2 diabetes within 10 years."
        ),
        recommendations,
    )
}
