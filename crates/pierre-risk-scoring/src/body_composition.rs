// ABOUTME: Body composition metrics: BMI and waist-to-hip ratio classification
// ABOUTME: WHO BMI bands and gender-specific waist-to-hip ratio risk tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Calculator
//!
//! # Scientific References
//!
//! - World Health Organization (2000). Obesity: preventing and managing the
//!   global epidemic. WHO Technical Report Series 894.
//! - World Health Organization (2008). Waist circumference and waist-hip
//!   ratio: report of a WHO expert consultation.

use pierre_health_core::models::Gender;
use serde::Serialize;
use tracing::debug;

use crate::tiers::Tiered;

/// Healthy BMI range reported with every result
pub const HEALTHY_BMI_RANGE: &str = "18.5 - 24.9";

/// WHO BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    #[serde(rename = "Underweight")]
    Underweight,
    /// BMI 18.5 to below 25
    #[serde(rename = "Normal weight")]
    NormalWeight,
    /// BMI 25 to below 30
    #[serde(rename = "Overweight")]
    Overweight,
    /// BMI 30 to below 35
    #[serde(rename = "Obese (Class I)")]
    ObeseClassI,
    /// BMI 35 to below 40
    #[serde(rename = "Obese (Class II)")]
    ObeseClassII,
    /// BMI 40 and above
    #[serde(rename = "Obese (Class III)")]
    ObeseClassIII,
}

impl BmiCategory {
    /// Category label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese (Class I)",
            Self::ObeseClassII => "Obese (Class II)",
            Self::ObeseClassIII => "Obese (Class III)",
        }
    }

    /// Qualitative health risk for the category
    #[must_use]
    pub const fn risk(&self) -> &'static str {
        match self {
            Self::Underweight => "Increased health risks",
            Self::NormalWeight => "Minimal health risk",
            Self::Overweight => "Increased risk of cardiovascular disease, diabetes",
            Self::ObeseClassI => "Moderate health risk",
            Self::ObeseClassII => "High health risk",
            Self::ObeseClassIII => "Very high health risk",
        }
    }

    /// Display color (hex)
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Underweight => "#3b82f6",
            Self::NormalWeight => "#10b981",
            Self::Overweight => "#f59e0b",
            Self::ObeseClassI => "#ea580c",
            Self::ObeseClassII => "#dc2626",
            Self::ObeseClassIII => "#991b1b",
        }
    }
}

const BMI_BANDS: Tiered<f64, BmiCategory> = Tiered::new(
    &[
        (18.5, BmiCategory::Underweight),
        (25.0, BmiCategory::NormalWeight),
        (30.0, BmiCategory::Overweight),
        (35.0, BmiCategory::ObeseClassI),
        (40.0, BmiCategory::ObeseClassII),
    ],
    BmiCategory::ObeseClassIII,
);

/// Waist-to-hip ratio risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WaistHipRisk {
    /// Below the moderate threshold
    #[serde(rename = "Low risk")]
    Low,
    /// Between the moderate and high thresholds
    #[serde(rename = "Moderate risk")]
    Moderate,
    /// At or above the high threshold
    #[serde(rename = "High risk - metabolic syndrome")]
    High,
}

impl WaistHipRisk {
    /// Tier label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Moderate => "Moderate risk",
            Self::High => "High risk - metabolic syndrome",
        }
    }

    /// Display color (hex)
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Low => "#10b981",
            Self::Moderate => "#f59e0b",
            Self::High => "#dc2626",
        }
    }
}

const MALE_WAIST_HIP: Tiered<f64, WaistHipRisk> = Tiered::new(
    &[(0.90, WaistHipRisk::Low), (1.0, WaistHipRisk::Moderate)],
    WaistHipRisk::High,
);

const FEMALE_WAIST_HIP: Tiered<f64, WaistHipRisk> = Tiered::new(
    &[(0.80, WaistHipRisk::Low), (0.85, WaistHipRisk::Moderate)],
    WaistHipRisk::High,
);

fn waist_hip_table(gender: Gender) -> &'static Tiered<f64, WaistHipRisk> {
    match gender {
        Gender::Male => &MALE_WAIST_HIP,
        Gender::Female => &FEMALE_WAIST_HIP,
    }
}

/// Waist-to-hip ratio result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaistHipResult {
    /// Ratio rounded to 2 decimals
    pub value: f64,
    /// Risk tier
    pub risk: WaistHipRisk,
    /// Display color
    pub color: &'static str,
}

/// BMI result with optional waist-to-hip ratio
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    /// BMI rounded to 1 decimal
    pub value: f64,
    /// WHO category
    pub category: BmiCategory,
    /// Qualitative risk phrase
    pub risk: &'static str,
    /// Display color
    pub color: &'static str,
    /// Healthy BMI range
    pub healthy_range: &'static str,
    /// Present only when both waist and hip were supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_hip_ratio: Option<WaistHipResult>,
}

/// Round to a fixed number of decimal places
///
/// Rounds the exact binary value and breaks exact ties to even, so a BMI of
/// 24.95 (stored just below) reports as 24.9 and 22.25 reports as 22.2.
#[must_use]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Unrounded BMI: `weight_kg / (height_cm / 100)^2`
///
/// Every scorer that depends on BMI calls this, so all of them see the same
/// value.
#[must_use]
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// WHO category for an unrounded BMI
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BMI_BANDS.lookup(bmi)
}

/// Calculate BMI and classify it according to WHO bands
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> BmiResult {
    let bmi = body_mass_index(height_cm, weight_kg);
    let category = classify_bmi(bmi);

    BmiResult {
        value: round_to(bmi, 1),
        category,
        risk: category.risk(),
        color: category.color(),
        healthy_range: HEALTHY_BMI_RANGE,
        waist_hip_ratio: None,
    }
}

/// Calculate the waist-to-hip ratio and its gender-specific risk tier
#[must_use]
pub fn calculate_waist_to_hip_ratio(waist_cm: f64, hip_cm: f64, gender: Gender) -> WaistHipResult {
    let ratio = waist_cm / hip_cm;
    let risk = waist_hip_table(gender).lookup(ratio);

    WaistHipResult {
        value: round_to(ratio, 2),
        risk,
        color: risk.color(),
    }
}

/// BMI result with the waist-to-hip ratio attached when both circumferences exist
#[must_use]
pub fn calculate_body_composition(
    height_cm: f64,
    weight_kg: f64,
    gender: Gender,
    waist_cm: Option<f64>,
    hip_cm: Option<f64>,
) -> BmiResult {
    let mut result = calculate_bmi(height_cm, weight_kg);
    if let (Some(waist), Some(hip)) = (waist_cm, hip_cm) {
        result.waist_hip_ratio = Some(calculate_waist_to_hip_ratio(waist, hip, gender));
    }

    debug!(
        bmi = result.value,
        category = result.category.label(),
        waist_hip = ?result.waist_hip_ratio.as_ref().map(|whr| whr.value),
        "Body composition calculated"
    );

    result
}
