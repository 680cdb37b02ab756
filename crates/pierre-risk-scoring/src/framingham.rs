// ABOUTME: Framingham 10-year cardiovascular disease risk from gender-specific point tables
// ABOUTME: Scored only when total cholesterol, HDL, and systolic pressure are all present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cardiovascular Risk Scorer
//!
//! Point-based Framingham estimate of 10-year risk of a cardiovascular event
//! (heart attack or stroke). Men and women use sibling tables with the same
//! shape and different point values.
//!
//! # Scientific References
//!
//! - Wilson, P.W. et al. (1998). Prediction of coronary heart disease using
//!   risk factor categories. *Circulation*, 97(18), 1837-1847.
//!   <https://doi.org/10.1161/01.CIR.97.18.1837>
//! - D'Agostino, R.B. et al. (2008). General cardiovascular risk profile for
//!   use in primary care. *Circulation*, 117(6), 743-753.

use pierre_health_core::models::{Gender, HealthProfile};
use tracing::debug;

use crate::risk_score::{RiskLevel, RiskScore};
use crate::rules::{collect_advice, Rule};
use crate::tiers::{PointsToPercentage, Tiered};

/// Percentage reported for point totals below the lowest table key
pub const PERCENTAGE_FLOOR: u8 = 1;

/// Percentage reported for point totals above the highest table key
pub const PERCENTAGE_CEILING: u8 = 30;

/// Percentage at which the risk tier becomes Intermediate
pub const INTERMEDIATE_PERCENTAGE: u8 = 10;

/// Percentage at which the risk tier becomes High
pub const HIGH_PERCENTAGE: u8 = 20;

/// Point table for one gender
#[derive(Debug, Clone, Copy)]
pub struct FraminghamTable {
    age: Tiered<u32, i32>,
    total_cholesterol: Tiered<f64, i32>,
    hdl: Tiered<f64, i32>,
    /// `(untreated, treated)` points per systolic band
    systolic: Tiered<u32, (i32, i32)>,
    smoking: i32,
    diabetes: i32,
    percentages: PointsToPercentage,
}

// HDL is inverse-scaled and shared by both genders
const HDL_POINTS: Tiered<f64, i32> = Tiered::new(&[(40.0, 2), (50.0, 1), (60.0, 0)], -1);

impl FraminghamTable {
    /// Table for men
    pub const MALE: Self = Self {
        age: Tiered::new(
            &[
                (35, -9),
                (40, -4),
                (45, 0),
                (50, 3),
                (55, 6),
                (60, 8),
                (65, 10),
                (70, 11),
            ],
            12,
        ),
        total_cholesterol: Tiered::new(&[(160.0, 0), (200.0, 4), (240.0, 7), (280.0, 9)], 11),
        hdl: HDL_POINTS,
        systolic: Tiered::new(
            &[
                (120, (0, 0)),
                (130, (0, 1)),
                (140, (1, 2)),
                (160, (1, 2)),
            ],
            (2, 3),
        ),
        smoking: 4,
        diabetes: 2,
        percentages: PointsToPercentage::new(
            &[
                (-3, 1),
                (3, 2),
                (5, 3),
                (6, 4),
                (7, 5),
                (8, 6),
                (9, 8),
                (10, 10),
                (11, 12),
                (12, 16),
                (13, 20),
                (14, 25),
                (15, 30),
                (16, 30),
            ],
            PERCENTAGE_FLOOR,
            PERCENTAGE_CEILING,
        ),
    };

    /// Table for women
    pub const FEMALE: Self = Self {
        age: Tiered::new(
            &[
                (35, -7),
                (40, -3),
                (45, 0),
                (50, 3),
                (55, 6),
                (60, 8),
                (65, 10),
                (70, 12),
            ],
            14,
        ),
        total_cholesterol: Tiered::new(&[(160.0, 0), (200.0, 4), (240.0, 8), (280.0, 11)], 13),
        hdl: HDL_POINTS,
        systolic: Tiered::new(
            &[
                (120, (0, 0)),
                (130, (1, 3)),
                (140, (2, 4)),
                (160, (3, 5)),
            ],
            (4, 6),
        ),
        smoking: 3,
        diabetes: 3,
        percentages: PointsToPercentage::new(
            &[
                (-2, 1),
                (3, 2),
                (5, 3),
                (6, 4),
                (7, 5),
                (8, 6),
                (9, 8),
                (10, 11),
                (11, 14),
                (12, 17),
                (13, 22),
                (14, 27),
                (15, 30),
                (16, 30),
            ],
            PERCENTAGE_FLOOR,
            PERCENTAGE_CEILING,
        ),
    };

    /// Sibling table selected by gender
    #[must_use]
    pub const fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self::MALE,
            Gender::Female => Self::FEMALE,
        }
    }

    /// 10-year risk percentage for a point total
    #[must_use]
    pub fn percentage(&self, points: i32) -> u8 {
        self.percentages.percentage(points)
    }
}

/// Lab values the score requires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardiovascularLabs {
    /// Total cholesterol (mg/dL)
    pub total_cholesterol: f64,
    /// HDL cholesterol (mg/dL)
    pub hdl_cholesterol: f64,
    /// Systolic blood pressure (mmHg)
    pub systolic_bp: u32,
}

impl CardiovascularLabs {
    /// Labs from a profile, `None` unless all three values are present
    #[must_use]
    pub fn from_profile(profile: &HealthProfile) -> Option<Self> {
        Some(Self {
            total_cholesterol: profile.total_cholesterol?,
            hdl_cholesterol: profile.hdl_cholesterol?,
            systolic_bp: profile.systolic_bp?,
        })
    }
}

/// Signed points contributed by each Framingham factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FraminghamPoints {
    /// Age band
    pub age: i32,
    /// Total cholesterol band
    pub total_cholesterol: i32,
    /// HDL band (negative for protective HDL)
    pub hdl: i32,
    /// Systolic band, treated or untreated column
    pub systolic_bp: i32,
    /// Current smoker
    pub smoking: i32,
    /// Diabetic
    pub diabetes: i32,
}

impl FraminghamPoints {
    /// Signed point total
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.age + self.total_cholesterol + self.hdl + self.systolic_bp + self.smoking + self.diabetes
    }
}

/// Score each Framingham factor from a profile and its labs
#[must_use]
pub fn score_factors(profile: &HealthProfile, labs: &CardiovascularLabs) -> FraminghamPoints {
    let table = FraminghamTable::for_gender(profile.gender);
    let (untreated, treated) = table.systolic.lookup(labs.systolic_bp);

    FraminghamPoints {
        age: table.age.lookup(profile.age),
        total_cholesterol: table.total_cholesterol.lookup(labs.total_cholesterol),
        hdl: table.hdl.lookup(labs.hdl_cholesterol),
        systolic_bp: if profile.on_bp_medication {
            treated
        } else {
            untreated
        },
        smoking: if profile.currently_smoking {
            table.smoking
        } else {
            0
        },
        diabetes: if profile.has_diabetes {
            table.diabetes
        } else {
            0
        },
    }
}

/// Risk tier for a 10-year percentage
#[must_use]
pub const fn risk_level_for(percentage: u8) -> RiskLevel {
    if percentage >= HIGH_PERCENTAGE {
        RiskLevel::High
    } else if percentage >= INTERMEDIATE_PERCENTAGE {
        RiskLevel::Intermediate
    } else {
        RiskLevel::Low
    }
}

struct HeartFactors {
    labs: CardiovascularLabs,
    smoker: bool,
    diabetic: bool,
    percentage: u8,
}

fn high_cholesterol(factors: &HeartFactors) -> bool {
    factors.labs.total_cholesterol >= 200.0
}

fn low_hdl(factors: &HeartFactors) -> bool {
    factors.labs.hdl_cholesterol < 40.0
}

fn hypertensive(factors: &HeartFactors) -> bool {
    factors.labs.systolic_bp >= 140
}

fn smokes(factors: &HeartFactors) -> bool {
    factors.smoker
}

fn diabetic(factors: &HeartFactors) -> bool {
    factors.diabetic
}

fn high_risk(factors: &HeartFactors) -> bool {
    factors.percentage >= HIGH_PERCENTAGE
}

fn intermediate_risk(factors: &HeartFactors) -> bool {
    (INTERMEDIATE_PERCENTAGE..HIGH_PERCENTAGE).contains(&factors.percentage)
}

const RECOMMENDATIONS: &[Rule<HeartFactors>] = &[
    Rule::fixed(
        high_cholesterol,
        "Discuss cholesterol management with your doctor (target: <200 mg/dL)",
    ),
    Rule::fixed(
        low_hdl,
        "Increase HDL cholesterol through exercise and healthy fats",
    ),
    Rule::fixed(
        hypertensive,
        "Blood pressure control is critical - consult your doctor",
    ),
    Rule::fixed(
        smokes,
        "Smoking cessation can reduce your heart disease risk by 50%",
    ),
    Rule::fixed(
        diabetic,
        "Tight diabetes control reduces cardiovascular complications",
    ),
    Rule::fixed(
        high_risk,
        "HIGH RISK: Consult cardiologist for preventive medication (statins, aspirin)",
    ),
    Rule::fixed(
        intermediate_risk,
        "Consider lifestyle modifications and regular cardiac checkups",
    ),
];

const DEFAULT_RECOMMENDATION: &str = "Continue heart-healthy lifestyle";

/// Calculate the Framingham 10-year cardiovascular risk
///
/// Returns `None` unless total cholesterol, HDL cholesterol, and systolic
/// pressure are all present. A missing lab value means the score is omitted,
/// never reported as zero.
#[must_use]
pub fn calculate_cardiovascular_risk(profile: &HealthProfile) -> Option<RiskScore> {
    let Some(labs) = CardiovascularLabs::from_profile(profile) else {
        debug!("Framingham score skipped: lab values incomplete");
        return None;
    };

    let points = score_factors(profile, &labs);
    let score = points.total();
    let percentage = FraminghamTable::for_gender(profile.gender).percentage(score);
    let risk_level = risk_level_for(percentage);

    let factors = HeartFactors {
        labs,
        smoker: profile.currently_smoking,
        diabetic: profile.has_diabetes,
        percentage,
    };
    let recommendations = collect_advice(RECOMMENDATIONS, &factors, DEFAULT_RECOMMENDATION);

    debug!(?points, score, %risk_level, percentage, "Framingham score calculated");

    Some(RiskScore::new(
        score,
        risk_level,
        percentage,
        format!(
            "Your Framingham score indicates a {percentage}% risk of cardiovascular disease (heart attack or stroke) within 10 years."
        ),
        recommendations,
    ))
}
