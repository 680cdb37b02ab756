// ABOUTME: Age and gender gated cancer screening recommendations (USPSTF grades)
// ABOUTME: Independent rules for colorectal, breast, cervical, lung, prostate, and skin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cancer Screening Advisor
//!
//! Every rule is evaluated independently, so a profile can match several
//! cancer types. The skin examination reminder is always present.
//!
//! # References
//!
//! - U.S. Preventive Services Task Force recommendation statements
//!   <https://www.uspreventiveservicestaskforce.org/uspstf/topic_search_results?topic_status=P>

use pierre_health_core::models::Gender;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly a screening is advised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreeningUrgency {
    /// Routine screening is due
    Recommended,
    /// Due only with a qualifying smoking history
    #[serde(rename = "Recommended for smokers")]
    RecommendedForSmokers,
    /// Individual decision with a doctor
    Optional,
    /// General reminder
    Consider,
}

impl ScreeningUrgency {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "Recommended",
            Self::RecommendedForSmokers => "Recommended for smokers",
            Self::Optional => "Optional",
            Self::Consider => "Consider",
        }
    }
}

impl fmt::Display for ScreeningUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One screening entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningRecommendation {
    /// Cancer the screening targets
    pub cancer_type: String,
    /// What to do and how often
    pub recommendation: String,
    /// Urgency tier
    pub urgency: ScreeningUrgency,
    /// Evidence grade
    pub evidence: String,
}

/// Ordered screening list with the number of `Recommended` entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningSet {
    /// Matching screenings in rule order
    pub screenings: Vec<ScreeningRecommendation>,
    /// Count of entries whose urgency is exactly `Recommended`
    pub total_recommended: usize,
}

impl ScreeningSet {
    fn from_screenings(screenings: Vec<ScreeningRecommendation>) -> Self {
        let total_recommended = screenings
            .iter()
            .filter(|s| s.urgency == ScreeningUrgency::Recommended)
            .count();
        Self {
            screenings,
            total_recommended,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Screening {
    cancer_type: &'static str,
    recommendation: &'static str,
    urgency: ScreeningUrgency,
    evidence: &'static str,
}

struct ScreeningRule {
    applies: fn(u32, Gender) -> bool,
    screening: Screening,
}

const GRADE_A: &str = "Grade A - USPSTF";
const GRADE_B: &str = "Grade B - USPSTF";
const GRADE_C: &str = "Grade C - USPSTF";

const fn rule(
    applies: fn(u32, Gender) -> bool,
    cancer_type: &'static str,
    recommendation: &'static str,
    urgency: ScreeningUrgency,
    evidence: &'static str,
) -> ScreeningRule {
    ScreeningRule {
        applies,
        screening: Screening {
            cancer_type,
            recommendation,
            urgency,
            evidence,
        },
    }
}

fn colorectal_routine(age: u32, _: Gender) -> bool {
    (45..=75).contains(&age)
}

fn colorectal_individual(age: u32, _: Gender) -> bool {
    age > 75
}

fn breast_optional(age: u32, gender: Gender) -> bool {
    gender == Gender::Female && (40..50).contains(&age)
}

fn breast_routine(age: u32, gender: Gender) -> bool {
    gender == Gender::Female && (50..=74).contains(&age)
}

fn cervical_pap(age: u32, gender: Gender) -> bool {
    gender == Gender::Female && (21..30).contains(&age)
}

fn cervical_cotest(age: u32, gender: Gender) -> bool {
    gender == Gender::Female && (30..=65).contains(&age)
}

fn lung(age: u32, _: Gender) -> bool {
    (50..=80).contains(&age)
}

fn prostate(age: u32, gender: Gender) -> bool {
    gender == Gender::Male && (55..=69).contains(&age)
}

fn always(_: u32, _: Gender) -> bool {
    true
}

const SCREENING_RULES: &[ScreeningRule] = &[
    rule(
        colorectal_routine,
        "Colorectal Cancer",
        "Colonoscopy every 10 years OR FIT test annually",
        ScreeningUrgency::Recommended,
        GRADE_A,
    ),
    rule(
        colorectal_individual,
        "Colorectal Cancer",
        "Discuss with doctor (individualized decision)",
        ScreeningUrgency::Optional,
        GRADE_C,
    ),
    rule(
        breast_optional,
        "Breast Cancer",
        "Consider biennial mammography (discuss with doctor)",
        ScreeningUrgency::Optional,
        GRADE_C,
    ),
    rule(
        breast_routine,
        "Breast Cancer",
        "Mammography every 2 years",
        ScreeningUrgency::Recommended,
        GRADE_B,
    ),
    rule(
        cervical_pap,
        "Cervical Cancer",
        "Pap smear every 3 years",
        ScreeningUrgency::Recommended,
        GRADE_A,
    ),
    rule(
        cervical_cotest,
        "Cervical Cancer",
        "Pap smear + HPV test every 5 years OR Pap alone every 3 years",
        ScreeningUrgency::Recommended,
        GRADE_A,
    ),
    rule(
        lung,
        "Lung Cancer",
        "Low-dose CT scan annually IF you smoke or quit within 15 years",
        ScreeningUrgency::RecommendedForSmokers,
        GRADE_B,
    ),
    rule(
        prostate,
        "Prostate Cancer",
        "Discuss PSA screening with doctor (individualized decision)",
        ScreeningUrgency::Optional,
        GRADE_C,
    ),
    rule(
        always,
        "Skin Cancer",
        "Annual skin examination by dermatologist (especially if fair-skinned)",
        ScreeningUrgency::Consider,
        "Clinical recommendation",
    ),
];

/// Screening recommendations for an age and gender
#[must_use]
pub fn cancer_screening(age: u32, gender: Gender) -> ScreeningSet {
    let screenings = SCREENING_RULES
        .iter()
        .filter(|rule| (rule.applies)(age, gender))
        .map(|rule| ScreeningRecommendation {
            cancer_type: rule.screening.cancer_type.to_owned(),
            recommendation: rule.screening.recommendation.to_owned(),
            urgency: rule.screening.urgency,
            evidence: rule.screening.evidence.to_owned(),
        })
        .collect();

    ScreeningSet::from_screenings(screenings)
}
