// ABOUTME: Composite 0-100 health score from stacked fixed penalties
// ABOUTME: Penalises BMI, diabetes score, cardiovascular risk, smoking, and low activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_health_core::models::{HealthProfile, PhysicalActivity};

use crate::risk_score::RiskScore;
use crate::tiers::Tiered;

/// Score before any penalty
pub const PERFECT_SCORE: u8 = 100;

const BMI_PENALTY: Tiered<f64, u8> = Tiered::new(&[(25.0, 0), (30.0, 10)], 15);

const DIABETES_PENALTY: Tiered<i32, u8> = Tiered::new(&[(7, 0), (12, 10), (15, 15)], 20);

const CARDIOVASCULAR_PENALTY: Tiered<u8, u8> = Tiered::new(&[(10, 0), (20, 15)], 25);

const SMOKING_PENALTY: u8 = 20;

const LOW_ACTIVITY_PENALTY: u8 = 10;

/// Composite health score
///
/// `reported_bmi` is the 1-decimal BMI shown in the report. Penalties stack
/// and the result never drops below zero.
#[must_use]
pub fn overall_health_score(
    profile: &HealthProfile,
    reported_bmi: f64,
    diabetes: &RiskScore,
    cardiovascular: Option<&RiskScore>,
) -> u8 {
    let penalties = [
        BMI_PENALTY.lookup(reported_bmi),
        DIABETES_PENALTY.lookup(diabetes.score),
        cardiovascular.map_or(0, |heart| CARDIOVASCULAR_PENALTY.lookup(heart.percentage)),
        if profile.currently_smoking {
            SMOKING_PENALTY
        } else {
            0
        },
        if profile.physical_activity == PhysicalActivity::Low {
            LOW_ACTIVITY_PENALTY
        } else {
            0
        },
    ];

    penalties
        .iter()
        .fold(PERFECT_SCORE, |score, penalty| score.saturating_sub(*penalty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk_score::RiskLevel;
    use pierre_health_core::models::Gender;

    fn risk(score: i32, percentage: u8) -> RiskScore {
        RiskScore::new(score, RiskLevel::Low, percentage, String::new(), vec![])
    }

    fn active_profile() -> HealthProfile {
        HealthProfile::new(40, Gender::Male, 180.0, 75.0).with_activity(PhysicalActivity::High)
    }

    #[test]
    fn test_no_penalties() {
        assert_eq!(overall_health_score(&active_profile(), 23.1, &risk(3, 1), None), 100);
    }

    #[test]
    fn test_bmi_penalty_uses_reported_value() {
        let profile = active_profile();
        assert_eq!(overall_health_score(&profile, 24.9, &risk(0, 1), None), 100);
        assert_eq!(overall_health_score(&profile, 25.0, &risk(0, 1), None), 90);
        assert_eq!(overall_health_score(&profile, 30.0, &risk(0, 1), None), 85);
    }

    #[test]
    fn test_diabetes_penalty_bands() {
        let profile = active_profile();
        assert_eq!(overall_health_score(&profile, 22.0, &risk(7, 4), None), 90);
        assert_eq!(overall_health_score(&profile, 22.0, &risk(12, 17), None), 85);
        assert_eq!(overall_health_score(&profile, 22.0, &risk(15, 33), None), 80);
    }

    #[test]
    fn test_cardiovascular_penalty_only_when_present() {
        let profile = active_profile();
        let diabetes = risk(0, 1);
        assert_eq!(overall_health_score(&profile, 22.0, &diabetes, Some(&risk(5, 9))), 100);
        assert_eq!(overall_health_score(&profile, 22.0, &diabetes, Some(&risk(10, 10))), 85);
        assert_eq!(overall_health_score(&profile, 22.0, &diabetes, Some(&risk(14, 25))), 75);
    }

    #[test]
    fn test_smoking_subtracts_exactly_twenty() {
        let profile = active_profile();
        let smoker = profile.clone().with_smoking(true);
        let diabetes = risk(9, 4);
        assert_eq!(
            overall_health_score(&profile, 27.0, &diabetes, None)
                - overall_health_score(&smoker, 27.0, &diabetes, None),
            20
        );
    }

    #[test]
    fn test_all_penalties_stack() {
        let profile = active_profile()
            .with_smoking(true)
            .with_activity(PhysicalActivity::Low);
        // 15 + 20 + 25 + 20 + 10
        assert_eq!(
            overall_health_score(&profile, 41.0, &risk(22, 50), Some(&risk(18, 30))),
            PERFECT_SCORE - 90
        );
    }
}
