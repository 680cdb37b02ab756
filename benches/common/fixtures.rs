// ABOUTME: Benchmark fixtures generating varied but deterministic health profiles
// ABOUTME: Spreads age, body size, lifestyle, and lab values across every scoring band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for health profiles.

use pierre_health_risk::models::{Gender, HealthProfile, PhysicalActivity};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ProfileBatchSize {
    /// Small batch (10 profiles)
    Small,
    /// Medium batch (1000 profiles)
    Medium,
}

impl ProfileBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1000,
        }
    }
}

const fn activity(index: usize) -> PhysicalActivity {
    match index % 3 {
        0 => PhysicalActivity::Low,
        1 => PhysicalActivity::Moderate,
        _ => PhysicalActivity::High,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_profile(index: usize) -> HealthProfile {
    let gender = if index % 2 == 0 {
        Gender::Male
    } else {
        Gender::Female
    };
    let age = 25 + (index * 7 % 55) as u32;
    let height_cm = 155.0 + (index * 13 % 40) as f64;
    let weight_kg = 50.0 + (index * 17 % 70) as f64;

    let mut profile = HealthProfile::new(age, gender, height_cm, weight_kg)
        .with_waist(70.0 + (index * 11 % 50) as f64)
        .with_hip(90.0 + (index * 5 % 25) as f64)
        .with_activity(activity(index))
        .with_daily_vegetables(index % 4 != 0)
        .with_family_diabetes(index % 5 == 0)
        .with_smoking(index % 6 == 0);

    // Every other profile carries labs so both cardiovascular paths run
    if index % 2 == 1 {
        profile = profile
            .with_labs(
                160.0 + (index * 19 % 140) as f64,
                30.0 + (index * 3 % 40) as f64,
                110 + (index * 9 % 60) as u32,
            )
            .with_bp_treatment(index % 3 == 0);
    }
    profile
}

/// Generate a deterministic batch of profiles
#[must_use]
pub fn generate_profiles(size: ProfileBatchSize) -> Vec<HealthProfile> {
    (0..size.count()).map(generate_profile).collect()
}
