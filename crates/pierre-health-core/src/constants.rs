// ABOUTME: Input limits and service identifiers shared across the workspace
// ABOUTME: Physiological bounds used by profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service names used in structured logging
pub mod service_names {
    /// Default service name for the health risk engine
    pub const PIERRE_HEALTH_RISK: &str = "pierre-health-risk";
}

/// Plausibility bounds for profile fields
///
/// These are sanity limits for rejecting malformed input, not clinical
/// reference ranges.
pub mod limits {
    /// Maximum accepted age in years
    pub const MAX_AGE_YEARS: u32 = 120;

    /// Maximum accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 300.0;

    /// Maximum accepted body weight in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;

    /// Maximum accepted waist or hip circumference in centimeters
    pub const MAX_CIRCUMFERENCE_CM: f64 = 300.0;

    /// Maximum accepted cholesterol value (mg/dL)
    pub const MAX_CHOLESTEROL_MG_DL: f64 = 1000.0;

    /// Maximum accepted systolic blood pressure (mmHg)
    pub const MAX_SYSTOLIC_BP_MMHG: u32 = 300;
}
