// ABOUTME: Shared risk score result type used by the diabetes and cardiovascular scorers
// ABOUTME: Ordinal risk levels, clamped percentages, explanation, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal risk label shared by the point-based scorers
///
/// FINDRISC uses Low, Slightly Elevated, Moderate, High, and Very High.
/// Framingham uses Low, Intermediate, and High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Slightly elevated risk
    #[serde(rename = "Slightly Elevated")]
    SlightlyElevated,
    /// Moderate risk
    Moderate,
    /// Intermediate risk
    Intermediate,
    /// High risk
    High,
    /// Very high risk
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::SlightlyElevated => "Slightly Elevated",
            Self::Moderate => "Moderate",
            Self::Intermediate => "Intermediate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a point-based risk score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Raw point total (FINDRISC 0-26, Framingham signed)
    pub score: i32,
    /// Ordinal risk tier
    pub risk_level: RiskLevel,
    /// Estimated 10-year probability in percent
    pub percentage: u8,
    /// One-sentence explanation of the result
    pub explanation: String,
    /// Ordered recommendations, never empty
    pub recommendations: Vec<String>,
}

impl RiskScore {
    /// Maximum percentage a score can report
    pub const MAX_PERCENTAGE: u8 = 100;

    /// Create a score, clamping the percentage into 0-100
    #[must_use]
    pub fn new(
        score: i32,
        risk_level: RiskLevel,
        percentage: u8,
        explanation: String,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            score,
            risk_level,
            percentage: percentage.min(Self::MAX_PERCENTAGE),
            explanation,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_is_clamped() {
        let score = RiskScore::new(1, RiskLevel::High, 140, String::new(), vec![]);
        assert_eq!(score.percentage, 100);
    }

    #[test]
    fn test_risk_level_serializes_display_label() {
        let json = serde_json::to_string(&RiskLevel::SlightlyElevated).unwrap();
        assert_eq!(json, "\"Slightly Elevated\"");
        assert_eq!(RiskLevel::VeryHigh.to_string(), "Very High");
    }
}
