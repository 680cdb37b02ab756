// ABOUTME: Deterministic clinical risk scoring engine for the Pierre health platform
// ABOUTME: Table-driven BMI, FINDRISC, Framingham, screening, composite score, and actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Risk Scoring
//!
//! Pure, synchronous scoring of a single `HealthProfile`. Nothing in this crate
//! performs I/O or holds state, so results are reproducible and safe to compute
//! concurrently for independent profiles.
//!
//! Data flows forward only:
//!
//! ```text
//! profile -> body composition, diabetes, cardiovascular, screening
//!         -> composite score -> priority actions
//! ```
//!
//! Scores are driven by two table primitives in [`tiers`] and ordered
//! recommendation tables in [`rules`].

/// Threshold band tables and sparse point-to-percentage lookups
pub mod tiers;

/// Ordered predicate/message recommendation tables
pub mod rules;

/// Shared risk score result type
pub mod risk_score;

/// BMI and waist-to-hip ratio
pub mod body_composition;

/// FINDRISC diabetes risk
pub mod findrisc;

/// Framingham cardiovascular risk
pub mod framingham;

/// USPSTF cancer screening eligibility
pub mod screening;

/// Composite 0-100 health score
pub mod health_score;

/// Ordered urgent action list
pub mod priority_actions;

/// Whole-profile scoring entry point
pub mod assessment;

pub use assessment::{score_profile, ClinicalScores};
pub use body_composition::{BmiCategory, BmiResult, WaistHipResult, WaistHipRisk};
pub use risk_score::{RiskLevel, RiskScore};
pub use screening::{ScreeningRecommendation, ScreeningSet, ScreeningUrgency};
