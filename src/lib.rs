// ABOUTME: Library entry point for the Pierre preventive health risk engine
// ABOUTME: Wires configuration, logging, LLM providers, and the assessment service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Health Risk
//!
//! Preventive health risk assessment from a single [`HealthProfile`]:
//!
//! - **Body composition**: BMI category and optional waist-to-hip ratio
//! - **Diabetes risk**: FINDRISC 10-year type 2 diabetes estimate
//! - **Cardiovascular risk**: Framingham 10-year estimate when labs are supplied
//! - **Cancer screening**: USPSTF-style age and sex eligibility
//! - **Composite score** and ordered priority actions
//! - **Personalized plan**: one narrative paragraph from an LLM backend, with
//!   fixed fallback text when no backend answers
//!
//! The deterministic scoring lives in `pierre-risk-scoring` and is re-exported
//! here. This crate adds the asynchronous narrative layer around it.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_health_risk::assessment::HealthAssessmentService;
//! use pierre_health_risk::models::{Gender, HealthProfile};
//!
//! #[tokio::main]
//! async fn main() {
//!     let profile = HealthProfile::new(52, Gender::Female, 165.0, 70.0);
//!     let report = HealthAssessmentService::offline().assess(&profile).await;
//!     println!("Overall health score: {}", report.overall_health_score);
//! }
//! ```

/// Health assessment orchestrator
pub mod assessment;

/// Environment-based configuration
pub mod config;

/// LLM provider abstraction and implementations
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Narrative adapter for the personalized plan
pub mod narrative;

pub use pierre_health_core::{errors, models};
pub use pierre_risk_scoring as scoring;

pub use assessment::{AssessmentReport, HealthAssessmentService, FALLBACK_PLAN};
pub use models::HealthProfile;
