// ABOUTME: Integration tests for the health assessment orchestrator
// ABOUTME: Covers narrative success, failure, timeout, offline mode, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    high_risk_profile, init_test_logging, low_risk_profile, profile_with_labs, Script,
    ScriptedNarrator,
};
use pierre_health_risk::config::NarrativeConfig;
use pierre_health_risk::errors::ErrorCode;
use pierre_health_risk::models::{Gender, HealthProfile};
use pierre_health_risk::{HealthAssessmentService, FALLBACK_PLAN};
use std::sync::Arc;
use std::time::Duration;

fn fast_config() -> NarrativeConfig {
    NarrativeConfig {
        timeout: Duration::from_millis(200),
        ..NarrativeConfig::default()
    }
}

fn service_with(narrator: &Arc<ScriptedNarrator>) -> HealthAssessmentService {
    HealthAssessmentService::new(narrator.clone(), &fast_config())
}

#[tokio::test]
async fn test_narrative_is_used_when_backend_answers() {
    init_test_logging();
    let narrator = Arc::new(ScriptedNarrator::new(Script::Reply(
        "Start with a 20 minute walk after dinner.",
    )));

    let report = service_with(&narrator).assess(&high_risk_profile()).await;

    assert_eq!(
        report.personalized_plan,
        "Start with a 20 minute walk after dinner."
    );
    assert!(!report.used_fallback_plan());
    assert_eq!(narrator.calls(), 1);

    let request = narrator.last_request().unwrap();
    assert_eq!(request.max_words, NarrativeConfig::DEFAULT_MAX_WORDS);
    assert!(request.summary.contains("- Diabetes Risk: High (33% in 10 years)"));
    assert!(request
        .summary
        .contains("- Heart Disease Risk: Not calculated (N/A% in 10 years)"));
}

#[tokio::test]
async fn test_backend_failure_falls_back() {
    init_test_logging();
    let narrator = Arc::new(ScriptedNarrator::new(Script::Fail));

    let report = service_with(&narrator).assess(&profile_with_labs()).await;

    assert_eq!(report.personalized_plan, FALLBACK_PLAN);
    assert!(report.heart_disease_risk.is_some());
    assert_eq!(narrator.calls(), 1);
}

#[tokio::test]
async fn test_backend_timeout_falls_back() {
    init_test_logging();
    let narrator = Arc::new(ScriptedNarrator::new(Script::Stall(Duration::from_secs(5))));

    let report = service_with(&narrator).assess(&low_risk_profile()).await;

    assert_eq!(report.personalized_plan, FALLBACK_PLAN);
    assert_eq!(narrator.calls(), 1);
}

#[tokio::test]
async fn test_offline_service_never_narrates() {
    let report = HealthAssessmentService::offline()
        .assess(&low_risk_profile())
        .await;
    assert!(report.used_fallback_plan());
}

#[tokio::test]
async fn test_reports_identical_apart_from_narrative() {
    let narrator = Arc::new(ScriptedNarrator::new(Script::Reply("Eat more greens.")));
    let profile = profile_with_labs();

    let narrated = service_with(&narrator).assess(&profile).await;
    let offline = HealthAssessmentService::offline().assess(&profile).await;

    assert_ne!(narrated.personalized_plan, offline.personalized_plan);
    assert_eq!(narrated.bmi, offline.bmi);
    assert_eq!(narrated.diabetes_risk, offline.diabetes_risk);
    assert_eq!(narrated.heart_disease_risk, offline.heart_disease_risk);
    assert_eq!(narrated.cancer_screening, offline.cancer_screening);
    assert_eq!(narrated.overall_health_score, offline.overall_health_score);
    assert_eq!(narrated.priority_actions, offline.priority_actions);
}

#[tokio::test]
async fn test_validation_rejects_before_narrating() {
    let narrator = Arc::new(ScriptedNarrator::new(Script::Reply("unused")));
    let profile = HealthProfile::new(40, Gender::Female, 0.0, 60.0);

    let err = service_with(&narrator)
        .assess_validated(&profile)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(narrator.calls(), 0);
}

#[tokio::test]
async fn test_report_json_shape() {
    let report = HealthAssessmentService::offline()
        .assess(&profile_with_labs())
        .await;
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["bmi"]["waist_hip_ratio"]["risk"], "Moderate risk");
    assert!(json["heart_disease_risk"]["percentage"].is_u64());
    assert_eq!(json["personalized_plan"], FALLBACK_PLAN);
    assert!(json["priority_actions"]
        .as_array()
        .unwrap()
        .iter()
        .any(|action| action.as_str().unwrap().contains("QUIT SMOKING")));
}

#[tokio::test]
async fn test_profile_deserializes_with_defaults() {
    let profile: HealthProfile = serde_json::from_str(
        r#"{"age": 45, "gender": "female", "height_cm": 165, "weight_kg": 72}"#,
    )
    .unwrap();
    assert!(profile.daily_vegetables);

    let report = HealthAssessmentService::offline()
        .assess_validated(&profile)
        .await
        .unwrap();
    assert!(report.heart_disease_risk.is_none());
}
