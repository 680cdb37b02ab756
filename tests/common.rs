// ABOUTME: Shared test utilities for health risk integration tests
// ABOUTME: Provides reference profiles and scripted narrative adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_health_risk`

use async_trait::async_trait;
use pierre_health_risk::errors::{AppError, AppResult};
use pierre_health_risk::models::{Gender, HealthProfile, PhysicalActivity};
use pierre_health_risk::narrative::{NarrativeAdapter, NarrativeRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use std::time::Duration;
use tokio::time::sleep;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// 50-year-old with BMI 24 and low activity: FINDRISC 4
pub fn low_risk_profile() -> HealthProfile {
    HealthProfile::new(50, Gender::Male, 180.0, 77.8).with_activity(PhysicalActivity::Low)
}

/// 60-year-old obese male with family history: FINDRISC 18
pub fn high_risk_profile() -> HealthProfile {
    HealthProfile::new(60, Gender::Male, 175.0, 98.0)
        .with_waist(105.0)
        .with_activity(PhysicalActivity::Low)
        .with_daily_vegetables(false)
        .with_family_diabetes(true)
}

/// Profile with complete cardiovascular labs
pub fn profile_with_labs() -> HealthProfile {
    HealthProfile::new(58, Gender::Male, 178.0, 88.0)
        .with_waist(98.0)
        .with_hip(100.0)
        .with_labs(230.0, 42.0, 145)
        .with_smoking(true)
}

/// What a scripted narrator does when asked
#[derive(Debug, Clone, Copy)]
pub enum Script {
    /// Return this text
    Reply(&'static str),
    /// Fail immediately
    Fail,
    /// Sleep before answering
    Stall(Duration),
}

/// Narrative adapter with a fixed behavior that records what it was sent
pub struct ScriptedNarrator {
    script: Script,
    calls: AtomicUsize,
    requests: Mutex<Vec<NarrativeRequest>>,
}

impl ScriptedNarrator {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<NarrativeRequest> {
        self.requests.lock().ok()?.last().cloned()
    }
}

#[async_trait]
impl NarrativeAdapter for ScriptedNarrator {
    async fn narrate(&self, request: &NarrativeRequest) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        match self.script {
            Script::Reply(text) => Ok(text.to_owned()),
            Script::Fail => Err(AppError::external_unavailable("scripted", "backend down")),
            Script::Stall(delay) => {
                sleep(delay).await;
                Ok("too late".to_owned())
            }
        }
    }
}
