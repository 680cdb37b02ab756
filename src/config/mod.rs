// ABOUTME: Configuration module for the health risk service
// ABOUTME: Environment-only settings for the narrative backend and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Pierre Health Risk
//!
//! - **Environment**: deployment mode, LLM provider selection, per-provider
//!   endpoints, and narrative request limits

/// Environment and narrative backend configuration
pub mod environment;

pub use environment::{
    Environment, HealthRiskConfig, LlmConfig, LlmProviderType, NarrativeConfig, ProviderSettings,
};
