// ABOUTME: Data models module for the health risk engine
// ABOUTME: Re-exports the health profile input model and its enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Health profile input model
mod health_profile;

pub use health_profile::{Gender, HealthProfile, PhysicalActivity};
