// ABOUTME: Core types and constants for the Pierre health risk engine
// ABOUTME: Foundation crate with error handling, the health profile model, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Health Core
//!
//! Foundation crate providing shared types for the Pierre health risk engine.
//! The scoring crate and the service crate both build on these types, so this
//! crate is kept small and changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: The `HealthProfile` input model and its enums
//! - **constants**: Input limits and service names

/// Unified error handling system with standard error codes
pub mod errors;

/// Health profile input model
pub mod models;

/// Input limits and service identifiers
pub mod constants;
