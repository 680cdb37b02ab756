// ABOUTME: Health profile input model with FINDRISC and Framingham risk factors
// ABOUTME: Serde defaults for optional factors, builder methods, and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Biological sex used to select gender-specific scoring tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male scoring tables
    Male,
    /// Female scoring tables
    Female,
}

impl Gender {
    /// Lowercase label used in summaries
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported physical activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalActivity {
    /// Mostly sedentary
    Low,
    /// Some regular activity
    #[default]
    Moderate,
    /// At least 30 minutes of activity daily
    High,
}

impl PhysicalActivity {
    /// Lowercase label used in summaries
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PhysicalActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_true() -> bool {
    true
}

/// Health profile submitted for a risk assessment
///
/// Only `age`, `gender`, `height_cm`, and `weight_kg` are required when
/// deserializing. The cardiovascular score needs all three of
/// `total_cholesterol`, `hdl_cholesterol`, and `systolic_bp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct HealthProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Waist circumference in centimeters
    #[serde(default)]
    pub waist_cm: Option<f64>,
    /// Hip circumference in centimeters
    #[serde(default)]
    pub hip_cm: Option<f64>,

    /// Parent, sibling, or child with diabetes
    #[serde(default)]
    pub family_diabetes: bool,
    /// Physical activity level
    #[serde(default)]
    pub physical_activity: PhysicalActivity,
    /// Eats vegetables or fruit every day
    #[serde(default = "default_true")]
    pub daily_vegetables: bool,
    /// Has ever taken antihypertensive medication regularly
    #[serde(default)]
    pub blood_pressure_medication: bool,
    /// Has had high blood glucose in a health examination, illness, or pregnancy
    #[serde(default)]
    pub high_blood_glucose_history: bool,

    /// Total cholesterol (mg/dL)
    #[serde(default)]
    pub total_cholesterol: Option<f64>,
    /// HDL cholesterol (mg/dL)
    #[serde(default)]
    pub hdl_cholesterol: Option<f64>,
    /// Systolic blood pressure (mmHg)
    #[serde(default)]
    pub systolic_bp: Option<u32>,
    /// Currently smokes
    #[serde(default)]
    pub currently_smoking: bool,
    /// Diagnosed with diabetes
    #[serde(default)]
    pub has_diabetes: bool,
    /// Currently treated for high blood pressure
    #[serde(default)]
    pub on_bp_medication: bool,
}

impl HealthProfile {
    /// Create a profile with the required fields and defaults for the rest
    #[must_use]
    pub const fn new(age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age,
            gender,
            height_cm,
            weight_kg,
            waist_cm: None,
            hip_cm: None,
            family_diabetes: false,
            physical_activity: PhysicalActivity::Moderate,
            daily_vegetables: true,
            blood_pressure_medication: false,
            high_blood_glucose_history: false,
            total_cholesterol: None,
            hdl_cholesterol: None,
            systolic_bp: None,
            currently_smoking: false,
            has_diabetes: false,
            on_bp_medication: false,
        }
    }

    /// Set waist circumference
    #[must_use]
    pub const fn with_waist(mut self, waist_cm: f64) -> Self {
        self.waist_cm = Some(waist_cm);
        self
    }

    /// Set hip circumference
    #[must_use]
    pub const fn with_hip(mut self, hip_cm: f64) -> Self {
        self.hip_cm = Some(hip_cm);
        self
    }

    /// Set physical activity level
    #[must_use]
    pub const fn with_activity(mut self, activity: PhysicalActivity) -> Self {
        self.physical_activity = activity;
        self
    }

    /// Set whether vegetables or fruit are eaten daily
    #[must_use]
    pub const fn with_daily_vegetables(mut self, daily_vegetables: bool) -> Self {
        self.daily_vegetables = daily_vegetables;
        self
    }

    /// Set family history of diabetes
    #[must_use]
    pub const fn with_family_diabetes(mut self, family_diabetes: bool) -> Self {
        self.family_diabetes = family_diabetes;
        self
    }

    /// Set history of antihypertensive medication (FINDRISC factor)
    #[must_use]
    pub const fn with_blood_pressure_medication(mut self, value: bool) -> Self {
        self.blood_pressure_medication = value;
        self
    }

    /// Set history of high blood glucose
    #[must_use]
    pub const fn with_high_glucose_history(mut self, value: bool) -> Self {
        self.high_blood_glucose_history = value;
        self
    }

    /// Set the lab values used by the cardiovascular score
    #[must_use]
    pub const fn with_labs(mut self, total_cholesterol: f64, hdl: f64, systolic_bp: u32) -> Self {
        self.total_cholesterol = Some(total_cholesterol);
        self.hdl_cholesterol = Some(hdl);
        self.systolic_bp = Some(systolic_bp);
        self
    }

    /// Set current smoking status
    #[must_use]
    pub const fn with_smoking(mut self, currently_smoking: bool) -> Self {
        self.currently_smoking = currently_smoking;
        self
    }

    /// Set diabetes diagnosis (Framingham factor)
    #[must_use]
    pub const fn with_diabetes(mut self, has_diabetes: bool) -> Self {
        self.has_diabetes = has_diabetes;
        self
    }

    /// Set current blood pressure treatment (Framingham factor)
    #[must_use]
    pub const fn with_bp_treatment(mut self, on_bp_medication: bool) -> Self {
        self.on_bp_medication = on_bp_medication;
        self
    }

    /// Check field ranges before the profile is scored
    ///
    /// The scoring core assumes a validated profile and never calls this.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for implausible or non-positive measurements.
    pub fn validate(&self) -> AppResult<()> {
        if self.age > limits::MAX_AGE_YEARS {
            return Err(AppError::value_out_of_range(format!(
                "Age must be at most {} years",
                limits::MAX_AGE_YEARS
            )));
        }
        check_positive("height_cm", self.height_cm, limits::MAX_HEIGHT_CM)?;
        check_positive("weight_kg", self.weight_kg, limits::MAX_WEIGHT_KG)?;
        if let Some(waist) = self.waist_cm {
            check_positive("waist_cm", waist, limits::MAX_CIRCUMFERENCE_CM)?;
        }
        if let Some(hip) = self.hip_cm {
            check_positive("hip_cm", hip, limits::MAX_CIRCUMFERENCE_CM)?;
        }
        if let Some(total) = self.total_cholesterol {
            check_positive("total_cholesterol", total, limits::MAX_CHOLESTEROL_MG_DL)?;
        }
        if let Some(hdl) = self.hdl_cholesterol {
            check_positive("hdl_cholesterol", hdl, limits::MAX_CHOLESTEROL_MG_DL)?;
        }
        if let Some(systolic) = self.systolic_bp {
            if systolic == 0 || systolic > limits::MAX_SYSTOLIC_BP_MMHG {
                return Err(AppError::value_out_of_range(format!(
                    "systolic_bp must be between 1 and {} mmHg",
                    limits::MAX_SYSTOLIC_BP_MMHG
                )));
            }
        }
        Ok(())
    }

    /// Whether all lab inputs for the cardiovascular score are present
    #[must_use]
    pub const fn has_cardiovascular_labs(&self) -> bool {
        self.total_cholesterol.is_some() && self.hdl_cholesterol.is_some() && self.systolic_bp.is_some()
    }
}

fn check_positive(field: &str, value: f64, max: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(AppError::value_out_of_range(format!(
            "{field} must be greater than 0 and at most {max}"
        )));
    }
    Ok(())
}
