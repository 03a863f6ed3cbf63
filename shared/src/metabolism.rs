//! Metabolic rate estimation
//!
//! Provides BMR and TDEE calculations from user biometrics, selecting
//! between formulas based on the data available.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Formulas from peer-reviewed research
//! 3. **Type Safety**: Closed enums for sex and activity level

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Profile Types
// ============================================================================

/// Biological sex for metabolic calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

/// Activity level for TDEE calculation
///
/// A closed enumeration: external input (including AI-derived suggestions)
/// must resolve to one of these five levels before it reaches the
/// calculation core. Use [`ActivityLevel::nearest`] to snap arbitrary
/// multipliers to a permitted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise/sports 3-5 days/week
    ModeratelyActive,
    /// Hard exercise/sports 6-7 days/week
    VeryActive,
    /// Physical job or twice-daily training
    ExtraActive,
}

/// All permitted activity levels, in ascending multiplier order.
pub const ACTIVITY_LEVELS: [ActivityLevel; 5] = [
    ActivityLevel::Sedentary,
    ActivityLevel::LightlyActive,
    ActivityLevel::ModeratelyActive,
    ActivityLevel::VeryActive,
    ActivityLevel::ExtraActive,
];

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a short display label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Light",
            ActivityLevel::ModeratelyActive => "Moderate",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Desk job, little/no exercise.",
            ActivityLevel::LightlyActive => "Exercise 1-3 days/week.",
            ActivityLevel::ModeratelyActive => "Sports 3-5 days/week.",
            ActivityLevel::VeryActive => "Sports 6-7 days/week.",
            ActivityLevel::ExtraActive => "Physical job or 2x training.",
        }
    }

    /// Resolve an exact multiplier to its level, if it is one of the five
    /// permitted constants.
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        ACTIVITY_LEVELS
            .into_iter()
            .find(|level| level.multiplier() == multiplier)
    }

    /// Snap an arbitrary multiplier to the nearest permitted level by
    /// absolute numeric distance.
    ///
    /// This is the fallback for values arriving from outside the core
    /// (e.g. an AI classifier returning a multiplier that is not exactly
    /// one of the five constants).
    pub fn nearest(multiplier: f64) -> Self {
        ACTIVITY_LEVELS
            .into_iter()
            .min_by(|a, b| {
                let da = (a.multiplier() - multiplier).abs();
                let db = (b.multiplier() - multiplier).abs();
                da.total_cmp(&db)
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate BMR using the Katch-McArdle equation (requires body fat %)
///
/// BMR = 370 + 21.6 × LBM(kg)
/// LBM = weight × (1 - body_fat_percent/100)
pub fn katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_body_mass
}

/// Estimate BMR, preferring Katch-McArdle when a usable body fat
/// percentage is available.
///
/// A body fat of `Some(0.0)` or `None` falls back to Mifflin-St Jeor.
pub fn estimate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: BiologicalSex,
    body_fat_percent: Option<f64>,
) -> f64 {
    match body_fat_percent {
        Some(bf) if bf > 0.0 => katch_mcardle(weight_kg, bf),
        _ => mifflin_st_jeor(weight_kg, height_cm, age_years, sex),
    }
}

/// Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Default starting body fat percentage assumed when none is supplied.
///
/// An assumption for projection purposes, not a measurement.
pub fn default_body_fat_percent(sex: BiologicalSex) -> f64 {
    match sex {
        BiologicalSex::Male => 20.0,
        BiologicalSex::Female => 30.0,
    }
}
