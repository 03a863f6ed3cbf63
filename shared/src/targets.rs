//! Calorie target resolution
//!
//! Converts a weight-change goal into a fixed daily calorie delta and
//! target intake, with a safety-floor advisory for aggressive cuts.

use crate::metabolism::{ActivityLevel, BiologicalSex};
use serde::{Deserialize, Serialize};

/// Energy equivalence: calories per kilogram of body-mass change.
///
/// Applied uniformly to loss and gain in this model.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Direction of the weight-change goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    Lose,
    Gain,
}

/// How the pace toward the goal is specified
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum TargetPace {
    /// A fixed weekly rate of change
    ByRate { kg_per_week: f64 },
    /// A deadline: reach the goal in this many weeks
    ByDate { weeks: u32 },
}

/// Resolved calorie target for the whole projection horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetResolution {
    /// Maintenance calories at the input activity level
    pub tdee: f64,
    /// Signed daily surplus/deficit (negative when losing)
    pub daily_delta: f64,
    /// Fixed daily intake target: tdee + daily_delta
    pub target_calories: f64,
    /// Advisory when the target falls below the safety floor
    pub warning: Option<String>,
}

/// Minimum recommended daily calories during a cut.
pub fn min_calories(sex: BiologicalSex) -> f64 {
    match sex {
        BiologicalSex::Male => 1500.0,
        BiologicalSex::Female => 1200.0,
    }
}

/// Resolve a goal into a fixed daily calorie target.
///
/// The safety floor is advisory only: a sub-floor target is returned
/// unchanged, with a warning attached, and is simulated as-is downstream.
pub fn resolve_target(
    bmr: f64,
    activity: ActivityLevel,
    sex: BiologicalSex,
    direction: GoalDirection,
    target_change_kg: f64,
    pace: TargetPace,
) -> TargetResolution {
    let tdee = bmr * activity.multiplier();

    let daily_change_magnitude = match pace {
        TargetPace::ByDate { weeks } => {
            (target_change_kg * KCAL_PER_KG) / (weeks as f64 * 7.0)
        }
        TargetPace::ByRate { kg_per_week } => (kg_per_week * KCAL_PER_KG) / 7.0,
    };

    let daily_delta = match direction {
        GoalDirection::Lose => -daily_change_magnitude,
        GoalDirection::Gain => daily_change_magnitude,
    };

    let target_calories = tdee + daily_delta;

    let floor = min_calories(sex);
    let warning = if direction == GoalDirection::Lose && target_calories < floor {
        Some(format!(
            "Calories ({}) are below the recommended safety minimum ({}).",
            target_calories.round() as i64,
            floor as i64
        ))
    } else {
        None
    };

    TargetResolution {
        tdee,
        daily_delta,
        target_calories,
        warning,
    }
}
