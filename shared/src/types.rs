//! Core input and result types

use crate::macros::MacroSplit;
use crate::metabolism::{ActivityLevel, BiologicalSex};
use crate::targets::{GoalDirection, TargetPace};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable input snapshot for one calculation
///
/// Required numeric fields are `Option` so a caller holding a half-filled
/// form can be represented directly: any missing required field makes the
/// whole computation return `None` rather than a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    pub sex: BiologicalSex,
    pub age_years: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity: ActivityLevel,
    /// Optional measured body fat percentage (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    pub direction: GoalDirection,
    /// Magnitude of the desired change in kg; direction comes from `direction`
    pub target_change_kg: Option<f64>,
    #[serde(flatten)]
    pub pace: TargetPace,
    pub macro_split: MacroSplit,
}

/// One weekly sample of the projected trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    /// Week index; 0 is the starting state
    pub week: u32,
    /// Projected weight in kg, rounded to 2 decimals
    pub weight: f64,
    /// Body fat % when losing, lean mass in kg when gaining; 1 decimal
    pub secondary_metric: f64,
}

/// Complete output of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub bmr: f64,
    /// Maintenance calories at the input activity level
    pub tdee: f64,
    /// Fixed daily intake target for the whole horizon
    pub target_calories: f64,
    /// Signed deficit/surplus: target_calories - tdee
    pub daily_delta: f64,
    pub protein_grams: f64,
    pub fat_grams: f64,
    pub carb_grams: f64,
    /// Simulated horizon length in weeks
    pub weeks_until_goal: u32,
    pub projected_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub graph_data: Vec<GraphPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::TargetPace;

    #[test]
    fn test_parameters_json_shape() {
        let json = serde_json::json!({
            "sex": "male",
            "age_years": 30,
            "weight_kg": 80.0,
            "height_cm": 180.0,
            "activity": "sedentary",
            "direction": "lose",
            "target_change_kg": 5.0,
            "method": "by_rate",
            "kg_per_week": 0.5,
            "macro_split": "balanced"
        });

        let params: ProjectionParameters = serde_json::from_value(json).unwrap();
        assert_eq!(params.pace, TargetPace::ByRate { kg_per_week: 0.5 });
        assert_eq!(params.body_fat_percent, None);

        // Round-trips through the same flattened shape
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["method"], "by_rate");
        assert_eq!(value["kg_per_week"], 0.5);
        assert_eq!(value["sex"], "male");
    }

    #[test]
    fn test_by_date_json_shape() {
        let json = serde_json::json!({
            "sex": "female",
            "age_years": 28,
            "weight_kg": 60.0,
            "height_cm": 165.0,
            "activity": "lightly_active",
            "direction": "lose",
            "target_change_kg": 3.0,
            "method": "by_date",
            "weeks": 6,
            "macro_split": "keto"
        });

        let params: ProjectionParameters = serde_json::from_value(json).unwrap();
        assert_eq!(params.pace, TargetPace::ByDate { weeks: 6 });
    }
}
