//! Projection service - validates parameters and runs the calculation core

use crate::error::ApiError;
use nutrition_planner_shared::calculator::compute_projection;
use nutrition_planner_shared::targets::TargetPace;
use nutrition_planner_shared::types::{CalculationResult, ProjectionParameters};
use nutrition_planner_shared::validation::{
    get_field_display_label, validate_age_years, validate_body_fat_percent, validate_height_cm,
    validate_kg_per_week, validate_target_change_kg, validate_weeks, validate_weight_kg,
};

/// Projection service
pub struct ProjectionService;

impl ProjectionService {
    /// Validate a parameter snapshot and compute the full projection.
    ///
    /// Missing required fields and out-of-range values map to validation
    /// errors with user-friendly field labels; the core itself never sees
    /// an invalid number.
    pub fn compute(params: &ProjectionParameters) -> Result<CalculationResult, ApiError> {
        let missing = Self::missing_fields(params);
        if !missing.is_empty() {
            return Err(ApiError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Self::validate(params)?;

        compute_projection(params).ok_or_else(|| {
            // Unreachable once the missing-field check passed, but the
            // core's contract is Option and the error path keeps it honest.
            ApiError::Validation("Parameters are incomplete".to_string())
        })
    }

    fn missing_fields(params: &ProjectionParameters) -> Vec<String> {
        let mut missing = Vec::new();
        if params.weight_kg.is_none() {
            missing.push(get_field_display_label("weight_kg").to_string());
        }
        if params.height_cm.is_none() {
            missing.push(get_field_display_label("height_cm").to_string());
        }
        if params.age_years.is_none() {
            missing.push(get_field_display_label("age_years").to_string());
        }
        if params.target_change_kg.is_none() {
            missing.push(get_field_display_label("target_change_kg").to_string());
        }
        missing
    }

    fn validate(params: &ProjectionParameters) -> Result<(), ApiError> {
        let to_api = |e: nutrition_planner_shared::errors::ParameterError| {
            ApiError::Validation(e.user_message())
        };

        if let Some(weight) = params.weight_kg {
            validate_weight_kg(weight).map_err(to_api)?;
        }
        if let Some(height) = params.height_cm {
            validate_height_cm(height).map_err(to_api)?;
        }
        if let Some(age) = params.age_years {
            validate_age_years(age).map_err(to_api)?;
        }
        if let Some(bf) = params.body_fat_percent {
            validate_body_fat_percent(bf).map_err(to_api)?;
        }
        if let Some(change) = params.target_change_kg {
            validate_target_change_kg(change).map_err(to_api)?;
        }
        match params.pace {
            TargetPace::ByRate { kg_per_week } => {
                validate_kg_per_week(kg_per_week).map_err(to_api)?
            }
            TargetPace::ByDate { weeks } => validate_weeks(weeks).map_err(to_api)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrition_planner_shared::macros::MacroSplit;
    use nutrition_planner_shared::metabolism::{ActivityLevel, BiologicalSex};
    use nutrition_planner_shared::targets::GoalDirection;

    fn valid_params() -> ProjectionParameters {
        ProjectionParameters {
            sex: BiologicalSex::Male,
            age_years: Some(30),
            weight_kg: Some(80.0),
            height_cm: Some(180.0),
            activity: ActivityLevel::Sedentary,
            body_fat_percent: None,
            direction: GoalDirection::Lose,
            target_change_kg: Some(5.0),
            pace: TargetPace::ByRate { kg_per_week: 0.5 },
            macro_split: MacroSplit::Balanced,
        }
    }

    #[test]
    fn test_compute_succeeds_for_valid_params() {
        let result = ProjectionService::compute(&valid_params()).unwrap();
        assert_eq!(result.weeks_until_goal, 10);
        assert_eq!(result.graph_data.len(), 11);
    }

    #[test]
    fn test_missing_field_is_reported_with_label() {
        let mut params = valid_params();
        params.weight_kg = None;

        let err = ProjectionService::compute(&params).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert!(msg.contains("Current Weight")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let mut params = valid_params();
        params.weight_kg = Some(10.0);

        let err = ProjectionService::compute(&params).unwrap_err();
        match err {
            ApiError::Validation(msg) => assert!(msg.contains("Current Weight")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_rate_rejected() {
        let mut params = valid_params();
        params.pace = TargetPace::ByRate { kg_per_week: 0.0 };

        assert!(ProjectionService::compute(&params).is_err());
    }

    #[test]
    fn test_zero_weeks_rejected() {
        let mut params = valid_params();
        params.pace = TargetPace::ByDate { weeks: 0 };

        assert!(ProjectionService::compute(&params).is_err());
    }
}
