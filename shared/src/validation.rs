//! Input validation functions
//!
//! Range and sanity checks for calculation parameters. The calculation
//! core itself assumes pre-validated numbers; these helpers are for the
//! boundary where external input enters the system.

use crate::errors::ParameterError;

fn ensure_finite(value: f64, field: &'static str) -> Result<(), ParameterError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ParameterError::NotFinite { field });
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ParameterError> {
    ensure_finite(weight_kg, "weight_kg")?;
    if weight_kg < 20.0 {
        return Err(ParameterError::OutOfRange {
            field: "weight_kg",
            message: "must be at least 20 kg",
        });
    }
    if weight_kg > 500.0 {
        return Err(ParameterError::OutOfRange {
            field: "weight_kg",
            message: "must be at most 500 kg",
        });
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), ParameterError> {
    ensure_finite(height_cm, "height_cm")?;
    if height_cm < 50.0 {
        return Err(ParameterError::OutOfRange {
            field: "height_cm",
            message: "must be at least 50 cm",
        });
    }
    if height_cm > 300.0 {
        return Err(ParameterError::OutOfRange {
            field: "height_cm",
            message: "must be at most 300 cm",
        });
    }
    Ok(())
}

/// Validate age in whole years (1-150)
pub fn validate_age_years(age_years: u32) -> Result<(), ParameterError> {
    if age_years < 1 {
        return Err(ParameterError::OutOfRange {
            field: "age_years",
            message: "must be at least 1 year",
        });
    }
    if age_years > 150 {
        return Err(ParameterError::OutOfRange {
            field: "age_years",
            message: "cannot exceed 150 years",
        });
    }
    Ok(())
}

/// Validate body fat percentage (0-100)
pub fn validate_body_fat_percent(value: f64) -> Result<(), ParameterError> {
    ensure_finite(value, "body_fat_percent")?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ParameterError::OutOfRange {
            field: "body_fat_percent",
            message: "must be between 0 and 100",
        });
    }
    Ok(())
}

/// Validate the goal magnitude in kg (> 0, bounded by the weight range)
pub fn validate_target_change_kg(value: f64) -> Result<(), ParameterError> {
    ensure_finite(value, "target_change_kg")?;
    if value <= 0.0 {
        return Err(ParameterError::OutOfRange {
            field: "target_change_kg",
            message: "must be greater than zero",
        });
    }
    if value > 500.0 {
        return Err(ParameterError::OutOfRange {
            field: "target_change_kg",
            message: "must be at most 500 kg",
        });
    }
    Ok(())
}

/// Validate a weekly rate of change in kg (> 0, sane upper bound)
pub fn validate_kg_per_week(value: f64) -> Result<(), ParameterError> {
    ensure_finite(value, "kg_per_week")?;
    if value <= 0.0 {
        return Err(ParameterError::OutOfRange {
            field: "kg_per_week",
            message: "must be greater than zero",
        });
    }
    if value > 5.0 {
        return Err(ParameterError::OutOfRange {
            field: "kg_per_week",
            message: "must be at most 5 kg per week",
        });
    }
    Ok(())
}

/// Validate a deadline in weeks (at least 1)
pub fn validate_weeks(weeks: u32) -> Result<(), ParameterError> {
    if weeks < 1 {
        return Err(ParameterError::OutOfRange {
            field: "weeks",
            message: "must be at least 1 week",
        });
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight_kg" => "Current Weight",
        "height_cm" => "Height",
        "age_years" => "Age",
        "body_fat_percent" => "Body Fat Percentage",
        "target_change_kg" => "Target Weight Change",
        "kg_per_week" => "Weekly Rate",
        "weeks" => "Weeks to Goal",
        "activity" => "Activity Level",
        "macro_split" => "Macro Split",
        _ => field_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(20.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());
        assert!(validate_weight_kg(10.0).is_err());
        assert!(validate_weight_kg(600.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age_years() {
        assert!(validate_age_years(30).is_ok());
        assert!(validate_age_years(1).is_ok());
        assert!(validate_age_years(150).is_ok());
        assert!(validate_age_years(0).is_err());
        assert!(validate_age_years(151).is_err());
    }

    #[test]
    fn test_validate_body_fat_percent() {
        assert!(validate_body_fat_percent(20.0).is_ok());
        assert!(validate_body_fat_percent(0.0).is_ok());
        assert!(validate_body_fat_percent(100.0).is_ok());
        assert!(validate_body_fat_percent(-1.0).is_err());
        assert!(validate_body_fat_percent(101.0).is_err());
    }

    #[test]
    fn test_validate_goal_fields() {
        assert!(validate_target_change_kg(5.0).is_ok());
        assert!(validate_target_change_kg(0.0).is_err());
        assert!(validate_target_change_kg(-5.0).is_err());
        assert!(validate_kg_per_week(0.5).is_ok());
        assert!(validate_kg_per_week(0.0).is_err());
        assert!(validate_kg_per_week(6.0).is_err());
        assert!(validate_weeks(4).is_ok());
        assert!(validate_weeks(0).is_err());
    }

    #[test]
    fn test_error_reports_field() {
        let err = validate_weight_kg(10.0).unwrap_err();
        assert_eq!(err.field(), "weight_kg");
        assert_eq!(err.user_message(), "Current Weight: must be at least 20 kg");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_valid_body_fat_range(pct in 0.0f64..=100.0) {
            prop_assert!(validate_body_fat_percent(pct).is_ok());
        }

        #[test]
        fn prop_positive_rate_valid(rate in 0.01f64..=5.0) {
            prop_assert!(validate_kg_per_week(rate).is_ok());
        }
    }
}
