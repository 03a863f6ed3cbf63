//! Nutrition Planner WASM Module
//!
//! This crate provides WebAssembly bindings so the browser UI can run the
//! projection calculation locally, without a round trip to the backend.

use nutrition_planner_shared::calculator::compute_projection;
use nutrition_planner_shared::metabolism::{
    estimate_bmr, tdee, ActivityLevel, BiologicalSex,
};
use nutrition_planner_shared::types::ProjectionParameters;
use wasm_bindgen::prelude::*;

/// Calculate BMR from biometrics
///
/// Uses Katch-McArdle when `body_fat_percent` is positive, otherwise
/// Mifflin-St Jeor. Pass a non-positive body fat to skip it.
#[wasm_bindgen]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    body_fat_percent: f64,
) -> f64 {
    let sex = if is_male {
        BiologicalSex::Male
    } else {
        BiologicalSex::Female
    };
    let body_fat = (body_fat_percent > 0.0).then_some(body_fat_percent);
    estimate_bmr(weight_kg, height_cm, age_years, sex, body_fat)
}

/// Calculate TDEE from biometrics and an activity multiplier
///
/// The multiplier snaps to the nearest of the five permitted constants.
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_multiplier: f64,
) -> f64 {
    let bmr = calculate_bmr(weight_kg, height_cm, age_years, is_male, 0.0);
    tdee(bmr, ActivityLevel::nearest(activity_multiplier))
}

/// Run the full projection calculation.
///
/// `params_json` is a JSON-serialized parameter snapshot; the return
/// value is the JSON-serialized calculation result, or `"null"` when the
/// parameters are incomplete or unparseable.
#[wasm_bindgen]
pub fn compute_projection_json(params_json: &str) -> String {
    let Ok(params) = serde_json::from_str::<ProjectionParameters>(params_json) else {
        return "null".to_string();
    };

    match compute_projection(&params) {
        Some(result) => serde_json::to_string(&result).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}
