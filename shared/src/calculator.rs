//! Calculation entry point
//!
//! Wires the pipeline together: metabolic estimate, target resolution,
//! projection simulation, macro allocation. Everything is computed fresh
//! from the input snapshot on every call.

use crate::macros::allocate;
use crate::metabolism::{default_body_fat_percent, estimate_bmr};
use crate::projection::{horizon_weeks, simulate, SimulationInputs};
use crate::targets::resolve_target;
use crate::types::{CalculationResult, ProjectionParameters};
use chrono::{DateTime, Duration, Utc};

/// Compute the full calculation for one parameter snapshot.
///
/// Returns `None` when any required numeric field (age, weight, height,
/// target change) is absent: the caller should treat that as "not yet
/// ready to display", not as a failure. A sub-floor calorie target yields
/// a complete result with a warning attached.
pub fn compute_projection(params: &ProjectionParameters) -> Option<CalculationResult> {
    compute_projection_at(params, Utc::now())
}

/// Like [`compute_projection`] with an explicit clock, so callers and
/// tests can pin `projected_date`.
pub fn compute_projection_at(
    params: &ProjectionParameters,
    now: DateTime<Utc>,
) -> Option<CalculationResult> {
    let weight_kg = params.weight_kg?;
    let height_cm = params.height_cm?;
    let age_years = params.age_years?;
    let target_change_kg = params.target_change_kg?;

    let bmr = estimate_bmr(
        weight_kg,
        height_cm,
        age_years,
        params.sex,
        params.body_fat_percent,
    );

    let resolution = resolve_target(
        bmr,
        params.activity,
        params.sex,
        params.direction,
        target_change_kg,
        params.pace,
    );

    let horizon = horizon_weeks(params.pace, target_change_kg, resolution.daily_delta);

    // The measured body fat seeds the simulation when usable; otherwise
    // the sexed default covers both the week-0 point and the
    // composition-split baseline.
    let start_body_fat_percent = match params.body_fat_percent {
        Some(bf) if bf > 0.0 => bf,
        _ => default_body_fat_percent(params.sex),
    };

    let graph_data = simulate(
        &SimulationInputs {
            start_weight_kg: weight_kg,
            start_body_fat_percent,
            height_cm,
            age_years,
            sex: params.sex,
            activity: params.activity,
            target_calories: resolution.target_calories,
            direction: params.direction,
        },
        horizon,
    );

    let grams = allocate(resolution.target_calories, params.macro_split);

    Some(CalculationResult {
        bmr,
        tdee: resolution.tdee,
        target_calories: resolution.target_calories,
        daily_delta: resolution.daily_delta,
        protein_grams: grams.protein_g,
        fat_grams: grams.fat_g,
        carb_grams: grams.carb_g,
        weeks_until_goal: horizon,
        projected_date: now + Duration::days(horizon as i64 * 7),
        warning: resolution.warning,
        graph_data,
    })
}
