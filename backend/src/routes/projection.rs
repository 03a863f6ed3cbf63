//! Projection API routes

use crate::error::ApiError;
use crate::services::ProjectionService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use nutrition_planner_shared::types::{CalculationResult, ProjectionParameters};
use tracing::debug;

/// Create projection routes
pub fn projection_routes() -> Router<AppState> {
    Router::new().route("/", post(compute_projection))
}

/// POST /api/v1/projection - Run the full calculation
///
/// Accepts a parameter snapshot and returns the metabolic estimate,
/// calorie target, macro split, and week-by-week projection curve. A
/// target below the safety floor still computes; the response carries an
/// advisory warning instead of failing.
async fn compute_projection(
    Json(params): Json<ProjectionParameters>,
) -> Result<Json<CalculationResult>, ApiError> {
    let result = ProjectionService::compute(&params)?;

    debug!(
        weeks = result.weeks_until_goal,
        target_calories = result.target_calories,
        warned = result.warning.is_some(),
        "projection computed"
    );

    Ok(Json(result))
}
