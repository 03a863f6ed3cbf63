//! Activity classification API routes

use crate::error::ApiError;
use crate::services::ActivityClassification;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create activity routes
pub fn activity_routes() -> Router<AppState> {
    Router::new().route("/classify", post(classify_activity))
}

/// Classification request
#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyActivityRequest {
    /// Free-text description of weekly physical activity
    #[validate(length(min = 1, max = 500))]
    pub description: String,
}

/// Classification response
///
/// `classification` is null when the classifier is disabled or failed;
/// the caller should fall back to manual selection rather than treat
/// this as an error.
#[derive(Debug, Serialize)]
pub struct ClassifyActivityResponse {
    pub classification: Option<ActivityClassification>,
}

/// POST /api/v1/activity/classify - Map free text to an activity level
async fn classify_activity(
    State(state): State<AppState>,
    Json(req): Json<ClassifyActivityRequest>,
) -> Result<Json<ClassifyActivityResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let classification = state.classifier().classify(&req.description).await;

    Ok(Json(ClassifyActivityResponse { classification }))
}
