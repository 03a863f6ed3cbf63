//! Form option endpoints
//!
//! Exposes the closed enumerations (activity levels, macro split
//! templates) with their labels and descriptions so UI collaborators can
//! render choices without duplicating the tables.

use axum::Json;
use nutrition_planner_shared::macros::{MacroSplit, MACRO_SPLITS};
use nutrition_planner_shared::metabolism::{ActivityLevel, ACTIVITY_LEVELS};
use serde::Serialize;

/// One selectable activity level
#[derive(Serialize)]
pub struct ActivityOption {
    pub level: ActivityLevel,
    pub label: &'static str,
    pub multiplier: f64,
    pub description: &'static str,
}

/// One selectable macro split template
#[derive(Serialize)]
pub struct MacroSplitOption {
    pub split: MacroSplit,
    pub label: &'static str,
    pub protein: f64,
    pub fats: f64,
    pub carbs: f64,
    pub description: &'static str,
}

/// Selectable options response
#[derive(Serialize)]
pub struct OptionsResponse {
    pub activity_levels: Vec<ActivityOption>,
    pub macro_splits: Vec<MacroSplitOption>,
}

/// GET /api/v1/options - List selectable activity levels and macro splits
pub async fn get_options() -> Json<OptionsResponse> {
    let activity_levels = ACTIVITY_LEVELS
        .into_iter()
        .map(|level| ActivityOption {
            level,
            label: level.label(),
            multiplier: level.multiplier(),
            description: level.description(),
        })
        .collect();

    let macro_splits = MACRO_SPLITS
        .into_iter()
        .map(|split| {
            let pct = split.percentages();
            MacroSplitOption {
                split,
                label: split.label(),
                protein: pct.protein,
                fats: pct.fats,
                carbs: pct.carbs,
                description: split.description(),
            }
        })
        .collect();

    Json(OptionsResponse {
        activity_levels,
        macro_splits,
    })
}
