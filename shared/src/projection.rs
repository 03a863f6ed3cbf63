//! Week-by-week projection simulator
//!
//! Projects weight and body-composition trajectory under a fixed calorie
//! target while maintenance expenditure adapts. Each week the simulator
//! recomputes BMR from the current simulated weight, applies an
//! adaptive-thermogenesis factor, and derives the weight change from the
//! gap between the fixed target and the moving maintenance level.
//!
//! This is a deterministic arithmetic model, not a clinically validated
//! physiological one.

use crate::metabolism::{mifflin_st_jeor, ActivityLevel, BiologicalSex};
use crate::targets::{GoalDirection, TargetPace, KCAL_PER_KG};
use crate::types::GraphPoint;
use serde::{Deserialize, Serialize};

/// Simulations never run past one year, even when the implied duration
/// is longer.
pub const MAX_HORIZON_WEEKS: u32 = 52;

/// Fraction of weight lost that comes from fat during a cut.
const FAT_LOSS_FRACTION: f64 = 0.80;
/// Fraction of weight gained that becomes lean mass during a bulk.
const LEAN_GAIN_FRACTION: f64 = 0.50;

/// Starting state and fixed context for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub start_weight_kg: f64,
    /// Measured or assumed starting body fat percentage
    pub start_body_fat_percent: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: BiologicalSex,
    pub activity: ActivityLevel,
    /// Fixed daily intake for the whole horizon
    pub target_calories: f64,
    pub direction: GoalDirection,
}

/// Adaptive-thermogenesis factor for a simulated week.
///
/// During a sustained deficit, maintenance expenditure drifts down by 1%
/// per week, floored at a 10% total suppression. No adaptation is modeled
/// for a surplus.
pub fn adaptation_factor(direction: GoalDirection, week: u32) -> f64 {
    match direction {
        GoalDirection::Lose => (1.0 - 0.01 * week as f64).max(0.90),
        GoalDirection::Gain => 1.0,
    }
}

/// Number of weeks to simulate.
///
/// ByDate paces fix the horizon exactly; ByRate paces derive it from the
/// implied weekly change, capped at [`MAX_HORIZON_WEEKS`].
pub fn horizon_weeks(pace: TargetPace, target_change_kg: f64, daily_delta: f64) -> u32 {
    match pace {
        TargetPace::ByDate { weeks } => weeks,
        TargetPace::ByRate { .. } => {
            let weekly_kg = daily_delta.abs() * 7.0 / KCAL_PER_KG;
            let weeks = (target_change_kg / weekly_kg).ceil() as u32;
            weeks.min(MAX_HORIZON_WEEKS)
        }
    }
}

/// Run the projection, producing one [`GraphPoint`] per week from 0 to
/// `horizon_weeks` inclusive.
///
/// The per-step state (current weight and body fat) is threaded through
/// the loop explicitly; nothing persists across calls.
pub fn simulate(inputs: &SimulationInputs, horizon_weeks: u32) -> Vec<GraphPoint> {
    let mut graph_data = Vec::with_capacity(horizon_weeks as usize + 1);

    let mut current_weight = inputs.start_weight_kg;
    let mut current_bf = inputs.start_body_fat_percent;

    graph_data.push(GraphPoint {
        week: 0,
        weight: round2(current_weight),
        secondary_metric: round1(secondary_metric(
            inputs.direction,
            current_weight,
            current_bf,
        )),
    });

    for week in 1..=horizon_weeks {
        // Dynamic BMR from the current simulated weight. Always
        // Mifflin-St Jeor here, even when a measured body fat selected
        // Katch-McArdle for the headline BMR.
        let dynamic_bmr =
            mifflin_st_jeor(current_weight, inputs.height_cm, inputs.age_years, inputs.sex);

        let dynamic_tdee = dynamic_bmr
            * inputs.activity.multiplier()
            * adaptation_factor(inputs.direction, week);

        // The fixed calorie target against the moving maintenance level
        let actual_daily_delta = inputs.target_calories - dynamic_tdee;
        let weekly_weight_change = actual_daily_delta * 7.0 / KCAL_PER_KG;

        let previous_weight = current_weight;
        current_weight += weekly_weight_change;

        let secondary = match inputs.direction {
            GoalDirection::Lose => {
                // ~80% of the change comes from fat, 20% from lean mass
                let fat_mass = previous_weight * (current_bf / 100.0)
                    - FAT_LOSS_FRACTION * weekly_weight_change.abs();
                current_bf = fat_mass / current_weight * 100.0;
                current_bf
            }
            GoalDirection::Gain => {
                // ~50% of the surplus becomes lean mass; the body-fat
                // baseline itself is not advanced while gaining
                previous_weight * (1.0 - current_bf / 100.0)
                    + LEAN_GAIN_FRACTION * weekly_weight_change
            }
        };

        graph_data.push(GraphPoint {
            week,
            weight: round2(current_weight),
            secondary_metric: round1(secondary),
        });
    }

    graph_data
}

/// Week-0 secondary metric: body fat % when losing, lean mass when gaining.
fn secondary_metric(direction: GoalDirection, weight_kg: f64, body_fat_percent: f64) -> f64 {
    match direction {
        GoalDirection::Lose => body_fat_percent,
        GoalDirection::Gain => weight_kg * (1.0 - body_fat_percent / 100.0),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
