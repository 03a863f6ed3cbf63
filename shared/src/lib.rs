//! Nutrition Planner Shared Library
//!
//! This crate contains the pure calculation core used across the backend
//! and WASM modules: metabolic rate estimation, calorie target resolution,
//! the week-by-week projection simulator, and macro allocation.

pub mod calculator;
pub mod errors;
pub mod macros;
pub mod metabolism;
pub mod projection;
pub mod targets;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use calculator::{compute_projection, compute_projection_at};
pub use errors::*;
pub use macros::{MacroGrams, MacroPercentages, MacroSplit};
pub use metabolism::{ActivityLevel, BiologicalSex};
pub use targets::{GoalDirection, TargetPace, TargetResolution};
pub use types::{CalculationResult, GraphPoint, ProjectionParameters};
