//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the
//! calculation core and external systems.

pub mod classifier;
pub mod projection;

pub use classifier::{ActivityClassification, ActivityClassifier};
pub use projection::ProjectionService;
