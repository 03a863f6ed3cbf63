//! Error types for the Nutrition Planner core

use thiserror::Error;

/// Validation failure for a single input parameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} {message}")]
    OutOfRange {
        field: &'static str,
        message: &'static str,
    },

    #[error("{field} is required")]
    Missing { field: &'static str },
}

impl ParameterError {
    /// Field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ParameterError::NotFinite { field }
            | ParameterError::OutOfRange { field, .. }
            | ParameterError::Missing { field } => field,
        }
    }

    /// Format as a user-friendly error message with the display label
    pub fn user_message(&self) -> String {
        let label = crate::validation::get_field_display_label(self.field());
        match self {
            ParameterError::NotFinite { .. } => format!("{}: must be a finite number", label),
            ParameterError::OutOfRange { message, .. } => format!("{}: {}", label, message),
            ParameterError::Missing { .. } => format!("{}: is required", label),
        }
    }
}
