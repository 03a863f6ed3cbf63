//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Pre-compute expensive resources**: the classifier's HTTP client is created once
//! 2. **Cheap cloning**: All fields use Arc or are already Clone-cheap
//! 3. **Immutable after creation**: State is read-only during request handling

use crate::config::AppConfig;
use crate::services::ActivityClassifier;
use std::sync::Arc;

/// Shared application state
///
/// This struct holds all shared resources that handlers need access to.
/// All fields are designed for cheap cloning across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized activity classifier with its HTTP client
    pub classifier: ActivityClassifier,
}

impl AppState {
    /// Create a new application state
    ///
    /// # Note
    /// This builds the classifier's HTTP client from the config, so it
    /// should only be called once at application startup.
    pub fn new(config: AppConfig) -> Self {
        let classifier = ActivityClassifier::new(&config.ai);

        Self {
            config: Arc::new(config),
            classifier,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the activity classifier
    #[inline]
    pub fn classifier(&self) -> &ActivityClassifier {
        &self.classifier
    }
}
