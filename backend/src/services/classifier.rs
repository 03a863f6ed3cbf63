//! AI-assisted activity level classification
//!
//! Maps a free-text description of weekly physical activity to one of the
//! five permitted activity levels by asking an Ollama-compatible chat
//! endpoint for a JSON verdict. Strictly advisory: any failure (endpoint
//! down, malformed reply, feature disabled) yields no classification and
//! the caller falls back to manual selection.

use crate::config::AiConfig;
use nutrition_planner_shared::metabolism::ActivityLevel;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// A resolved classification for a free-text activity description
#[derive(Debug, Clone, Serialize)]
pub struct ActivityClassification {
    pub level: ActivityLevel,
    pub multiplier: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Chat request payload (Ollama-compatible)
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    format: &'a str,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

/// Chat response payload
#[derive(Deserialize)]
struct ChatResponse {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: String,
}

/// The JSON object the model is instructed to produce
#[derive(Deserialize)]
struct ClassifierVerdict {
    value: f64,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Activity classifier backed by an LLM chat endpoint
///
/// The HTTP client is created once at startup and shared; cloning the
/// classifier is cheap.
#[derive(Clone)]
pub struct ActivityClassifier {
    enabled: bool,
    base_url: String,
    model: String,
    api_key: Option<Secret<String>>,
    client: reqwest::Client,
}

impl ActivityClassifier {
    /// Build a classifier from configuration
    pub fn new(config: &AiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            enabled: config.enabled,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone().map(Secret::new),
            client,
        }
    }

    /// Whether the classifier is configured to run
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Classify a free-text activity description.
    ///
    /// Returns `None` when disabled, when the description is blank, or on
    /// any transport/parse failure. A multiplier outside the five
    /// permitted constants snaps to the nearest one.
    pub async fn classify(&self, description: &str) -> Option<ActivityClassification> {
        if !self.enabled || description.trim().is_empty() {
            return None;
        }

        match self.request_verdict(description).await {
            Ok(verdict) => {
                let level = ActivityLevel::from_multiplier(verdict.value)
                    .unwrap_or_else(|| ActivityLevel::nearest(verdict.value));
                debug!(
                    raw_value = verdict.value,
                    level = %level,
                    "activity description classified"
                );
                Some(ActivityClassification {
                    level,
                    multiplier: level.multiplier(),
                    reasoning: verdict.reasoning,
                })
            }
            Err(e) => {
                warn!("Activity classification failed: {e}. Falling back to manual selection.");
                None
            }
        }
    }

    async fn request_verdict(&self, description: &str) -> anyhow::Result<ClassifierVerdict> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: classification_prompt(description),
            }],
            stream: false,
            format: "json",
        };

        let mut request = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await?.error_for_status()?;
        let reply: ChatResponse = response.json().await?;
        let verdict: ClassifierVerdict = serde_json::from_str(&reply.message.content)?;
        Ok(verdict)
    }
}

/// Prompt instructing the model to pick one of the five multipliers
fn classification_prompt(description: &str) -> String {
    format!(
        "Analyze the following user description of their weekly physical activity \
         and map it to the most appropriate standard activity level.\n\n\
         User Description: \"{description}\"\n\n\
         Available Levels:\n\
         - Sedentary (1.2): Little or no exercise, desk job.\n\
         - Lightly Active (1.375): Light exercise/sports 1-3 days/week.\n\
         - Moderately Active (1.55): Moderate exercise/sports 3-5 days/week.\n\
         - Very Active (1.725): Hard exercise/sports 6-7 days/week.\n\
         - Extra Active (1.9): Very hard daily exercise & physical job or 2x training.\n\n\
         Return strictly a JSON object with a \"value\" property matching one of the \
         numeric multipliers (1.2, 1.375, 1.55, 1.725, 1.9) and an optional \
         \"reasoning\" string."
    )
}
