//! Remote API key validation against the Groq chat-completions endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use crate::config::ValidationConfig;
use crate::error::PanelError;
use crate::store::SecretString;

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const VALIDATION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The endpoint answered but refused the key. `message` is the remote
    /// `error.message` or `API error: <status>`.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{message}")]
    Network { message: String },
}

#[async_trait]
pub trait KeyValidator: Send + Sync {
    /// Send exactly one request authorized with `api_key`.
    async fn validate(&self, api_key: &SecretString) -> Result<(), ValidationError>;
}

/// Validates a key with a minimal chat completion.
pub struct GroqValidator {
    endpoint: String,
    model: String,
    http_client: Client,
}

impl GroqValidator {
    pub fn new(config: &ValidationConfig) -> Result<Self, PanelError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| PanelError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request_body(&self) -> serde_json::Value {
        json!({
            "messages": [
                {
                    "role": "system",
                    "content": "You are a helpful assistant."
                },
                {
                    "role": "user",
                    "content": "Hello"
                }
            ],
            "model": self.model,
            "temperature": 0.7,
            "max_tokens": 10
        })
    }
}

#[async_trait]
impl KeyValidator for GroqValidator {
    async fn validate(&self, api_key: &SecretString) -> Result<(), ValidationError> {
        let body = self.build_request_body();

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key.expose()))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ValidationError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(parse_error_response(status.as_u16(), &text));
        }

        // Some gateways answer 200 with an error object
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(json) if json.get("error").is_some_and(|e| !e.is_null()) => {
                Err(parse_error_response(status.as_u16(), &text))
            }
            _ => Ok(()),
        }
    }
}

fn parse_error_response(status: u16, body: &str) -> ValidationError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json["error"]["message"]
                .as_str()
                .filter(|m| !m.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("API error: {}", status));

    ValidationError::Rejected { status, message }
}
