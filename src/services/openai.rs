// src/services/openai.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Settings;

const API_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("completion response had no message content")]
    MalformedPayload,
}

/// Narrow seam over the external completion service so the responder's
/// fallback-on-failure logic is testable without the network.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the OpenAI chat completions endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
}

impl OpenAiClient {
    /// Build a client from settings. Returns `None` when no API key is
    /// configured, which selects the fallback-only responder.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let api_key = settings.api_key.clone()?;
        Some(Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            model: settings.model.clone(),
            temperature: settings.temperature,
            base_url: API_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![
                ApiMessage { role: "system", content: system_prompt },
                ApiMessage { role: "user", content: user_message },
            ],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status, body });
        }

        let payload: ChatCompletionResponse = response.json().await?;
        payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(CompletionError::MalformedPayload)
    }
}
