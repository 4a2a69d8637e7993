// src/config.rs
use std::env;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// Process-wide configuration, read once at startup and passed by value.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Settings {
    /// Read settings from the environment. A blank `OPENAI_API_KEY` counts
    /// as absent; an unparseable `OPENAI_TEMPERATURE` keeps the default.
    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let model = env::var("OPENAI_MODEL")
            .ok()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match env::var("OPENAI_TEMPERATURE") {
            Ok(raw) => match raw.trim().parse::<f32>() {
                Ok(t) => t,
                Err(_) => {
                    tracing::warn!(value = %raw, "invalid OPENAI_TEMPERATURE, using default");
                    DEFAULT_TEMPERATURE
                }
            },
            Err(_) => DEFAULT_TEMPERATURE,
        };

        Self { api_key, model, temperature }
    }

    pub fn llm_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
