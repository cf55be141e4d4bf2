use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LarderConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub auth: AuthConfig,
    pub limits: GenerationLimits,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Settings of the chat-completion gateway.
///
/// `api_key` stays optional: a missing key is reported per request, not at startup.
#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.8,
            max_tokens: 1000,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_audience: Option<String>,
}

/// Upper bounds applied to a generation request before a prompt is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationLimits {
    pub max_ingredients: usize,
    pub max_ingredient_length: usize,
    pub max_preferences_length: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_ingredients: 50,
            max_ingredient_length: 100,
            max_preferences_length: 500,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
