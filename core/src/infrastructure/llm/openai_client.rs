use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::ports::LLMClient,
};

/// Chat-completion client for OpenAI-compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    temperature: f32,
    max_tokens: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAILLMClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &LLMConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            model: config.model.clone(),
            endpoint: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn call_chat_completions(
        &self,
        request: ChatCompletionRequest<'_>,
    ) -> Result<String, CoreError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("Missing OpenAI API key");
            return Err(CoreError::MissingApiKey);
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI API request failed: {}", e);
                CoreError::Gateway {
                    status: e.status().map(|s| s.as_u16()),
                    message: "Failed to generate recipe".to_string(),
                    details: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::Gateway {
                status: Some(status.as_u16()),
                message: "Failed to generate recipe".to_string(),
                details: error_text,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!("Failed to decode OpenAI response: {}", e);
            CoreError::Gateway {
                status: Some(status.as_u16()),
                message: "Failed to generate recipe".to_string(),
                details: e.to_string(),
            }
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::Gateway {
                status: Some(status.as_u16()),
                message: "Failed to generate recipe".to_string(),
                details: "No response from LLM".to_string(),
            })?;

        debug!(raw_response = %content, "OpenAI response received");

        Ok(content)
    }
}

impl LLMClient for OpenAILLMClient {
    async fn generate_with_text(
        &self,
        system_instruction: String,
        prompt: String,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        self.call_chat_completions(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn config(server: &MockServer, api_key: Option<&str>) -> LLMConfig {
        LLMConfig {
            api_key: api_key.map(str::to_string),
            base_url: server.base_url(),
            ..LLMConfig::default()
        }
    }

    #[tokio::test]
    async fn sends_bearer_request_and_returns_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer sk-test")
                    .json_body(json!({
                        "model": "gpt-4o",
                        "messages": [
                            {"role": "system", "content": "be a chef"},
                            {"role": "user", "content": "eggs"}
                        ],
                        "temperature": 0.8,
                        "max_tokens": 1000
                    }));
                then.status(200).json_body(json!({
                    "choices": [{"message": {"role": "assistant", "content": "{\"title\":\"X\"}"}}]
                }));
            })
            .await;

        let client = OpenAILLMClient::new(&config(&server, Some("sk-test")));
        let content = client
            .generate_with_text("be a chef".to_string(), "eggs".to_string())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(content, "{\"title\":\"X\"}");
    }

    #[tokio::test]
    async fn missing_key_makes_no_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200);
            })
            .await;

        let client = OpenAILLMClient::new(&config(&server, None));
        assert!(!client.has_api_key());

        let err = client
            .generate_with_text("s".to_string(), "p".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::MissingApiKey);
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn upstream_failure_carries_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(429).body("rate limited");
            })
            .await;

        let client = OpenAILLMClient::new(&config(&server, Some("sk-test")));
        let err = client
            .generate_with_text("s".to_string(), "p".to_string())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Gateway {
                status: Some(429),
                message: "Failed to generate recipe".to_string(),
                details: "rate limited".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn empty_choices_is_a_gateway_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200).json_body(json!({ "choices": [] }));
            })
            .await;

        let client = OpenAILLMClient::new(&config(&server, Some("sk-test")));
        let err = client
            .generate_with_text("s".to_string(), "p".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Gateway { .. }));
    }
}
