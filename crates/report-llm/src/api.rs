//! OpenAI-compatible chat completion client.

use std::time::Duration;

use async_trait::async_trait;
use backoff::{backoff::Backoff, ExponentialBackoff};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::client::{LlmClient, LlmResponse};
use crate::error::LlmError;

/// Configuration for the HTTP LLM client.
#[derive(Debug, Clone)]
pub struct ApiLlmConfig {
    /// API base URL (e.g., "https://api.openai.com/v1")
    pub base_url: String,

    /// API key
    pub api_key: SecretString,

    /// Request timeout
    pub timeout: Duration,

    /// Maximum retries on failure
    pub max_retries: u32,
}

impl ApiLlmConfig {
    /// Create config for the OpenAI API.
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: SecretString::from(api_key.into()),
            timeout: Duration::from_secs(60),
            max_retries: 3,
        }
    }

    /// Create config from the `OPENAI_API_KEY` environment variable,
    /// honoring `OPENAI_BASE_URL` when set.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::Config("OPENAI_API_KEY is not set".to_string()))?;
        let mut config = Self::openai(api_key);
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

/// HTTP LLM client for OpenAI-compatible chat completion endpoints.
///
/// Requests use temperature 0.0 so identical prompts give stable responses
/// across re-runs of a stage.
pub struct ApiLlmClient {
    client: Client,
    config: ApiLlmConfig,
}

impl ApiLlmClient {
    /// Create a new client.
    pub fn new(config: ApiLlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Call the API with retry logic.
    async fn call_api(&self, model: &str, system: &str, user: &str) -> Result<String, LlmError> {
        let mut backoff = ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(120)),
            ..Default::default()
        };

        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(attempt = attempts, model, "Calling chat completion API");

            match self.make_request(model, system, user).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    if attempts >= self.config.max_retries {
                        error!(error = %e, "Max retries exceeded");
                        return Err(e);
                    }

                    match backoff.next_backoff() {
                        Some(duration) => {
                            warn!(
                                error = %e,
                                retry_in_ms = duration.as_millis(),
                                "API call failed, retrying"
                            );
                            tokio::time::sleep(duration).await;
                        }
                        None => {
                            error!(error = %e, "Backoff exhausted");
                            return Err(e);
                        }
                    }
                }
            }
        }
    }

    /// Make a single chat completion request.
    async fn make_request(&self, model: &str, system: &str, user: &str) -> Result<String, LlmError> {
        #[derive(Serialize)]
        struct ChatRequest {
            model: String,
            temperature: f32,
            messages: Vec<ChatMessage>,
        }

        #[derive(Serialize)]
        struct ChatMessage {
            role: String,
            content: String,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatMessageResponse,
        }

        #[derive(Deserialize)]
        struct ChatMessageResponse {
            content: String,
        }

        let mut messages = Vec::with_capacity(2);
        if !system.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: user.to_string(),
        });

        let request = ChatRequest {
            model: model.to_string(),
            temperature: 0.0,
            messages,
        };

        let url = format!("{}/chat/completions", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Api(e.to_string())
                }
            })?;

        if response.status() == 429 {
            return Err(LlmError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
        }

        let response_body: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        response_body
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| LlmError::Parse("No choices in response".to_string()))
    }
}

#[async_trait]
impl LlmClient for ApiLlmClient {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<LlmResponse, LlmError> {
        let text = self.call_api(model, system, user).await?;
        Ok(LlmResponse::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> ApiLlmConfig {
        ApiLlmConfig {
            base_url,
            api_key: SecretString::from("test-key".to_string()),
            timeout: Duration::from_secs(5),
            max_retries: 2,
        }
    }

    #[tokio::test]
    async fn test_complete_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "temperature": 0.0,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "Road safety"}}]
            })))
            .mount(&server)
            .await;

        let client = ApiLlmClient::new(test_config(server.uri())).unwrap();
        let response = client
            .complete("gpt-4o-mini", "Label the cluster.", "Some arguments")
            .await
            .unwrap();
        assert_eq!(response.text(), "Road safety");
    }

    #[tokio::test]
    async fn test_complete_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = ApiLlmClient::new(test_config(server.uri())).unwrap();
        let result = client.complete("gpt-4o-mini", "", "input").await;
        assert!(matches!(result, Err(LlmError::Api(_))));
    }

    #[tokio::test]
    async fn test_complete_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = ApiLlmClient::new(test_config(server.uri())).unwrap();
        let result = client.complete("gpt-4o-mini", "", "input").await;
        assert!(matches!(result, Err(LlmError::RateLimitExceeded)));
    }

    #[tokio::test]
    async fn test_complete_empty_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client = ApiLlmClient::new(test_config(server.uri())).unwrap();
        let result = client.complete("gpt-4o-mini", "", "input").await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[test]
    fn test_from_env_missing_key() {
        std::env::remove_var("OPENAI_API_KEY");
        assert!(matches!(ApiLlmConfig::from_env(), Err(LlmError::Config(_))));
    }
}
