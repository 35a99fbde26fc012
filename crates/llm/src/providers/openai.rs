//! OpenAI completion provider.
//!
//! Talks to the OpenAI text completions API
//! (https://platform.openai.com/docs/api-reference/completions) with
//! Bearer authentication.

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use faqdex_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// OpenAI API request format.
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// OpenAI API response format.
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    model: String,
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    text: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// OpenAI LLM client.
pub struct OpenAiClient {
    /// Base URL for the OpenAI API
    base_url: String,

    /// API key sent as a Bearer token
    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new OpenAI client against the public API endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url("https://api.openai.com", api_key)
    }

    /// Create a new OpenAI client with a custom base URL
    /// (OpenAI-compatible gateways).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Convert LlmRequest to OpenAI format.
    ///
    /// The completions endpoint has no separate system message; when a
    /// system prompt is present it is prepended to the prompt text.
    fn to_openai_request(&self, request: &LlmRequest) -> OpenAiRequest {
        let prompt = match &request.system {
            Some(system) => format!("{}\n\n{}", system, request.prompt),
            None => request.prompt.clone(),
        };

        OpenAiRequest {
            model: request.model.clone(),
            prompt,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    /// Convert OpenAI response to LlmResponse.
    fn convert_response(&self, response: OpenAiResponse) -> AppResult<LlmResponse> {
        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| AppError::Llm("OpenAI response contained no choices".to_string()))?;

        let usage = response
            .usage
            .map(|u| LlmUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(LlmResponse {
            content,
            model: response.model,
            usage,
        })
    }
}

#[async_trait::async_trait]
impl LlmClient for OpenAiClient {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        tracing::info!("Sending completion request to OpenAI");
        tracing::debug!("Model: {}", request.model);

        let openai_request = self.to_openai_request(request);
        let url = format!("{}/v1/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to OpenAI: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "OpenAI API error ({}): {}",
                status, error_text
            )));
        }

        let openai_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse OpenAI response: {}", e)))?;

        tracing::info!("Received completion from OpenAI");

        self.convert_response(openai_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_client_creation() {
        let client = OpenAiClient::new("sk-test");
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.base_url, "https://api.openai.com");
    }

    #[test]
    fn test_request_conversion() {
        let client = OpenAiClient::new("sk-test");
        let request = LlmRequest::new("Hello", "gpt-3.5-turbo-instruct")
            .with_temperature(1.0)
            .with_max_tokens(50);

        let openai_req = client.to_openai_request(&request);
        assert_eq!(openai_req.model, "gpt-3.5-turbo-instruct");
        assert_eq!(openai_req.prompt, "Hello");
        assert_eq!(openai_req.temperature, Some(1.0));
        assert_eq!(openai_req.max_tokens, Some(50));
    }

    #[test]
    fn test_system_prompt_prepended() {
        let client = OpenAiClient::new("sk-test");
        let request =
            LlmRequest::new("Question?", "gpt-3.5-turbo-instruct").with_system("Answer briefly.");

        let openai_req = client.to_openai_request(&request);
        assert!(openai_req.prompt.starts_with("Answer briefly."));
        assert!(openai_req.prompt.ends_with("Question?"));
    }

    #[test]
    fn test_response_conversion() {
        let client = OpenAiClient::new("sk-test");
        let response = OpenAiResponse {
            model: "gpt-3.5-turbo-instruct".to_string(),
            choices: vec![OpenAiChoice {
                text: "Click forgot password.".to_string(),
            }],
            usage: Some(OpenAiUsage {
                prompt_tokens: 40,
                completion_tokens: 6,
            }),
        };

        let converted = client.convert_response(response).unwrap();
        assert_eq!(converted.content, "Click forgot password.");
        assert_eq!(converted.usage.total_tokens, 46);
    }

    #[test]
    fn test_empty_choices_rejected() {
        let client = OpenAiClient::new("sk-test");
        let response = OpenAiResponse {
            model: "gpt-3.5-turbo-instruct".to_string(),
            choices: vec![],
            usage: None,
        };

        assert!(client.convert_response(response).is_err());
    }
}
