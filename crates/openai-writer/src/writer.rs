//! OpenAiWriter implementation using the chat-completions API.

use async_trait::async_trait;
use reqwest::Client;
use rewrite_core::{GenerationRequest, GeneratorError, TextGenerator};
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
};
use crate::config::OpenAiWriterConfig;

/// A [`TextGenerator`] backed by the OpenAI chat-completions endpoint.
///
/// The writer is stateless: each request is a single user message and
/// nothing is retried.
pub struct OpenAiWriter {
    client: Client,
    config: OpenAiWriterConfig,
}

impl OpenAiWriter {
    /// Create a new OpenAiWriter with the given configuration.
    pub fn new(config: OpenAiWriterConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder().build().map_err(|e| {
            GeneratorError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            "OpenAiWriter initialized with model: {}, api: {}",
            config.model, config.api_url
        );

        Ok(Self { client, config })
    }

    /// Create an OpenAiWriter from environment variables.
    ///
    /// See [`OpenAiWriterConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, GeneratorError> {
        let config = OpenAiWriterConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiWriterConfig {
        &self.config
    }

    /// Pick the per-call key if present, else the configured one.
    fn resolve_key<'a>(&'a self, request: &'a GenerationRequest) -> Result<&'a str, GeneratorError> {
        request
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .or_else(|| Some(self.config.api_key.trim()).filter(|key| !key.is_empty()))
            .ok_or_else(|| GeneratorError::Configuration("OpenAI API key not configured".to_string()))
    }

    fn build_request(&self, request: &GenerationRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(request.prompt.clone())],
            max_tokens: Some(request.max_tokens),
            temperature: Some(request.temperature),
            response_format: request.json_output.then(ResponseFormat::json_object),
        }
    }

    /// Make a chat completion request to the API.
    async fn chat_completion(
        &self,
        request: &GenerationRequest,
    ) -> Result<ChatCompletionResponse, GeneratorError> {
        let api_key = self.resolve_key(request)?;
        let body = self.build_request(request);
        let url = self.config.completions_url();

        debug!("Sending request to OpenAI API: {:?}", request);

        let mut builder = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json");
        if let Some(ref organization) = self.config.organization {
            builder = builder.header("OpenAI-Organization", organization);
        }

        let response = builder
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &error_text));
        }

        response.json().await.map_err(|e| GeneratorError::Api {
            status: status.as_u16(),
            code: None,
            message: format!("Failed to parse response: {}", e),
        })
    }
}

/// Map an error response body to a [`GeneratorError`], keeping the
/// provider's structured code when it sent one.
fn api_error(status: u16, body: &str) -> GeneratorError {
    match serde_json::from_str::<ApiError>(body) {
        Ok(parsed) => GeneratorError::Api {
            status,
            code: parsed.error.code.or(parsed.error.error_type),
            message: parsed.error.message,
        },
        Err(_) => GeneratorError::Api {
            status,
            code: None,
            message: body.to_string(),
        },
    }
}

#[async_trait]
impl TextGenerator for OpenAiWriter {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError> {
        let completion = self.chat_completion(&request).await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        // An empty completion is a malformed reply, not a failed call.
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_else(|| {
                warn!("No content in completion {}, returning empty reply", completion.id);
                String::new()
            });

        Ok(text)
    }

    fn name(&self) -> &str {
        "OpenAiWriter"
    }

    fn has_credential(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewrite_core::{RewriteError, UpstreamKind};

    fn writer(api_key: &str) -> OpenAiWriter {
        let config = OpenAiWriterConfig::builder()
            .api_key(api_key)
            .model("gpt-test")
            .build();
        OpenAiWriter::new(config).unwrap()
    }

    #[test]
    fn test_build_request_json() {
        let writer = writer("sk-test");
        let request = writer.build_request(&GenerationRequest::json("prompt"));

        assert_eq!(request.model, "gpt-test");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content, "prompt");
        assert_eq!(request.max_tokens, Some(4000));
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.response_format, Some(ResponseFormat::json_object()));
    }

    #[test]
    fn test_build_request_text() {
        let writer = writer("sk-test");
        let mut request = GenerationRequest::json("prompt");
        request.json_output = false;
        assert!(writer.build_request(&request).response_format.is_none());
    }

    #[test]
    fn test_resolve_key() {
        let configured = writer("sk-config");
        let request = GenerationRequest::json("x");
        assert_eq!(configured.resolve_key(&request).unwrap(), "sk-config");

        let request = GenerationRequest::json("x").with_api_key(Some("sk-call".into()));
        assert_eq!(configured.resolve_key(&request).unwrap(), "sk-call");

        let request = GenerationRequest::json("x").with_api_key(Some("  ".into()));
        assert_eq!(configured.resolve_key(&request).unwrap(), "sk-config");

        let empty = writer("");
        assert!(!empty.has_credential());
        assert!(matches!(
            empty.resolve_key(&GenerationRequest::json("x")),
            Err(GeneratorError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let empty = writer("");
        let err = empty.generate(GenerationRequest::json("x")).await.unwrap_err();
        assert!(matches!(RewriteError::from(err), RewriteError::Configuration(_)));
    }

    #[test]
    fn test_api_error_mapping() {
        let body = r#"{"error":{"message":"Incorrect API key provided: sk-***","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let err = api_error(401, body);
        match RewriteError::from(err) {
            RewriteError::Upstream(upstream) => {
                assert_eq!(upstream.kind, UpstreamKind::CredentialRejected)
            }
            _ => panic!("Expected Upstream error"),
        }

        let body = r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","code":null}}"#;
        match api_error(429, body) {
            GeneratorError::Api { code, .. } => assert_eq!(code.as_deref(), Some("insufficient_quota")),
            _ => panic!("Expected Api error"),
        }

        match api_error(502, "<html>Bad gateway</html>") {
            GeneratorError::Api { status, code, message } => {
                assert_eq!(status, 502);
                assert!(code.is_none());
                assert_eq!(message, "<html>Bad gateway</html>");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_writer_name() {
        assert_eq!(writer("sk-test").name(), "OpenAiWriter");
    }
}
