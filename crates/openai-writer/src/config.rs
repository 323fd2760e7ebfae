//! Configuration for OpenAiWriter.

use rewrite_core::GeneratorError;
use std::env;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.openai.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Configuration for OpenAiWriter.
#[derive(Clone)]
pub struct OpenAiWriterConfig {
    /// API base URL.
    pub api_url: String,

    /// API key for authentication. Empty means requests must carry their own.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Optional organization header.
    pub organization: Option<String>,
}

impl std::fmt::Debug for OpenAiWriterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiWriterConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("model", &self.model)
            .field("organization", &self.organization)
            .finish()
    }
}

impl OpenAiWriterConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `OPENAI_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `OPENAI_API_URL` - API URL (default: https://api.openai.com)
    /// - `OPENAI_MODEL` - Model name (default: gpt-4o)
    /// - `OPENAI_ORGANIZATION` - Organization ID sent as `OpenAI-Organization`
    pub fn from_env() -> Result<Self, GeneratorError> {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeneratorError::Configuration("OPENAI_API_KEY not set".to_string()))?;

        let api_url = env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let organization = env::var("OPENAI_ORGANIZATION")
            .ok()
            .filter(|org| !org.trim().is_empty());

        Ok(Self {
            api_url,
            api_key,
            model,
            organization,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> OpenAiWriterConfigBuilder {
        OpenAiWriterConfigBuilder::default()
    }

    /// Chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

/// Builder for OpenAiWriterConfig.
#[derive(Debug)]
pub struct OpenAiWriterConfigBuilder {
    config: OpenAiWriterConfig,
}

impl Default for OpenAiWriterConfigBuilder {
    fn default() -> Self {
        Self {
            config: OpenAiWriterConfig {
                api_url: DEFAULT_API_URL.to_string(),
                api_key: String::new(),
                model: DEFAULT_MODEL.to_string(),
                organization: None,
            },
        }
    }
}

impl OpenAiWriterConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the organization.
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.config.organization = Some(organization.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OpenAiWriterConfig {
        self.config
    }
}
