//! The text-generation seam.
//!
//! The rewriter talks to the language model only through [`TextGenerator`],
//! so any provider (or a test double) can be plugged in.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::{RewriteError, UpstreamError};

/// Maximum number of output tokens requested for a rewrite.
pub const MAX_OUTPUT_TOKENS: u32 = 4000;

/// Sampling temperature used for rewrites.
pub const TEMPERATURE: f32 = 0.7;

/// A single completion request.
#[derive(Clone, PartialEq)]
pub struct GenerationRequest {
    /// The full instruction, sent as one user message.
    pub prompt: String,
    /// Output token bound.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Ask the provider for a strict JSON object.
    pub json_output: bool,
    /// Per-call credential overriding the generator's own.
    pub api_key: Option<String>,
}

impl GenerationRequest {
    /// A strict-JSON request with the rewrite's fixed sampling settings.
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
            json_output: true,
            api_key: None,
        }
    }

    /// Attach a per-call credential.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("prompt_chars", &self.prompt.chars().count())
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("json_output", &self.json_output)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Errors a generator can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// The generator cannot run (missing credential, bad client setup).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),

    /// The provider answered with an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status.
        status: u16,
        /// Structured provider error code, if any.
        code: Option<String>,
        /// Provider message.
        message: String,
    },
}

impl From<GeneratorError> for RewriteError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::Configuration(msg) => RewriteError::Configuration(msg),
            GeneratorError::Network(msg) => {
                RewriteError::Upstream(UpstreamError::classified(None, None, msg))
            }
            GeneratorError::Api {
                status,
                code,
                message,
            } => RewriteError::Upstream(UpstreamError::classified(
                code.as_deref(),
                Some(status),
                message,
            )),
        }
    }
}

/// A language-model backend that turns an instruction into text.
///
/// This trait is object-safe and can be used as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one completion and return the raw reply text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Whether the generator has a credential of its own.
    ///
    /// When this is false, every request must carry a per-call key.
    fn has_credential(&self) -> bool {
        true
    }
}
