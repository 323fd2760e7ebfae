//! Failing writer - every request errors.

use async_trait::async_trait;
use rewrite_core::{GenerationRequest, GeneratorError, TextGenerator};
use tokio::sync::Mutex;

/// A generator that fails every request with the same error.
#[derive(Debug)]
pub struct FailingWriter {
    error: GeneratorError,
    calls: Mutex<usize>,
}

impl FailingWriter {
    pub fn new(error: GeneratorError) -> Self {
        Self {
            error,
            calls: Mutex::new(0),
        }
    }

    /// Fail with an HTTP error from the provider.
    pub fn api(status: u16, code: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(GeneratorError::Api {
            status,
            code: code.map(str::to_string),
            message: message.into(),
        })
    }

    /// Number of requests received.
    pub async fn call_count(&self) -> usize {
        *self.calls.lock().await
    }
}

#[async_trait]
impl TextGenerator for FailingWriter {
    async fn generate(&self, _request: GenerationRequest) -> Result<String, GeneratorError> {
        *self.calls.lock().await += 1;
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "FailingWriter"
    }
}
