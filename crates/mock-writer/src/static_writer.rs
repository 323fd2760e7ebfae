//! Static writer - replies with canned text.

use async_trait::async_trait;
use rewrite_core::{GenerationRequest, GeneratorError, TextGenerator};
use tokio::sync::Mutex;

/// A generator that always returns the same reply.
///
/// Every request is recorded so tests can inspect the prompt that was sent.
#[derive(Debug, Default)]
pub struct StaticWriter {
    reply: String,
    has_credential: bool,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StaticWriter {
    /// Create a writer with its own credential.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            has_credential: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a writer without a credential of its own.
    ///
    /// Requests still succeed; the rewriter decides whether to call it.
    pub fn without_credential(reply: impl Into<String>) -> Self {
        Self {
            has_credential: false,
            ..Self::new(reply)
        }
    }

    /// All requests received so far.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().await.clone()
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().await.last().cloned()
    }

    /// Number of requests received.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl TextGenerator for StaticWriter {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError> {
        self.requests.lock().await.push(request);
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "StaticWriter"
    }

    fn has_credential(&self) -> bool {
        self.has_credential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_reply_and_recording() {
        let writer = StaticWriter::new("resposta");

        let reply = writer.generate(GenerationRequest::json("primeiro")).await.unwrap();
        assert_eq!(reply, "resposta");
        writer.generate(GenerationRequest::json("segundo")).await.unwrap();

        assert_eq!(writer.call_count().await, 2);
        assert_eq!(writer.last_request().await.unwrap().prompt, "segundo");
        assert!(writer.has_credential());
    }

    #[test]
    fn test_without_credential() {
        let writer = StaticWriter::without_credential("x");
        assert!(!writer.has_credential());
        assert_eq!(writer.name(), "StaticWriter");
    }
}
