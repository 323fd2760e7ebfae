//! Error types for rewrite operations.

use std::fmt;

use thiserror::Error;

/// Kind of failure reported by the text-generation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    /// The provider refused the API credential.
    CredentialRejected,
    /// The account ran out of quota or credits.
    QuotaExceeded,
    /// Too many requests in a short window.
    RateLimited,
    /// Anything else.
    Unknown,
}

impl UpstreamKind {
    /// Classify a provider failure.
    ///
    /// The structured error code and the HTTP status are checked first. The
    /// message text is only searched when neither identifies the failure.
    pub fn classify(code: Option<&str>, status: Option<u16>, message: &str) -> Self {
        match code {
            Some("invalid_api_key") | Some("invalid_authentication") => {
                return Self::CredentialRejected
            }
            Some("insufficient_quota") | Some("billing_hard_limit_reached") => {
                return Self::QuotaExceeded
            }
            Some("rate_limit_exceeded") => return Self::RateLimited,
            _ => {}
        }

        if matches!(status, Some(401) | Some(403)) {
            return Self::CredentialRejected;
        }

        let lower = message.to_lowercase();
        if lower.contains("api key") {
            Self::CredentialRejected
        } else if lower.contains("quota") {
            Self::QuotaExceeded
        } else if lower.contains("rate limit") || status == Some(429) {
            Self::RateLimited
        } else {
            Self::Unknown
        }
    }

    /// Short machine-friendly label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CredentialRejected => "credential_rejected",
            Self::QuotaExceeded => "quota_exceeded",
            Self::RateLimited => "rate_limited",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text-generation call itself failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("upstream error ({kind}): {message}")]
pub struct UpstreamError {
    /// Classified failure kind.
    pub kind: UpstreamKind,
    /// Provider message, unchanged.
    pub message: String,
}

impl UpstreamError {
    /// Build an upstream error, classifying it from the available details.
    pub fn classified(code: Option<&str>, status: Option<u16>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: UpstreamKind::classify(code, status, &message),
            message,
        }
    }

    /// Message suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self.kind {
            UpstreamKind::CredentialRejected => {
                "Chave de API inválida. Verifique sua chave da OpenAI.".to_string()
            }
            UpstreamKind::QuotaExceeded => {
                "Cota da API excedida. Verifique seu plano e faturamento na OpenAI.".to_string()
            }
            UpstreamKind::RateLimited => {
                "Limite de requisições atingido. Aguarde alguns instantes e tente novamente."
                    .to_string()
            }
            UpstreamKind::Unknown => format!("Erro ao reescrever o conteúdo: {}", self.message),
        }
    }
}

/// Errors that terminate a rewrite request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// No usable API credential.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The provider call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RewriteError {
    /// Message suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            RewriteError::Configuration(msg) => msg.clone(),
            RewriteError::Upstream(err) => err.user_message(),
        }
    }
}

/// A case-study lookup failed. Recovered locally by the rewriter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("case study lookup failed: {0}")]
pub struct LookupError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefers_code() {
        let kind = UpstreamKind::classify(Some("insufficient_quota"), Some(429), "whatever");
        assert_eq!(kind, UpstreamKind::QuotaExceeded);

        let kind = UpstreamKind::classify(Some("rate_limit_exceeded"), Some(429), "quota");
        assert_eq!(kind, UpstreamKind::RateLimited);

        let kind = UpstreamKind::classify(Some("invalid_api_key"), None, "");
        assert_eq!(kind, UpstreamKind::CredentialRejected);
    }

    #[test]
    fn test_classify_uses_status() {
        assert_eq!(
            UpstreamKind::classify(None, Some(401), "unauthorized"),
            UpstreamKind::CredentialRejected
        );
        assert_eq!(
            UpstreamKind::classify(None, Some(429), "slow down"),
            UpstreamKind::RateLimited
        );
    }

    #[test]
    fn test_classify_falls_back_to_text() {
        assert_eq!(
            UpstreamKind::classify(None, None, "Incorrect API key provided"),
            UpstreamKind::CredentialRejected
        );
        assert_eq!(
            UpstreamKind::classify(None, None, "You exceeded your current quota"),
            UpstreamKind::QuotaExceeded
        );
        assert_eq!(
            UpstreamKind::classify(None, None, "Rate limit reached for gpt-4o"),
            UpstreamKind::RateLimited
        );
        assert_eq!(
            UpstreamKind::classify(None, Some(500), "internal server error"),
            UpstreamKind::Unknown
        );
    }

    #[test]
    fn test_user_messages() {
        let err = UpstreamError::classified(None, None, "connection reset");
        assert_eq!(err.kind, UpstreamKind::Unknown);
        assert!(err.user_message().contains("connection reset"));

        let err = RewriteError::from(UpstreamError::classified(None, Some(401), "nope"));
        assert!(err.user_message().contains("Chave de API"));

        let err = RewriteError::Configuration("OPENAI_API_KEY not set".to_string());
        assert_eq!(err.user_message(), "OPENAI_API_KEY not set");
    }
}
