//! Input validation applied before writes.

use std::fmt;

use url::Url;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid link format.
    InvalidUrl(String),
    /// Invalid username characters.
    InvalidUsername(String),
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Number outside the allowed range.
    OutOfRange { field: String, min: i64, max: i64, actual: i64 },
    /// Empty value where one is required.
    Empty(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ValidationError::InvalidUsername(msg) => write!(f, "Invalid username: {}", msg),
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(f, "{} must be between {} and {} (got {})", field, min, max, actual),
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum allowed length for usernames.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Maximum allowed length for model names.
pub const MAX_MODEL_LENGTH: usize = 64;

/// Maximum allowed length for links.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum allowed length for keywords.
pub const MAX_KEYWORD_LENGTH: usize = 200;

/// Validate a username.
///
/// Usernames are 1-64 characters of letters, digits, `.`, `_` or `-`.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Empty("username".to_string()));
    }

    let length = username.chars().count();
    if length > MAX_USERNAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LENGTH,
            actual: length,
        });
    }

    if let Some(c) = username
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(ValidationError::InvalidUsername(format!(
            "invalid character '{}'",
            c
        )));
    }

    Ok(())
}

/// Validate a model name length.
pub fn validate_model_length(model: &str) -> Result<(), ValidationError> {
    let model = model.trim();

    if model.is_empty() {
        return Err(ValidationError::Empty("model".to_string()));
    }

    if model.len() > MAX_MODEL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "model".to_string(),
            max: MAX_MODEL_LENGTH,
            actual: model.len(),
        });
    }

    Ok(())
}

/// Validate an absolute http(s) link.
pub fn validate_link(link: &str) -> Result<(), ValidationError> {
    let link = link.trim();

    if link.is_empty() {
        return Err(ValidationError::Empty("link".to_string()));
    }

    if link.len() > MAX_URL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "link".to_string(),
            max: MAX_URL_LENGTH,
            actual: link.len(),
        });
    }

    if link.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidUrl(
            "cannot contain whitespace".to_string(),
        ));
    }

    let url = Url::parse(link).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }

    let host = url
        .host_str()
        .ok_or_else(|| ValidationError::InvalidUrl("missing host".to_string()))?;

    if host.split('.').any(str::is_empty) {
        return Err(ValidationError::InvalidUrl(format!(
            "malformed host '{}'",
            host
        )));
    }

    Ok(())
}

/// Validate a keyword.
pub fn validate_keyword(keyword: &str) -> Result<(), ValidationError> {
    let keyword = keyword.trim();

    if keyword.is_empty() {
        return Err(ValidationError::Empty("keyword".to_string()));
    }

    let length = keyword.chars().count();
    if length > MAX_KEYWORD_LENGTH {
        return Err(ValidationError::TooLong {
            field: "keyword".to_string(),
            max: MAX_KEYWORD_LENGTH,
            actual: length,
        });
    }

    Ok(())
}

/// Validate an SEO score.
pub fn validate_seo_score(score: i64) -> Result<(), ValidationError> {
    if !(1..=100).contains(&score) {
        return Err(ValidationError::OutOfRange {
            field: "seo_score".to_string(),
            min: 1,
            max: 100,
            actual: score,
        });
    }

    Ok(())
}
