//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user of the rewriter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Store-assigned ID.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Password hash, never the plain password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Fields supplied when creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// The single stored configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SeoConfig {
    /// Always 1.
    pub id: i64,
    /// OpenAI API key, if stored.
    #[serde(skip_serializing)]
    pub openai_api_key: Option<String>,
    /// Model name (e.g., "gpt-4o").
    pub model: String,
    /// Default company name for rewrites.
    pub company_name: Option<String>,
    /// Default reference link for rewrites.
    pub default_link: Option<String>,
    /// Default author name.
    pub author_name: Option<String>,
    /// Default author description.
    pub author_description: Option<String>,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Fields supplied when saving the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewSeoConfig {
    pub openai_api_key: Option<String>,
    pub model: String,
    pub company_name: Option<String>,
    pub default_link: Option<String>,
    pub author_name: Option<String>,
    pub author_description: Option<String>,
}

/// One past rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RewriteHistoryEntry {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Target keyword.
    pub keyword: String,
    /// Content before the rewrite.
    pub original_content: String,
    /// Content after the rewrite.
    pub rewritten_content: String,
    /// SEO score, 1-100.
    pub seo_score: i64,
    /// Word count of the rewritten content.
    pub word_count: i64,
    /// Keyword density (e.g., "2.5%").
    pub keyword_density: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Fields supplied when recording a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRewriteHistory {
    pub keyword: String,
    pub original_content: String,
    pub rewritten_content: String,
    pub seo_score: i64,
    pub word_count: i64,
    pub keyword_density: String,
}

/// Aggregate over all history entries. Computed, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Number of rewrites.
    pub total_rewrites: i64,
    /// Mean SEO score, rounded.
    pub average_score: i64,
    /// Sum of word counts.
    pub total_words: i64,
}
