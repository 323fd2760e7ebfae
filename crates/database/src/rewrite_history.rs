//! Rewrite history persistence.

use sqlx::SqlitePool;

use crate::models::{NewRewriteHistory, RewriteHistoryEntry};
use crate::validation::{validate_keyword, validate_seo_score};
use crate::Result;

/// Default number of entries returned by [`get_rewrite_history`].
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Append a history entry. The timestamp is assigned by the store.
pub async fn save_rewrite_history(
    pool: &SqlitePool,
    entry: &NewRewriteHistory,
) -> Result<RewriteHistoryEntry> {
    validate_keyword(&entry.keyword)?;
    validate_seo_score(entry.seo_score)?;

    let saved = sqlx::query_as::<_, RewriteHistoryEntry>(
        r#"
        INSERT INTO rewrite_history (keyword, original_content, rewritten_content,
                                     seo_score, word_count, keyword_density)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, keyword, original_content, rewritten_content,
                  seo_score, word_count, keyword_density, created_at
        "#,
    )
    .bind(&entry.keyword)
    .bind(&entry.original_content)
    .bind(&entry.rewritten_content)
    .bind(entry.seo_score)
    .bind(entry.word_count)
    .bind(&entry.keyword_density)
    .fetch_one(pool)
    .await?;

    Ok(saved)
}

/// Get the most recent history entries, newest first.
pub async fn get_rewrite_history(pool: &SqlitePool, limit: i64) -> Result<Vec<RewriteHistoryEntry>> {
    let rows = sqlx::query_as::<_, RewriteHistoryEntry>(
        r#"
        SELECT id, keyword, original_content, rewritten_content,
               seo_score, word_count, keyword_density, created_at
        FROM rewrite_history
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit.max(0))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get the most recent [`DEFAULT_HISTORY_LIMIT`] entries.
pub async fn get_recent_history(pool: &SqlitePool) -> Result<Vec<RewriteHistoryEntry>> {
    get_rewrite_history(pool, DEFAULT_HISTORY_LIMIT).await
}

/// Load every history entry, oldest first.
pub async fn list_all_history(pool: &SqlitePool) -> Result<Vec<RewriteHistoryEntry>> {
    let rows = sqlx::query_as::<_, RewriteHistoryEntry>(
        r#"
        SELECT id, keyword, original_content, rewritten_content,
               seo_score, word_count, keyword_density, created_at
        FROM rewrite_history
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
