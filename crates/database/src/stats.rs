//! Aggregate statistics over the rewrite history.

use sqlx::SqlitePool;

use crate::models::{RewriteHistoryEntry, StatsSummary};
use crate::rewrite_history::list_all_history;
use crate::Result;

/// Compute statistics over every history entry.
///
/// The whole table is loaded and reduced here, so cost grows with history size.
pub async fn get_stats(pool: &SqlitePool) -> Result<StatsSummary> {
    let entries = list_all_history(pool).await?;
    Ok(summarize(&entries))
}

/// Reduce history entries to count, rounded mean score and total words.
pub fn summarize(entries: &[RewriteHistoryEntry]) -> StatsSummary {
    if entries.is_empty() {
        return StatsSummary::default();
    }

    let total_rewrites = entries.len() as i64;
    let score_sum: i64 = entries.iter().map(|e| e.seo_score).sum();
    let total_words: i64 = entries.iter().map(|e| e.word_count).sum();

    StatsSummary {
        total_rewrites,
        average_score: (score_sum as f64 / total_rewrites as f64).round() as i64,
        total_words,
    }
}
