//! The single configuration record.
//!
//! The row is pinned to `id = 1` and written with an upsert, so there is
//! never more than one configuration and never a moment with none.

use sqlx::SqlitePool;

use crate::models::{NewSeoConfig, SeoConfig};
use crate::validation::{validate_link, validate_model_length};
use crate::Result;

/// Primary key of the configuration row.
pub const CONFIG_ID: i64 = 1;

/// Get the current configuration, if one was saved.
pub async fn get_config(pool: &SqlitePool) -> Result<Option<SeoConfig>> {
    let config = sqlx::query_as::<_, SeoConfig>(
        r#"
        SELECT id, openai_api_key, model, company_name, default_link,
               author_name, author_description, updated_at
        FROM seo_config
        ORDER BY updated_at DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(config)
}

/// Replace the configuration.
pub async fn save_config(pool: &SqlitePool, config: &NewSeoConfig) -> Result<SeoConfig> {
    validate_model_length(&config.model)?;
    if let Some(link) = config.default_link.as_deref() {
        validate_link(link)?;
    }

    let saved = sqlx::query_as::<_, SeoConfig>(
        r#"
        INSERT INTO seo_config (id, openai_api_key, model, company_name, default_link,
                                author_name, author_description, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, datetime('now'))
        ON CONFLICT(id) DO UPDATE SET
            openai_api_key = excluded.openai_api_key,
            model = excluded.model,
            company_name = excluded.company_name,
            default_link = excluded.default_link,
            author_name = excluded.author_name,
            author_description = excluded.author_description,
            updated_at = excluded.updated_at
        RETURNING id, openai_api_key, model, company_name, default_link,
                  author_name, author_description, updated_at
        "#,
    )
    .bind(CONFIG_ID)
    .bind(&config.openai_api_key)
    .bind(config.model.trim())
    .bind(&config.company_name)
    .bind(&config.default_link)
    .bind(&config.author_name)
    .bind(&config.author_description)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Saved configuration (model: {})", saved.model);

    Ok(saved)
}

/// Count stored configuration rows.
pub async fn count_configs(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM seo_config
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
