//! SQLite persistence layer for the SEO content rewriter.
//!
//! This crate provides async database operations for users, the single
//! configuration record, and the rewrite history, using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{Database, models::NewRewriteHistory, rewrite_history, stats};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:rewriter.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Record a rewrite
//!     let entry = NewRewriteHistory {
//!         keyword: "marketing digital".to_string(),
//!         original_content: "Texto original".to_string(),
//!         rewritten_content: "<p>Texto reescrito sobre marketing digital</p>".to_string(),
//!         seo_score: 30,
//!         word_count: 5,
//!         keyword_density: "20.0%".to_string(),
//!     };
//!     rewrite_history::save_rewrite_history(db.pool(), &entry).await?;
//!
//!     let summary = stats::get_stats(db.pool()).await?;
//!     println!("{} rewrites so far", summary.total_rewrites);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod rewrite_history;
pub mod seo_config;
pub mod stats;
pub mod user;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use models::{
    NewRewriteHistory, NewSeoConfig, NewUser, RewriteHistoryEntry, SeoConfig, StatsSummary, User,
};
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Handle to the rewriter store: users, the singleton config and rewrite history.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// The rewriter issues short, independent writes; a small pool is enough.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Open the rewriter store.
    ///
    /// Takes a SQLx SQLite URL such as `sqlite:data/rewriter.db?mode=rwc`; the
    /// file is created when missing. Call [`Database::migrate`] before the
    /// first config or history write.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/rewriter.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Open the rewriter store with an explicit connection limit.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(url, pool_size, "Opened rewriter store");

        Ok(Self { pool })
    }

    /// Create or upgrade the `users`, `seo_config` and `rewrite_history` tables.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Applying rewriter schema migrations");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Rewriter schema up to date");
        Ok(())
    }

    /// Pool handed to the `user`, `seo_config`, `rewrite_history` and `stats` functions.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close all connections; pending history writes finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
