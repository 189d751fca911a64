use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::{sqlite::SqlitePoolOptions, FromRow, SqlitePool};
use tokio::sync::broadcast;

use crate::normalize::Article;

/// Derived bookmark identity: a stable hash over title and source name, so
/// the same logical article is recognized across renders regardless of
/// which object it came from.
pub fn article_identity(title: &str, source_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update([0x1f]);
    hasher.update(source_name.as_bytes());
    hex::encode(hasher.finalize())
}

/// Just enough of the article to re-render a saved card.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkEntry {
    pub identity: String,
    pub title: String,
    pub source_name: String,
    pub url: String,
    pub saved_at: String,
}

/// Broadcast to every open view when the persisted set changes.
#[derive(Debug, Clone)]
pub struct BookmarkChange {
    pub identity: String,
    pub bookmarked: bool,
}

pub struct BookmarkStore {
    pool: SqlitePool,
    changes: broadcast::Sender<BookmarkChange>,
}

impl BookmarkStore {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        let (changes, _) = broadcast::channel(64);

        Ok(Self { pool, changes })
    }

    pub async fn initialize(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bookmarks (
                identity TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                source_name TEXT NOT NULL,
                url TEXT NOT NULL,
                saved_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Subscribe to change notifications. Receivers should treat each event
    /// as a cue to re-read the persisted set; events may arrive in any order
    /// relative to other views' reads.
    pub fn subscribe(&self) -> broadcast::Receiver<BookmarkChange> {
        self.changes.subscribe()
    }

    pub async fn is_bookmarked(&self, article: &Article) -> anyhow::Result<bool> {
        let identity = article_identity(&article.title, &article.source_name);
        self.contains(&identity).await
    }

    /// Flip the saved state of an article and return the new state.
    pub async fn toggle(&self, article: &Article) -> anyhow::Result<bool> {
        let identity = article_identity(&article.title, &article.source_name);

        let bookmarked = if self.contains(&identity).await? {
            sqlx::query("DELETE FROM bookmarks WHERE identity = ?")
                .bind(&identity)
                .execute(&self.pool)
                .await?;
            false
        } else {
            sqlx::query(
                r#"
                INSERT INTO bookmarks (identity, title, source_name, url, saved_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&identity)
            .bind(&article.title)
            .bind(&article.source_name)
            .bind(&article.url)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
            true
        };

        // No receivers is fine; views subscribe lazily
        let _ = self.changes.send(BookmarkChange {
            identity,
            bookmarked,
        });

        Ok(bookmarked)
    }

    pub async fn all(&self) -> anyhow::Result<Vec<BookmarkEntry>> {
        let entries = sqlx::query_as::<_, BookmarkEntry>(
            "SELECT * FROM bookmarks ORDER BY saved_at DESC, identity",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    async fn contains(&self, identity: &str) -> anyhow::Result<bool> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookmarks WHERE identity = ?")
            .bind(identity)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0 > 0)
    }
}
