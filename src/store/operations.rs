//! Snapshot store operations
//!
//! Two keys are mirrored for the widget: `progress` (one decimal) and
//! `dataDownloaded` (two decimals). An absent key reads as zero.

use anyhow::Result;
use chrono::Utc;
use sqlx::{Pool, Row, Sqlite};
use tracing::debug;

/// Key for the persisted cosmetic progress percentage
pub const KEY_PROGRESS: &str = "progress";

/// Key for the persisted cumulative megabyte counter
pub const KEY_DATA_DOWNLOADED: &str = "dataDownloaded";

/// Values restored at startup
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PersistedSnapshot {
    pub progress: f64,
    pub data_downloaded: f64,
}

/// Key-value mirror of the displayed numeric fields
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    pool: Pool<Sqlite>,
}

impl SnapshotStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Save a string value under a key
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO snapshot (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        debug!("Saved snapshot field: {} = {}", key, value);
        Ok(())
    }

    /// Get a string value by key
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM snapshot WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    /// Remove every persisted field
    pub async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM snapshot").execute(&self.pool).await?;

        debug!("Cleared snapshot store");
        Ok(())
    }

    /// Mirror the cosmetic progress percentage, one decimal
    pub async fn save_progress(&self, progress: f64) -> Result<()> {
        self.set(KEY_PROGRESS, &format!("{:.1}", progress)).await
    }

    /// Mirror the cumulative megabyte counter, two decimals
    pub async fn save_data_downloaded(&self, megabytes: f64) -> Result<()> {
        self.set(KEY_DATA_DOWNLOADED, &format!("{:.2}", megabytes))
            .await
    }

    /// Read both persisted fields, treating absent or unparsable values as zero
    pub async fn load(&self) -> Result<PersistedSnapshot> {
        let progress = self
            .get(KEY_PROGRESS)
            .await?
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);
        let data_downloaded = self
            .get(KEY_DATA_DOWNLOADED)
            .await?
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);

        Ok(PersistedSnapshot {
            progress,
            data_downloaded,
        })
    }
}
