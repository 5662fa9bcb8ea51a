//! Snapshot store schema

use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Pool, Sqlite};
use tracing::debug;

/// Initialize the snapshot store
pub async fn initialize_store(db_path: &str) -> Result<Pool<Sqlite>> {
    // Create database if it doesn't exist
    if !Sqlite::database_exists(db_path).await? {
        debug!("Creating snapshot store at: {}", db_path);
        Sqlite::create_database(db_path).await?;
    }

    // Connect to the database
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_path)
        .await?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// Create store tables
async fn create_tables(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS snapshot (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    debug!("Snapshot store tables created successfully");
    Ok(())
}
