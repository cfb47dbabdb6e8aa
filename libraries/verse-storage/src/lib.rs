//! Verse Storage
//!
//! Durable SQLite layer for the Verse playlist manager.
//!
//! This crate owns the persisted schema — the `songs` table and the
//! `playback_state` singleton — and exposes it through an explicitly
//! constructed [`Store`] handle: opened once at session start, injected
//! into the playlist session, disposed at session end.
//!
//! # Example
//!
//! ```rust,no_run
//! use verse_storage::Store;
//!
//! # async fn example() -> Result<(), verse_storage::StorageError> {
//! let store = Store::open("sqlite://verse.db").await?;
//! let tracks = store.list_tracks().await?;
//! store.close().await;
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

// Vertical slices
pub mod playback_state;
pub mod songs;

pub use error::StorageError;
pub use store::Store;

use sqlx::sqlite::SqlitePool;
use sqlx::Row;

/// Version of the persisted schema this build reads and writes.
///
/// Future schema changes must bump this and provide explicit migration
/// steps from the prior version before the store opens for read/write.
pub const SCHEMA_VERSION: i64 = 1;

// Embedded migrations, applied in order at open time. One statement per
// file.
const MIGRATIONS: &[&str] = &[
    include_str!("../migrations/20250301000001_create_songs.sql"),
    include_str!("../migrations/20250301000002_create_playback_state.sql"),
];

/// Create a new SQLite pool
///
/// The database file is created if missing; WAL journaling and a busy
/// timeout are configured on every connection.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    Ok(pool)
}

/// Run database migrations
///
/// Applies the embedded schema and stamps [`SCHEMA_VERSION`] into
/// `PRAGMA user_version`. A database stamped with a newer version than
/// this build understands is refused rather than opened.
///
/// # Errors
///
/// Returns an error if a migration statement fails or the recorded
/// version is unsupported
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    let row = sqlx::query("PRAGMA user_version").fetch_one(pool).await?;
    let version: i64 = row.get(0);

    if version > SCHEMA_VERSION {
        return Err(StorageError::Migration(format!(
            "database schema version {version} is newer than supported version {SCHEMA_VERSION}"
        )));
    }

    if version < SCHEMA_VERSION {
        for migration in MIGRATIONS {
            sqlx::query(migration)
                .execute(pool)
                .await
                .map_err(|e| StorageError::Migration(e.to_string()))?;
        }

        sqlx::query(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
            .execute(pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}
