//! Explicitly constructed store handle
//!
//! The database handle is owned by a [`Store`] value with a documented
//! lifecycle: opened once at session start, injected into the playlist
//! session, disposed at session end. Nothing else in the process holds
//! the pool.

use sqlx::SqlitePool;
use tracing::debug;
use verse_core::{DataUri, PlaybackPointer, Track};

use crate::error::Result;
use crate::{playback_state, songs};

/// Handle over the durable playlist database.
#[derive(Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the database (creating it if missing) and bring the schema up
    /// to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or migrations fail
    pub async fn open(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        debug!(database_url, "store opened");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (for testing)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// All persisted tracks in creation order
    pub async fn list_tracks(&self) -> Result<Vec<Track>> {
        songs::get_all(&self.pool).await
    }

    /// Persist a new track; the returned record confirms the write
    pub async fn add_track(&self, name: &str, data: &DataUri) -> Result<Track> {
        songs::add(&self.pool, name, data).await
    }

    /// The singleton playback pointer, if one was ever persisted
    pub async fn playback_pointer(&self) -> Result<Option<PlaybackPointer>> {
        playback_state::get(&self.pool).await
    }

    /// Create or overwrite the singleton playback pointer
    pub async fn set_playback_pointer(&self, current_index: usize) -> Result<()> {
        playback_state::upsert(&self.pool, current_index).await
    }

    /// Destroy all persisted state in one transaction. Not undoable.
    ///
    /// Deletes every track, the playback pointer, and the id sequence, so
    /// the next session starts from a factory-fresh database.
    pub async fn reset_all(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM playback_state")
            .execute(tx.as_mut())
            .await?;
        sqlx::query("DELETE FROM songs").execute(tx.as_mut()).await?;

        // sqlite_sequence only materializes after the first AUTOINCREMENT
        // insert
        let has_sequence: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
        )
        .fetch_optional(tx.as_mut())
        .await?;

        if has_sequence.is_some() {
            sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'songs'")
                .execute(tx.as_mut())
                .await?;
        }

        tx.commit().await?;
        debug!("store reset");

        Ok(())
    }

    /// Dispose of the handle at session end
    pub async fn close(self) {
        self.pool.close().await;
    }
}
