//! The `playback_state` singleton: which track index is selected.
//!
//! The table holds at most one row, keyed by a fixed id the schema
//! enforces with a CHECK constraint.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use verse_core::PlaybackPointer;

use crate::error::{Result, StorageError};

/// Fixed primary key of the singleton row.
const POINTER_ID: i64 = 1;

/// Get the persisted pointer, or `None` if it was never set
pub async fn get(pool: &SqlitePool) -> Result<Option<PlaybackPointer>> {
    let row = sqlx::query("SELECT current_index FROM playback_state WHERE id = ?")
        .bind(POINTER_ID)
        .fetch_optional(pool)
        .await?;

    row.map(|r| {
        let index: i64 = r.get("current_index");
        let current_index = usize::try_from(index)
            .map_err(|_| StorageError::Corrupt(format!("negative playback index {index}")))?;

        Ok(PlaybackPointer { current_index })
    })
    .transpose()
}

/// Create or overwrite the singleton pointer. Idempotent.
pub async fn upsert(pool: &SqlitePool, current_index: usize) -> Result<()> {
    let index = current_index as i64;
    let now = Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO playback_state (id, current_index, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
            current_index = excluded.current_index,
            updated_at = excluded.updated_at",
    )
    .bind(POINTER_ID)
    .bind(index)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete the pointer row, reporting whether one existed
pub async fn delete(pool: &SqlitePool) -> Result<bool> {
    let result = sqlx::query("DELETE FROM playback_state WHERE id = ?")
        .bind(POINTER_ID)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
