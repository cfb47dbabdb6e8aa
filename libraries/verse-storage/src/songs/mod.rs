//! The `songs` table: one row per uploaded track, insertion-ordered.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use verse_core::{DataUri, Track, TrackId};

use crate::error::{Result, StorageError};

/// Get all tracks in creation order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows = sqlx::query("SELECT id, name, song, created_at FROM songs ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

/// Insert a new track, assigning the next unique id
///
/// The returned record is the caller's confirmation that the write landed.
pub async fn add(pool: &SqlitePool, name: &str, data: &DataUri) -> Result<Track> {
    let created_at = Utc::now().timestamp();

    let row = sqlx::query(
        "INSERT INTO songs (name, song, created_at) VALUES (?, ?, ?)
         RETURNING id, name, song, created_at",
    )
    .bind(name)
    .bind(data.as_str())
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    from_row(&row)
}

/// Number of stored tracks
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

fn from_row(row: &SqliteRow) -> Result<Track> {
    let data = DataUri::parse(row.get::<String, _>("song"))
        .map_err(|e| StorageError::Corrupt(format!("song payload: {e}")))?;

    Ok(Track {
        id: row.get::<TrackId, _>("id"),
        name: row.get("name"),
        data,
        created_at: row.get("created_at"),
    })
}
