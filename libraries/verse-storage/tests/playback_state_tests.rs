//! Integration tests for the playback pointer singleton


use test_helpers::{sample_data, TestDb};
use verse_storage::{playback_state, StorageError};

#[tokio::test]
async fn the_pointer_is_absent_until_first_set() {
    let db = TestDb::new().await;

    assert!(db.store.playback_pointer().await.unwrap().is_none());
}

#[tokio::test]
async fn set_creates_then_overwrites_the_singleton() {
    let db = TestDb::new().await;

    db.store.set_playback_pointer(0).await.unwrap();
    let pointer = db.store.playback_pointer().await.unwrap().unwrap();
    assert_eq!(pointer.current_index, 0);

    db.store.set_playback_pointer(3).await.unwrap();
    let pointer = db.store.playback_pointer().await.unwrap().unwrap();
    assert_eq!(pointer.current_index, 3);
}

#[tokio::test]
async fn repeated_set_with_the_same_index_keeps_a_single_row() {
    let db = TestDb::new().await;

    db.store.set_playback_pointer(2).await.unwrap();
    db.store.set_playback_pointer(2).await.unwrap();

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM playback_state")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let pointer = db.store.playback_pointer().await.unwrap().unwrap();
    assert_eq!(pointer.current_index, 2);
}

#[tokio::test]
async fn the_schema_rejects_a_second_pointer_row() {
    let db = TestDb::new().await;

    db.store.set_playback_pointer(0).await.unwrap();

    let result = sqlx::query(
        "INSERT INTO playback_state (id, current_index, updated_at) VALUES (2, 0, 0)",
    )
    .execute(db.pool())
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn a_negative_stored_index_surfaces_as_corrupt() {
    let db = TestDb::new().await;

    sqlx::query("INSERT INTO playback_state (id, current_index, updated_at) VALUES (1, -1, 0)")
        .execute(db.pool())
        .await
        .unwrap();

    let err = db.store.playback_pointer().await.unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)));
}

#[tokio::test]
async fn delete_reports_whether_a_row_existed() {
    let db = TestDb::new().await;

    assert!(!playback_state::delete(db.pool()).await.unwrap());

    db.store.set_playback_pointer(1).await.unwrap();
    assert!(playback_state::delete(db.pool()).await.unwrap());
    assert!(db.store.playback_pointer().await.unwrap().is_none());
}

#[tokio::test]
async fn reset_all_clears_tracks_pointer_and_id_sequence() {
    let db = TestDb::new().await;

    db.store.add_track("a.mp3", &sample_data(b"a")).await.unwrap();
    db.store.add_track("b.mp3", &sample_data(b"b")).await.unwrap();
    db.store.set_playback_pointer(1).await.unwrap();

    db.store.reset_all().await.unwrap();

    assert!(db.store.list_tracks().await.unwrap().is_empty());
    assert!(db.store.playback_pointer().await.unwrap().is_none());

    // Ids restart from 1 after a reset
    let track = db.store.add_track("c.mp3", &sample_data(b"c")).await.unwrap();
    assert_eq!(track.id, 1);
}

#[tokio::test]
async fn reset_all_on_a_fresh_database_is_a_no_op() {
    let db = TestDb::new().await;

    db.store.reset_all().await.unwrap();

    assert!(db.store.list_tracks().await.unwrap().is_empty());
    assert!(db.store.playback_pointer().await.unwrap().is_none());
}
