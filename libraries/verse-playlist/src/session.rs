//! Playlist session - the in-memory mirror of the store
//!
//! Orchestrates the supported user workflows (upload, advance-on-
//! completion, reset) plus startup hydration, writing through to the
//! store on every mutation. One logical caller drives the session at a
//! time; operations run to completion or failure, with no cancellation.

use std::path::{Path, PathBuf};

use tokio::sync::broadcast;
use tracing::{debug, warn};
use verse_core::{data_uri, DataUri, EncodingError, Track};
use verse_storage::Store;

use crate::error::{PlaylistError, Result};
use crate::events::PlaylistEvent;

/// Event channel depth; slow receivers lag rather than block the session.
const EVENT_CAPACITY: usize = 64;

/// Lifecycle of the in-memory session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No tracks loaded. Initial state, re-entered after reset.
    Empty,
    /// Startup load in flight
    Hydrating,
    /// At least one track available and a valid current index
    Ready,
}

/// In-memory playlist session backed by a [`Store`].
pub struct PlaylistSession {
    store: Store,
    playlist: Vec<Track>,
    current_index: usize,
    state: SessionState,
    selected: Option<PathBuf>,
    events: broadcast::Sender<PlaylistEvent>,
}

impl PlaylistSession {
    /// Create a session over an opened store. Call
    /// [`hydrate`](Self::hydrate) before anything else.
    pub fn new(store: Store) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            store,
            playlist: Vec::new(),
            current_index: 0,
            state: SessionState::Empty,
            selected: None,
            events,
        }
    }

    /// Load persisted state into the session.
    ///
    /// A read failure leaves the session Empty instead of failing
    /// startup; the cause is logged and emitted as
    /// [`PlaylistEvent::Error`]. A pointer that is absent, unreadable, or
    /// out of range falls back to the first track — range is validated
    /// only here, and the in-memory index is trusted afterwards.
    pub async fn hydrate(&mut self) {
        self.state = SessionState::Hydrating;

        let tracks = match self.store.list_tracks().await {
            Ok(tracks) => tracks,
            Err(err) => {
                warn!(%err, "hydration failed, starting empty");
                self.emit(PlaylistEvent::Error {
                    message: err.to_string(),
                });
                self.playlist.clear();
                self.current_index = 0;
                self.state = SessionState::Empty;
                return;
            }
        };

        if tracks.is_empty() {
            self.playlist.clear();
            self.current_index = 0;
            self.state = SessionState::Empty;
            self.emit(PlaylistEvent::Hydrated {
                track_count: 0,
                current_index: 0,
            });
            return;
        }

        let current_index = match self.store.playback_pointer().await {
            Ok(Some(pointer)) if pointer.current_index < tracks.len() => pointer.current_index,
            Ok(_) => 0,
            Err(err) => {
                warn!(%err, "playback pointer unreadable, defaulting to first track");
                0
            }
        };

        self.playlist = tracks;
        self.current_index = current_index;
        self.state = SessionState::Ready;
        debug!(track_count = self.playlist.len(), current_index, "hydrated");
        self.emit(PlaylistEvent::Hydrated {
            track_count: self.playlist.len(),
            current_index,
        });
    }

    /// Remember the file the user picked; a later [`upload`](Self::upload)
    /// consumes it.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) {
        self.selected = Some(path.into());
    }

    /// Drop the pending selection without uploading.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The file currently chosen for upload, if any.
    pub fn selection(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Encode and persist the selected file, then reload the playlist
    /// from the store.
    ///
    /// With no selection this is a no-op returning `Ok(None)`. On success
    /// the selection is cleared and the stored track returned; the
    /// current index is untouched unless the playlist was empty, in which
    /// case it becomes 0 — a new upload never steals the selection. On
    /// failure the selection is kept and in-memory state is unchanged;
    /// encode-then-store ordering means an encode failure persists
    /// nothing.
    pub async fn upload(&mut self) -> Result<Option<Track>> {
        let Some(path) = self.selected.clone() else {
            return Ok(None);
        };

        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );

        let data = encode_file(&path).await?;
        let track = self.store.add_track(&name, &data).await?;

        let was_empty = self.playlist.is_empty();
        self.playlist = self.store.list_tracks().await?;
        if was_empty {
            self.current_index = 0;
        }
        self.state = SessionState::Ready;
        self.selected = None;

        debug!(track_id = track.id, name = %track.name, "track uploaded");
        self.emit(PlaylistEvent::TrackAdded {
            track_id: track.id,
            name: track.name.clone(),
        });

        Ok(Some(track))
    }

    /// Move the selection to the next track with cyclic wraparound,
    /// returning the new index. A single-track playlist wraps onto
    /// itself.
    ///
    /// The in-memory index advances first; the pointer write-through may
    /// fail without rolling it back — playback continuity wins for the
    /// rest of the session, and the failure is logged and emitted as an
    /// [`PlaylistEvent::Error`].
    pub async fn advance(&mut self) -> Result<usize> {
        if self.playlist.is_empty() {
            return Err(PlaylistError::EmptyPlaylist);
        }

        let previous_index = self.current_index;
        let next = next_index(previous_index, self.playlist.len());
        self.current_index = next;

        if let Err(err) = self.store.set_playback_pointer(next).await {
            warn!(%err, next, "playback pointer write failed");
            self.emit(PlaylistEvent::Error {
                message: err.to_string(),
            });
        }

        debug!(previous_index, current_index = next, "advanced");
        self.emit(PlaylistEvent::Advanced {
            previous_index,
            current_index: next,
        });

        Ok(next)
    }

    /// Destroy all persisted and in-memory state, landing in Empty.
    ///
    /// The emitted [`PlaylistEvent::Reset`] tells the host to treat the
    /// session as freshly started.
    pub async fn reset(&mut self) -> Result<()> {
        self.store.reset_all().await?;

        self.playlist.clear();
        self.current_index = 0;
        self.selected = None;
        self.state = SessionState::Empty;

        self.emit(PlaylistEvent::Reset);
        Ok(())
    }

    /// Subscribe to session events.
    pub fn subscribe(&self) -> broadcast::Receiver<PlaylistEvent> {
        self.events.subscribe()
    }

    /// The in-memory playlist in insertion order.
    pub fn tracks(&self) -> &[Track] {
        &self.playlist
    }

    /// Index of the track selected for playback.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The track selected for playback, if any.
    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.current_index)
    }

    /// Number of loaded tracks.
    pub fn track_count(&self) -> usize {
        self.playlist.len()
    }

    /// Whether the playlist has no tracks.
    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The backing store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    fn emit(&self, event: PlaylistEvent) {
        // No receivers is fine; the shell may not have subscribed yet
        let _ = self.events.send(event);
    }
}

/// Cyclic successor of `current` in a playlist of `len` tracks.
fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

/// Read and encode a chosen file into its storable representation.
///
/// Suspends on the file read; nothing is persisted if this fails.
async fn encode_file(path: &Path) -> std::result::Result<DataUri, EncodingError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(DataUri::encode(data_uri::guess_mime(path), &bytes))
}

#[cfg(test)]
mod tests {
    use super::next_index;
    use proptest::prelude::*;

    #[test]
    fn next_index_wraps_from_the_last_track_to_the_first() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn a_single_track_wraps_onto_itself() {
        assert_eq!(next_index(0, 1), 0);
    }

    proptest! {
        #[test]
        fn advancing_len_times_returns_to_the_start(
            start in 0usize..64,
            extra in 1usize..64,
        ) {
            let len = start + extra;
            let mut index = start;
            for _ in 0..len {
                index = next_index(index, len);
            }
            prop_assert_eq!(index, start);
        }

        #[test]
        fn the_next_index_is_always_in_range(
            current in 0usize..256,
            len in 1usize..256,
        ) {
            prop_assume!(current < len);
            prop_assert!(next_index(current, len) < len);
        }
    }
}
