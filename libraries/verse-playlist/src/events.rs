//! Playlist events
//!
//! Explicit notification point for the presentation layer: the session
//! emits an event after each mutating operation completes, and the shell
//! re-renders on receipt.

use serde::{Deserialize, Serialize};
use verse_core::TrackId;

/// Events emitted by the playlist session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistEvent {
    /// Startup load finished and the in-memory mirror matches the store
    Hydrated {
        /// Number of tracks loaded
        track_count: usize,
        /// Index selected for playback
        current_index: usize,
    },

    /// A new track was persisted and appended to the playlist
    TrackAdded {
        /// Id the store assigned
        track_id: TrackId,
        /// File name the track was uploaded under
        name: String,
    },

    /// The selection moved to the next track (cyclic)
    Advanced {
        /// Index before the advance
        previous_index: usize,
        /// Index now selected
        current_index: usize,
    },

    /// All persisted and in-memory state was destroyed; the host should
    /// reinitialize
    Reset,

    /// A failure the session absorbed rather than propagated
    Error {
        /// Human-readable cause
        message: String,
    },
}
