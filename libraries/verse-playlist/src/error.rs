//! Error types for the playlist session

use thiserror::Error;
use verse_core::EncodingError;
use verse_storage::StorageError;

/// Playlist session errors
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// `advance` was invoked with no tracks loaded. A contract violation:
    /// the shell must not offer the transition on an empty playlist.
    #[error("playlist is empty")]
    EmptyPlaylist,

    /// The durable store failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The chosen file could not be read or encoded
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
