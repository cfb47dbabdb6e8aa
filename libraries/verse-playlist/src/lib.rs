//! Verse Playlist
//!
//! Playlist session management for Verse: mediates between the in-memory
//! playlist mirror and the durable store.
//!
//! This crate provides:
//! - Startup hydration of persisted tracks and the playback pointer
//! - Append-on-upload with data-URI encoding
//! - Cyclic advance-on-completion with write-through persistence
//! - Full destructive reset
//! - A broadcast event stream for the presentation layer
//!
//! The store handle is injected at construction; the session is the only
//! writer for its lifetime, so no locking sits between the mirror and the
//! database.
//!
//! # Example
//!
//! ```rust,no_run
//! use verse_playlist::PlaylistSession;
//! use verse_storage::Store;
//!
//! # async fn example() -> Result<(), verse_playlist::PlaylistError> {
//! let store = Store::open("sqlite://verse.db").await?;
//! let mut session = PlaylistSession::new(store);
//! session.hydrate().await;
//!
//! session.select_file("/music/song1.mp3");
//! session.upload().await?;
//!
//! if let Some(track) = session.current_track() {
//!     // Bind track.data directly as the audio element source
//!     let _src = track.data.as_str();
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod events;
mod session;

pub use error::{PlaylistError, Result};
pub use events::PlaylistEvent;
pub use session::{PlaylistSession, SessionState};
