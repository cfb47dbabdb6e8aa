//! Domain types

mod playback_pointer;
mod track;

pub use playback_pointer::PlaybackPointer;
pub use track::{Track, TrackId};
