/// Playback pointer domain type
use serde::{Deserialize, Serialize};

/// The singleton record of which track index is currently selected.
///
/// At most one pointer exists in the store; when the track list is empty
/// the pointer is meaningless and is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackPointer {
    /// Index into the insertion-ordered track list
    pub current_index: usize,
}
