/// Track domain type
use serde::{Deserialize, Serialize};

use crate::data_uri::DataUri;

/// Unique track identifier, assigned by the store in insertion order.
pub type TrackId = i64;

/// A persisted (name, encoded audio) pair.
///
/// Tracks are immutable once stored: they are created on upload and only
/// ever destroyed by a full reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier
    pub id: TrackId,

    /// File name the track was uploaded under
    pub name: String,

    /// Encoded audio payload, bindable directly as a media source
    pub data: DataUri,

    /// When the track was stored (unix seconds)
    pub created_at: i64,
}
