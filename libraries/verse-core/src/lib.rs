//! Verse Core
//!
//! Platform-agnostic domain types and the data-URI codec for Verse.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`], [`PlaybackPointer`]
//! - **Data-URI Codec**: [`DataUri`] and MIME guessing for uploads
//! - **Error Handling**: [`EncodingError`]
//!
//! It carries no async runtime or database dependency; those live in the
//! storage and playlist crates.
//!
//! # Example
//!
//! ```rust
//! use verse_core::DataUri;
//!
//! let uri = DataUri::encode("audio/mpeg", b"not really audio");
//! assert!(uri.as_str().starts_with("data:audio/mpeg;base64,"));
//! assert_eq!(uri.decode().unwrap(), b"not really audio");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod data_uri;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use data_uri::DataUri;
pub use error::EncodingError;
pub use types::{PlaybackPointer, Track, TrackId};
