/// Core error types for Verse
use thiserror::Error;

/// Failure converting a chosen file into its storable representation, or
/// reading the original bytes back out of one.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// The string does not carry the `data:` scheme
    #[error("not a data URI")]
    InvalidScheme,

    /// The data URI has no base64 payload marker
    #[error("data URI is not base64-encoded")]
    NotBase64,

    /// The base64 payload failed to decode
    #[error(transparent)]
    Decode(#[from] base64::DecodeError),

    /// Reading the source file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
