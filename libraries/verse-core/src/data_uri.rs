//! Data-URI codec
//!
//! Uploaded audio is stored as a `data:<mime>;base64,<payload>` string so
//! the persisted value can be bound directly as a media source by the
//! player shell, with no further decoding in between.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::EncodingError;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Self-contained textual encoding of binary content, usable directly as a
/// media source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    /// Encode raw bytes under the given MIME type.
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("{SCHEME}{mime}{BASE64_MARKER}{}", STANDARD.encode(bytes)))
    }

    /// Parse a stored string, validating the scheme and payload marker.
    ///
    /// The payload itself is not decoded here; a truncated payload only
    /// surfaces when [`decode`](Self::decode) is called.
    pub fn parse(raw: impl Into<String>) -> Result<Self, EncodingError> {
        let raw = raw.into();
        let rest = raw.strip_prefix(SCHEME).ok_or(EncodingError::InvalidScheme)?;
        if !rest.contains(BASE64_MARKER) {
            return Err(EncodingError::NotBase64);
        }
        Ok(Self(raw))
    }

    /// The MIME type recorded in the URI.
    pub fn mime(&self) -> &str {
        self.0[SCHEME.len()..].split(';').next().unwrap_or("")
    }

    /// Decode the payload back to the original bytes.
    pub fn decode(&self) -> Result<Vec<u8>, EncodingError> {
        let at = self.0.find(BASE64_MARKER).ok_or(EncodingError::NotBase64)?;
        Ok(STANDARD.decode(&self.0[at + BASE64_MARKER.len()..])?)
    }

    /// The full URI string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Guess a MIME type from a file's extension.
///
/// The upload contract expects an `audio/*` prefix but performs no
/// validation; unknown extensions fall back to `application/octet-stream`.
pub fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg" | "oga") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("m4a") => "audio/mp4",
        Some("aac") => "audio/aac",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_records_the_mime_type() {
        let uri = DataUri::encode("audio/mpeg", b"abc");
        assert_eq!(uri.mime(), "audio/mpeg");
        assert_eq!(uri.as_str(), "data:audio/mpeg;base64,YWJj");
    }

    #[test]
    fn decode_reproduces_the_original_bytes() {
        let bytes = b"\x00\x01\xfe\xffnot really audio";
        let uri = DataUri::encode("audio/wav", bytes);
        assert_eq!(uri.decode().unwrap(), bytes);
    }

    #[test]
    fn empty_payload_round_trips() {
        let uri = DataUri::encode("audio/mpeg", b"");
        assert_eq!(uri.decode().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parse_accepts_its_own_output() {
        let uri = DataUri::encode("audio/ogg", b"xyz");
        let reparsed = DataUri::parse(uri.as_str()).unwrap();
        assert_eq!(reparsed, uri);
    }

    #[test]
    fn parse_rejects_a_plain_string() {
        assert!(matches!(
            DataUri::parse("just a string"),
            Err(EncodingError::InvalidScheme)
        ));
    }

    #[test]
    fn parse_rejects_a_non_base64_data_uri() {
        assert!(matches!(
            DataUri::parse("data:text/plain,hello"),
            Err(EncodingError::NotBase64)
        ));
    }

    #[test]
    fn decode_rejects_a_corrupt_payload() {
        let uri = DataUri::parse("data:audio/mpeg;base64,!!!not base64!!!").unwrap();
        assert!(matches!(uri.decode(), Err(EncodingError::Decode(_))));
    }

    #[test]
    fn known_audio_extensions_map_to_audio_mime_types() {
        assert_eq!(guess_mime(Path::new("song.mp3")), "audio/mpeg");
        assert_eq!(guess_mime(Path::new("song.MP3")), "audio/mpeg");
        assert_eq!(guess_mime(Path::new("take.flac")), "audio/flac");
        assert_eq!(guess_mime(Path::new("live.ogg")), "audio/ogg");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(guess_mime(Path::new("song.xyz")), "application/octet-stream");
        assert_eq!(guess_mime(Path::new("noextension")), "application/octet-stream");
    }

    proptest! {
        #[test]
        fn round_trip_preserves_arbitrary_bytes(
            bytes in proptest::collection::vec(any::<u8>(), 0..2048)
        ) {
            let uri = DataUri::encode("audio/mpeg", &bytes);
            prop_assert_eq!(uri.decode().unwrap(), bytes);
        }
    }
}
