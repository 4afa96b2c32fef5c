//! Audio format enumeration and the format-to-MIME lookup table
//!
//! The table is immutable process-wide static data. Matching is a substring
//! test against the raw content-type header, which tolerates trailing
//! parameters such as `; codecs=opus`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized audio container/codec identifiers
///
/// Serializes to the lowercase identifier (`"mp3"`, `"m3u8"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Wav,
    Ogg,
    Flac,
    Aac,
    M4a,
    Webm,
    Opus,
    M3u8,
    Unknown,
}

impl AudioFormat {
    /// Scan order for MIME-table lookup. The first format whose MIME list
    /// matches the content-type wins.
    pub const TABLE: [AudioFormat; 9] = [
        AudioFormat::Mp3,
        AudioFormat::Wav,
        AudioFormat::Ogg,
        AudioFormat::Flac,
        AudioFormat::Aac,
        AudioFormat::M4a,
        AudioFormat::Webm,
        AudioFormat::Opus,
        AudioFormat::M3u8,
    ];

    /// Accepted content-type substrings for this format
    pub fn mime_substrings(self) -> &'static [&'static str] {
        match self {
            AudioFormat::Mp3 => &["audio/mpeg", "audio/mp3"],
            AudioFormat::Wav => &["audio/wav", "audio/x-wav"],
            AudioFormat::Ogg => &["audio/ogg", "application/ogg"],
            AudioFormat::Flac => &["audio/flac"],
            AudioFormat::Aac => &["audio/aac", "audio/aacp"],
            AudioFormat::M4a => &["audio/mp4", "audio/x-m4a"],
            AudioFormat::Webm => &["audio/webm"],
            AudioFormat::Opus => &["audio/opus"],
            AudioFormat::M3u8 => &["application/vnd.apple.mpegurl", "application/x-mpegurl"],
            AudioFormat::Unknown => &[],
        }
    }

    /// Lowercase identifier, which doubles as the file extension key
    pub fn as_str(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Flac => "flac",
            AudioFormat::Aac => "aac",
            AudioFormat::M4a => "m4a",
            AudioFormat::Webm => "webm",
            AudioFormat::Opus => "opus",
            AudioFormat::M3u8 => "m3u8",
            AudioFormat::Unknown => "unknown",
        }
    }

    /// Look up a format by file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<AudioFormat> {
        let ext = ext.to_ascii_lowercase();
        Self::TABLE.iter().copied().find(|f| f.as_str() == ext)
    }

    /// True for playlist-based streaming formats with no fixed length
    pub fn is_stream(self) -> bool {
        matches!(self, AudioFormat::M3u8)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
