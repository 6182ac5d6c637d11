use thiserror::Error;

use crate::encodings::CodecError;
use crate::frame::FrameError;

/// Errors returned while turning a raw frame into an [`Event`](super::Event).
///
/// # Examples
/// ```
/// use paradox_core::EventError;
///
/// let err = EventError::UnknownMajor { major: 77 };
/// assert_eq!(err.to_string(), "unknown event major: 77");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("invalid event: command {command:#03x} is not a live event")]
    InvalidEvent { command: u8 },
    #[error("unknown event major: {major}")]
    UnknownMajor { major: u16 },
    #[error("event map field `{field}` must be {expected}, got {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("label decode failed: {0}")]
    Codec(#[from] CodecError),
    #[error("frame decode failed: {0}")]
    Frame(#[from] FrameError),
}

/// Errors returned when rendering an event message template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("template references missing attribute `{field}`")]
    MissingAttribute { field: String },
    #[error("malformed template at byte {position}: {reason}")]
    Malformed {
        position: usize,
        reason: &'static str,
    },
}
