use thiserror::Error;

/// Errors returned by live event frame decoding.
///
/// # Examples
/// ```
/// use paradox_core::FrameError;
///
/// let err = FrameError::TooShort { needed: 37, actual: 12 };
/// assert!(err.to_string().contains("frame too short"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("checksum mismatch: computed {expected:#04x}, frame carries {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("invalid timestamp: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")]
    InvalidTimestamp {
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
    },
}
