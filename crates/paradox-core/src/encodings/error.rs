use thiserror::Error;

/// Errors returned by the panel codecs and the codec registry.
///
/// # Examples
/// ```
/// use paradox_core::CodecError;
///
/// let err = CodecError::Decode { codec: "paradox-en", byte: 0xF0 };
/// assert!(err.to_string().contains("0xf0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("{codec}: byte {byte:#04x} has no mapping")]
    Decode { codec: &'static str, byte: u8 },
    #[error("{codec}: character {ch:?} has no mapping")]
    Encode { codec: &'static str, ch: char },
    #[error("unknown codec: {name}")]
    UnknownCodec { name: String },
    #[error("codec name already registered with a different table: {name}")]
    Conflict { name: String },
}
