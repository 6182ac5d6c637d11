use serde::{Deserialize, Serialize};

use crate::encodings::{Codec, PARADOX_EN, register_encodings};
use crate::frame::layout::LIVE_EVENT_COMMAND;

use super::error::EventError;

/// Event parser settings.
///
/// # Examples
/// ```
/// use paradox_core::ParserConfig;
///
/// let config: ParserConfig = serde_json::from_str(r#"{"codec": "paradox-ru"}"#).unwrap();
/// assert_eq!(config.codec, "paradox-ru");
/// assert_eq!(config.command, 0x0E);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Registry name of the label codec.
    pub codec: String,
    /// Expected command nibble of live event records.
    pub command: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            codec: PARADOX_EN.to_string(),
            command: LIVE_EVENT_COMMAND,
        }
    }
}

impl ParserConfig {
    pub(crate) fn codec(&self) -> Result<&'static Codec, EventError> {
        Ok(register_encodings().get(&self.codec)?)
    }
}
