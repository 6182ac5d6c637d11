//! Panel label character sets.
//!
//! Labels embedded in event records are stored in the panel's own
//! single-byte character set. Each codec is a static table indexed by byte
//! value; the table length is part of the contract (`en`: 224, `ru`: 256)
//! and bytes past the end of a table are a decode error, never a
//! substitution.
//!
//! Codecs are looked up by name through a [`CodecRegistry`]. The process-wide
//! registry returned by [`register_encodings`] is built once and always
//! carries `paradox-en` and `paradox-ru`.

pub mod en;
pub mod error;
pub mod registry;
pub mod ru;

pub use error::CodecError;
pub use registry::{CodecRegistry, decode, encode, register_encodings};

/// Registry name of the English panel codec.
pub const PARADOX_EN: &str = "paradox-en";
/// Registry name of the Russian panel codec.
pub const PARADOX_RU: &str = "paradox-ru";

/// English panel codec.
pub static EN: Codec = Codec::new(PARADOX_EN, &en::DECODING_TABLE);
/// Russian panel codec.
pub static RU: Codec = Codec::new(PARADOX_RU, &ru::DECODING_TABLE);

/// Single-byte codec backed by a static decoding table.
///
/// # Examples
/// ```
/// use paradox_core::encodings::EN;
///
/// assert_eq!(EN.decode(b"Zone 1").unwrap(), "Zone 1");
/// assert_eq!(EN.decode(&[131]).unwrap(), "Ü");
/// ```
#[derive(Debug)]
pub struct Codec {
    name: &'static str,
    table: &'static [char],
}

impl Codec {
    pub const fn new(name: &'static str, table: &'static [char]) -> Self {
        Self { name, table }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn table(&self) -> &'static [char] {
        self.table
    }

    pub fn decode_byte(&self, byte: u8) -> Result<char, CodecError> {
        self.table
            .get(byte as usize)
            .copied()
            .ok_or(CodecError::Decode {
                codec: self.name,
                byte,
            })
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        bytes.iter().map(|&b| self.decode_byte(b)).collect()
    }

    /// Inverse lookup; the lowest byte wins when a glyph appears twice.
    pub fn encode_char(&self, ch: char) -> Result<u8, CodecError> {
        self.table
            .iter()
            .position(|&c| c == ch)
            .map(|idx| idx as u8)
            .ok_or(CodecError::Encode {
                codec: self.name,
                ch,
            })
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        text.chars().map(|ch| self.encode_char(ch)).collect()
    }

    fn same_table(&self, other: &Codec) -> bool {
        std::ptr::eq(self.table, other.table) || self.table == other.table
    }
}

impl PartialEq for Codec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.same_table(other)
    }
}

impl Eq for Codec {}
