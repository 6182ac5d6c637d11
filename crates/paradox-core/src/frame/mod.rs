//! Live event record decoding.
//!
//! A live event is a fixed 37-byte record pushed by the panel whenever
//! something happens. This module checks length and checksum and splits the
//! record into a [`RawFrame`]; it does not interpret the event codes.
//! Offsets live in `layout`, safe reads and byte conventions in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::FrameError;
pub use parser::{RawFrame, parse_live_event};
