//! Decoder for security panel live event records.
//!
//! The crate turns one raw live event record into one structured [`Event`]:
//! `frame` splits the fixed-layout record into a [`RawFrame`], `event`
//! validates it, decodes the label with a panel codec from `encodings` and
//! resolves the `(major, minor)` event code against a static
//! [`EventMapTable`]. Everything is synchronous and side-effect free apart
//! from the one-time codec registry initialisation.
//!
//! Invariants:
//! - Map tables and names tables are shared read-only; resolution works on a
//!   private copy of each entry.
//! - Deferred map values are evaluated exactly once per parse, after the
//!   minor override has been merged.
//! - Codec table sizes are fixed (`paradox-en`: 224, `paradox-ru`: 256); an
//!   unmapped byte is an error, never a substitution.
//!
//! # Examples
//! ```
//! use std::sync::Arc;
//!
//! use paradox_core::{EventMapEntry, EventMapTable, EventParser, Level, NamesTable};
//! use paradox_core::frame::{layout, reader::checksum};
//!
//! let table = EventMapTable::new().with(
//!     2,
//!     EventMapEntry::new()
//!         .level(Level::Info)
//!         .kind("partition")
//!         .message("{name}")
//!         .sub(11, "Disarmed"),
//! );
//! let names = NamesTable::new().with("partition", 1, "Ground floor");
//! let parser = EventParser::new(Arc::new(table), Arc::new(names));
//!
//! let mut record = [0u8; layout::FRAME_LEN];
//! record[layout::COMMAND_OFFSET] = layout::LIVE_EVENT_COMMAND << 4;
//! record[layout::TIME_RANGE].copy_from_slice(&[20, 19, 1, 1, 0, 0]);
//! record[layout::MAJOR_OFFSET] = 2;
//! record[layout::MINOR_OFFSET] = 11;
//! record[layout::PARTITION_OFFSET] = 1;
//! record[layout::CHECKSUM_OFFSET] = checksum(&record[layout::CHECKSUM_RANGE]);
//!
//! let event = parser.parse_bytes(&record)?;
//! assert_eq!(event.message()?, "Ground floor: Disarmed");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod encodings;
pub mod event;
pub mod frame;

pub use encodings::{Codec, CodecError, CodecRegistry, register_encodings};
pub use event::{
    Event, EventError, EventMapEntry, EventMapTable, EventParser, FormatError, Level, MapValue,
    NamesTable, ParserConfig, ResolvedFields, SubEntry, parse, resolve,
};
pub use frame::{FrameError, RawFrame, parse_live_event};
