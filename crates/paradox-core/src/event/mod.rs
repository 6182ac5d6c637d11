//! Structured panel events.
//!
//! [`parse`] validates a [`RawFrame`], decodes its label and resolves the
//! `(major, minor)` code against an [`EventMapTable`]. The resulting
//! [`Event`] is immutable; `message` and `name` are computed on each access.
//!
//! Parsing is a single pass: the command check, label decode and map
//! resolution either all succeed or the first error is returned.

pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod map;
pub mod names;
pub mod resolve;

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use serde::ser::{Error as _, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::encodings::Codec;
use crate::frame::{RawFrame, layout::LIVE_EVENT_COMMAND, parse_live_event};

pub use config::ParserConfig;
pub use error::{EventError, FormatError};
pub use format::{Attributes, render};
pub use level::Level;
pub use map::{EventMapEntry, EventMapTable, MapValue, Resolver, SubEntry};
pub use names::{NamesTable, UNKNOWN_NAME};
pub use resolve::{EVENT_ATTRIBUTES, ResolvedFields, resolve};

/// Event type used when the map does not set one.
pub const DEFAULT_KIND: &str = "system";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Decoded panel event.
#[derive(Debug, Clone)]
pub struct Event {
    timestamp: PrimitiveDateTime,
    partition: u8,
    module: u32,
    label: String,
    label_type: Option<u8>,
    major: u16,
    minor: u16,
    level: Level,
    kind: String,
    message_tpl: String,
    change: Map<String, Value>,
    tags: Vec<String>,
    additional_data: BTreeMap<String, Value>,
    names: Arc<NamesTable>,
}

impl Event {
    /// Frame fields copied in, semantic fields at their defaults.
    fn unresolved(frame: &RawFrame, label: String, names: Arc<NamesTable>) -> Self {
        Self {
            timestamp: frame.timestamp,
            partition: frame.partition,
            module: frame.module_serial,
            label,
            label_type: frame.label_type,
            major: frame.major,
            minor: frame.minor,
            level: Level::NotSet,
            kind: DEFAULT_KIND.to_string(),
            message_tpl: String::new(),
            change: Map::new(),
            tags: Vec::new(),
            additional_data: BTreeMap::new(),
            names,
        }
    }

    fn apply(&mut self, resolved: ResolvedFields) {
        self.level = resolved.level;
        self.kind = resolved.kind;
        self.message_tpl = resolved.message_tpl;
        self.tags = resolved.tags;
        self.change = resolved.change;
        self.additional_data = resolved.additional_data;
    }

    pub fn timestamp(&self) -> PrimitiveDateTime {
        self.timestamp
    }

    pub fn partition(&self) -> u8 {
        self.partition
    }

    /// Serial number of the module that reported the event.
    pub fn module(&self) -> u32 {
        self.module
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_type(&self) -> Option<u8> {
        self.label_type
    }

    pub fn major(&self) -> u16 {
        self.major
    }

    pub fn minor(&self) -> u16 {
        self.minor
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Event type (`"partition"`, `"zone"`, ...), `"system"` by default.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message_tpl(&self) -> &str {
        &self.message_tpl
    }

    pub fn change(&self) -> &Map<String, Value> {
        &self.change
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Resolved map keys that are not event attributes.
    pub fn additional_data(&self) -> &BTreeMap<String, Value> {
        &self.additional_data
    }

    pub fn names(&self) -> &NamesTable {
        &self.names
    }

    /// Display name from the names table: keyed by partition for partition
    /// events and by minor code otherwise. `"-"` when there is none.
    pub fn name(&self) -> &str {
        let key = if self.kind == "partition" {
            self.partition as u16
        } else {
            self.minor
        };
        self.names.lookup(&self.kind, key).unwrap_or(UNKNOWN_NAME)
    }

    /// Message template rendered against [`Event::attributes`].
    pub fn message(&self) -> Result<String, FormatError> {
        render(&self.message_tpl, &self.attributes())
    }

    /// Snapshot of every attribute a message template may reference.
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("timestamp", self.formatted_timestamp());
        attributes.insert("partition", self.partition.to_string());
        attributes.insert("module", format!("{:08x}", self.module));
        attributes.insert("label", self.label.clone());
        attributes.insert(
            "label_type",
            self.label_type.map(|t| t.to_string()).unwrap_or_default(),
        );
        attributes.insert("major", self.major.to_string());
        attributes.insert("minor", self.minor.to_string());
        attributes.insert("level", self.level.to_string());
        attributes.insert("type", self.kind.clone());
        attributes.insert("message_tpl", self.message_tpl.clone());
        attributes.insert("change", Value::Object(self.change.clone()).to_string());
        attributes.insert("tags", self.tags.join(","));
        attributes.insert(
            "additional_data",
            serde_json::to_string(&self.additional_data).unwrap_or_default(),
        );
        attributes.insert("name", self.name().to_string());
        attributes
    }

    fn formatted_timestamp(&self) -> String {
        self.timestamp
            .format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| self.timestamp.to_string())
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let message = self.message().map_err(S::Error::custom)?;
        let mut state = serializer.serialize_struct("Event", 14)?;
        state.serialize_field("timestamp", &self.formatted_timestamp())?;
        state.serialize_field("partition", &self.partition)?;
        state.serialize_field("module", &format!("{:08x}", self.module))?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("label_type", &self.label_type)?;
        state.serialize_field("major", &self.major)?;
        state.serialize_field("minor", &self.minor)?;
        state.serialize_field("level", &self.level)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field("tags", &self.tags)?;
        state.serialize_field("change", &self.change)?;
        state.serialize_field("additional_data", &self.additional_data)?;
        state.serialize_field("message", &message)?;
        state.serialize_field("name", self.name())?;
        state.end()
    }
}

/// Parse `frame` into an [`Event`], decoding the label with `codec`.
///
/// # Errors
/// `InvalidEvent` when the frame is not a live event, `Codec` when the label
/// holds a byte outside the codec, `UnknownMajor`/`InvalidField` from map
/// resolution.
pub fn parse(
    frame: &RawFrame,
    table: &EventMapTable,
    names: Arc<NamesTable>,
    codec: &Codec,
) -> Result<Event, EventError> {
    parse_with_command(frame, table, names, codec, LIVE_EVENT_COMMAND)
}

fn parse_with_command(
    frame: &RawFrame,
    table: &EventMapTable,
    names: Arc<NamesTable>,
    codec: &Codec,
    command: u8,
) -> Result<Event, EventError> {
    if frame.command != command {
        return Err(EventError::InvalidEvent {
            command: frame.command,
        });
    }

    let label = codec.decode(frame.label_bytes())?;
    let mut event = Event::unresolved(frame, label, names);
    let resolved = resolve(frame.major, frame.minor, table, &event, &event.names)?;
    event.apply(resolved);

    debug!(
        "parsed event {}/{} ({}): level={} type={}",
        event.major, event.minor, event.label, event.level, event.kind
    );
    Ok(event)
}

/// Parser bound to a shared map table, names table and label codec.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use paradox_core::{EventMapEntry, EventMapTable, EventParser, NamesTable, ParserConfig};
///
/// let table = EventMapTable::new().with(0, EventMapEntry::new().message("Zone {label} OK"));
/// let config = ParserConfig { codec: "paradox-ru".to_string(), ..ParserConfig::default() };
/// let parser = EventParser::with_config(Arc::new(table), Arc::new(NamesTable::new()), &config)?;
/// assert_eq!(parser.codec().name(), "paradox-ru");
/// # Ok::<(), paradox_core::EventError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EventParser {
    table: Arc<EventMapTable>,
    names: Arc<NamesTable>,
    codec: &'static Codec,
    command: u8,
}

impl EventParser {
    /// Parser with the default configuration (English labels).
    pub fn new(table: Arc<EventMapTable>, names: Arc<NamesTable>) -> Self {
        Self {
            table,
            names,
            codec: &crate::encodings::EN,
            command: LIVE_EVENT_COMMAND,
        }
    }

    pub fn with_config(
        table: Arc<EventMapTable>,
        names: Arc<NamesTable>,
        config: &ParserConfig,
    ) -> Result<Self, EventError> {
        Ok(Self {
            table,
            names,
            codec: config.codec()?,
            command: config.command,
        })
    }

    pub fn codec(&self) -> &'static Codec {
        self.codec
    }

    pub fn table(&self) -> &EventMapTable {
        &self.table
    }

    pub fn parse(&self, frame: &RawFrame) -> Result<Event, EventError> {
        parse_with_command(
            frame,
            &self.table,
            Arc::clone(&self.names),
            self.codec,
            self.command,
        )
    }

    /// Decode a live event record and parse it.
    pub fn parse_bytes(&self, payload: &[u8]) -> Result<Event, EventError> {
        let frame = parse_live_event(payload)?;
        self.parse(&frame)
    }
}
