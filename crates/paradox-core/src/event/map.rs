//! Static event map: (major, minor) code to semantic attributes.
//!
//! A table maps each major code to an [`EventMapEntry`]. An entry holds
//! named fields (`level`, `type`, `message`, `tags`, `change`, plus any extra
//! keys) and optional per-minor [`SubEntry`] overrides. Every field value is a
//! [`MapValue`]: a literal JSON value or a deferred resolver evaluated against
//! the event being built.
//!
//! Tables are shared and read-only. Resolution always works on a private
//! copy of an entry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::Event;
use super::level::Level;
use super::names::NamesTable;

/// Deferred field computation.
pub type Resolver = Arc<dyn Fn(&Event, &NamesTable) -> Value + Send + Sync>;

#[derive(Clone)]
pub enum MapValue {
    Literal(Value),
    Deferred(Resolver),
}

impl MapValue {
    pub fn literal(value: impl Into<Value>) -> Self {
        MapValue::Literal(value.into())
    }

    pub fn deferred<F>(resolver: F) -> Self
    where
        F: Fn(&Event, &NamesTable) -> Value + Send + Sync + 'static,
    {
        MapValue::Deferred(Arc::new(resolver))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, MapValue::Deferred(_))
    }

    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            MapValue::Literal(value) => Some(value),
            MapValue::Deferred(_) => None,
        }
    }

    pub(crate) fn resolve(&self, event: &Event, names: &NamesTable) -> Value {
        match self {
            MapValue::Literal(value) => value.clone(),
            MapValue::Deferred(resolver) => resolver(event, names),
        }
    }

    /// `"<base>: <override>"`, deferred when either side is.
    pub(crate) fn join_message(base: MapValue, over: MapValue) -> MapValue {
        match (base, over) {
            (MapValue::Literal(base), MapValue::Literal(over)) => {
                MapValue::Literal(join_message_values(&base, &over))
            }
            (base, over) => MapValue::deferred(move |event, names| {
                join_message_values(&base.resolve(event, names), &over.resolve(event, names))
            }),
        }
    }

    /// Base items followed by override items. A base that is not a list is
    /// replaced by the override.
    pub(crate) fn extend_list(base: MapValue, over: Vec<Value>) -> MapValue {
        match base {
            MapValue::Literal(base) => MapValue::Literal(extend_list_values(base, over)),
            MapValue::Deferred(resolver) => MapValue::deferred(move |event, names| {
                extend_list_values(resolver(event, names), over.clone())
            }),
        }
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn join_message_values(base: &Value, over: &Value) -> Value {
    Value::String(format!("{}: {}", message_text(base), message_text(over)))
}

fn extend_list_values(base: Value, over: Vec<Value>) -> Value {
    match base {
        Value::Array(mut items) => {
            items.extend(over);
            Value::Array(items)
        }
        _ => Value::Array(over),
    }
}

impl fmt::Debug for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            MapValue::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl PartialEq for MapValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MapValue::Literal(a), MapValue::Literal(b)) => a == b,
            (MapValue::Deferred(a), MapValue::Deferred(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Value> for MapValue {
    fn from(value: Value) -> Self {
        MapValue::Literal(value)
    }
}

pub type Fields = BTreeMap<String, MapValue>;

/// Minor-code override, always stored as a partial set of fields.
///
/// A bare string is shorthand for `{message: <string>}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubEntry {
    fields: Fields,
}

impl SubEntry {
    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl From<&str> for SubEntry {
    fn from(message: &str) -> Self {
        SubEntry::from(message.to_string())
    }
}

impl From<String> for SubEntry {
    fn from(message: String) -> Self {
        let mut fields = Fields::new();
        fields.insert("message".to_string(), MapValue::literal(message));
        SubEntry { fields }
    }
}

impl From<EventMapEntry> for SubEntry {
    fn from(entry: EventMapEntry) -> Self {
        SubEntry {
            fields: entry.fields,
        }
    }
}

/// Mapping entry for one major code.
///
/// # Examples
/// ```
/// use paradox_core::{EventMapEntry, Level};
///
/// let entry = EventMapEntry::new()
///     .level(Level::Info)
///     .kind("partition")
///     .message("Partition {label}")
///     .tags(["arm"])
///     .sub(2, "Armed");
/// assert!(entry.get("message").is_some());
/// assert!(entry.sub_entry(2).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Value>")]
pub struct EventMapEntry {
    fields: Fields,
    sub: BTreeMap<u16, SubEntry>,
}

impl EventMapEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(self, level: Level) -> Self {
        self.field("level", level)
    }

    pub fn kind(self, kind: &str) -> Self {
        self.field("type", kind)
    }

    pub fn message(self, message: &str) -> Self {
        self.field("message", message)
    }

    pub fn tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<Value> = tags.into_iter().map(|t| Value::String(t.into())).collect();
        self.field("tags", tags)
    }

    pub fn change(self, change: Map<String, Value>) -> Self {
        self.field("change", change)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields
            .insert(key.to_string(), MapValue::Literal(value.into()));
        self
    }

    pub fn deferred<F>(mut self, key: &str, resolver: F) -> Self
    where
        F: Fn(&Event, &NamesTable) -> Value + Send + Sync + 'static,
    {
        self.fields
            .insert(key.to_string(), MapValue::deferred(resolver));
        self
    }

    pub fn sub(mut self, minor: u16, entry: impl Into<SubEntry>) -> Self {
        self.sub.insert(minor, entry.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&MapValue> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn sub_entry(&self, minor: u16) -> Option<&SubEntry> {
        self.sub.get(&minor)
    }

    pub fn sub_entries(&self) -> impl Iterator<Item = (u16, &SubEntry)> {
        self.sub.iter().map(|(minor, entry)| (*minor, entry))
    }
}

fn literal_fields(map: impl IntoIterator<Item = (String, Value)>) -> Fields {
    map.into_iter()
        .map(|(key, value)| (key, MapValue::Literal(value)))
        .collect()
}

impl TryFrom<BTreeMap<String, Value>> for EventMapEntry {
    type Error = String;

    fn try_from(mut raw: BTreeMap<String, Value>) -> Result<Self, Self::Error> {
        let mut sub = BTreeMap::new();
        match raw.remove("sub") {
            None | Some(Value::Null) => {}
            Some(Value::Object(entries)) => {
                for (key, value) in entries {
                    let minor = key
                        .parse::<u16>()
                        .map_err(|_| format!("sub key `{key}` is not a minor code"))?;
                    let entry = match value {
                        Value::String(message) => SubEntry::from(message),
                        Value::Object(map) => SubEntry {
                            fields: literal_fields(map),
                        },
                        other => {
                            return Err(format!(
                                "sub entry {minor} must be a string or an object, got {other}"
                            ));
                        }
                    };
                    sub.insert(minor, entry);
                }
            }
            Some(other) => return Err(format!("`sub` must be an object, got {other}")),
        }

        Ok(EventMapEntry {
            fields: literal_fields(raw),
            sub,
        })
    }
}

/// Major code to [`EventMapEntry`].
///
/// # Examples
/// ```
/// use paradox_core::EventMapTable;
///
/// let table: EventMapTable = serde_json::from_str(
///     r#"{"2": {"type": "partition", "message": "Partition", "sub": {"11": "Disarmed"}}}"#,
/// )
/// .unwrap();
/// assert!(table.get(2).unwrap().sub_entry(11).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EventMapTable {
    entries: BTreeMap<u16, EventMapEntry>,
}

impl EventMapTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, major: u16, entry: EventMapEntry) -> Self {
        self.insert(major, entry);
        self
    }

    pub fn insert(&mut self, major: u16, entry: EventMapEntry) {
        self.entries.insert(major, entry);
    }

    pub fn get(&self, major: u16) -> Option<&EventMapEntry> {
        self.entries.get(&major)
    }

    pub fn contains(&self, major: u16) -> bool {
        self.entries.contains_key(&major)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &EventMapEntry)> {
        self.entries.iter().map(|(major, entry)| (*major, entry))
    }
}

impl FromIterator<(u16, EventMapEntry)> for EventMapTable {
    fn from_iter<I: IntoIterator<Item = (u16, EventMapEntry)>>(iter: I) -> Self {
        EventMapTable {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{EventMapEntry, EventMapTable, MapValue, SubEntry};
    use crate::event::level::Level;

    #[test]
    fn bare_string_sub_becomes_message_field() {
        let sub = SubEntry::from("Armed");
        assert_eq!(
            sub.fields().get("message"),
            Some(&MapValue::Literal(json!("Armed")))
        );
        assert_eq!(sub.fields().len(), 1);
    }

    #[test]
    fn entry_sub_drops_nested_overrides() {
        let partial = EventMapEntry::new().message("Extra").sub(9, "ignored");
        let sub = SubEntry::from(partial);
        assert_eq!(sub.fields().len(), 1);
    }

    #[test]
    fn builder_stores_level_as_name() {
        let entry = EventMapEntry::new().level(Level::Critical);
        assert_eq!(
            entry.get("level").and_then(MapValue::as_literal),
            Some(&json!("CRITICAL"))
        );
    }

    #[test]
    fn deserialize_entry_with_mixed_sub_entries() {
        let entry: EventMapEntry = serde_json::from_value(json!({
            "level": "INFO",
            "message": "Zone",
            "tags": ["zone"],
            "priority": 3,
            "sub": {
                "1": "Open",
                "2": {"message": "Tamper", "level": "WARN", "tags": ["tamper"]}
            }
        }))
        .unwrap();

        assert!(entry.get("sub").is_none());
        assert_eq!(
            entry.get("priority").and_then(MapValue::as_literal),
            Some(&json!(3))
        );
        assert_eq!(entry.sub_entries().count(), 2);
        let tamper = entry.sub_entry(2).unwrap();
        assert_eq!(
            tamper.fields().get("level"),
            Some(&MapValue::Literal(json!("WARN")))
        );
    }

    #[test]
    fn deserialize_rejects_non_numeric_sub_key() {
        let err = serde_json::from_value::<EventMapEntry>(json!({"sub": {"one": "Open"}}))
            .unwrap_err();
        assert!(err.to_string().contains("not a minor code"));
    }

    #[test]
    fn deserialize_rejects_bad_sub_value() {
        let err =
            serde_json::from_value::<EventMapEntry>(json!({"sub": {"1": 5}})).unwrap_err();
        assert!(err.to_string().contains("string or an object"));
    }

    #[test]
    fn table_from_iterator() {
        let table: EventMapTable = [
            (1u16, EventMapEntry::new().message("One")),
            (2u16, EventMapEntry::new().message("Two")),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 2);
        assert!(table.contains(2));
        assert!(!table.contains(3));
    }

    #[test]
    fn literal_message_join() {
        let joined = MapValue::join_message(
            MapValue::literal("Base"),
            MapValue::literal("Extra"),
        );
        assert_eq!(joined, MapValue::Literal(json!("Base: Extra")));
    }

    #[test]
    fn literal_list_extend_keeps_order() {
        let extended = MapValue::extend_list(
            MapValue::literal(json!(["a", "b"])),
            vec![Value::from("c")],
        );
        assert_eq!(extended, MapValue::Literal(json!(["a", "b", "c"])));
    }

    #[test]
    fn deferred_values_compare_by_identity() {
        let a = MapValue::deferred(|_, _| Value::Null);
        let b = a.clone();
        let c = MapValue::deferred(|_, _| Value::Null);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
