//! Event map resolution.
//!
//! Resolution copies the table entry for `major`, merges the `minor`
//! override onto the copy, evaluates deferred values once, then reads the
//! core fields out. The shared table is never written to.
//!
//! Merge rules for an override field:
//! - `message` becomes `"<base>: <override>"` when the entry has a message,
//!   otherwise the override;
//! - a list override extends the base list (base items first);
//! - anything else replaces the base value.

use std::collections::BTreeMap;

use log::{debug, trace};
use serde_json::{Map, Value};

use super::Event;
use super::error::EventError;
use super::level::Level;
use super::map::{EventMapTable, Fields, MapValue, SubEntry};
use super::names::NamesTable;

/// Attribute names of [`Event`]; map keys with these names never land in
/// `additional_data`.
pub const EVENT_ATTRIBUTES: &[&str] = &[
    "timestamp",
    "partition",
    "module",
    "label",
    "label_type",
    "major",
    "minor",
    "level",
    "type",
    "message_tpl",
    "message",
    "change",
    "tags",
    "additional_data",
    "name",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFields {
    pub level: Level,
    pub kind: String,
    pub message_tpl: String,
    pub tags: Vec<String>,
    pub change: Map<String, Value>,
    pub additional_data: BTreeMap<String, Value>,
}

/// Resolve the semantic fields for `(major, minor)`.
///
/// `event` is the event under construction; its current level, type and
/// change map are the defaults for fields the entry does not set. Deferred
/// values receive `event` and `names`.
pub fn resolve(
    major: u16,
    minor: u16,
    table: &EventMapTable,
    event: &Event,
    names: &NamesTable,
) -> Result<ResolvedFields, EventError> {
    let entry = table.get(major).ok_or(EventError::UnknownMajor { major })?;

    let mut working = entry.fields().clone();
    if let Some(sub) = entry.sub_entry(minor) {
        trace!("merging override for event {major}/{minor}");
        merge_sub(&mut working, sub);
    }

    let mut resolved: BTreeMap<String, Value> = working
        .into_iter()
        .map(|(key, value)| {
            if value.is_deferred() {
                trace!("resolving deferred field `{key}` for event {major}/{minor}");
            }
            let value = value.resolve(event, names);
            (key, value)
        })
        .collect();

    let level = match present(&resolved, "level") {
        Some(value) => Level::from_value(value)
            .ok_or_else(|| invalid_field("level", "a level name or number", value))?,
        None => event.level(),
    };
    let kind = string_field(&resolved, "type")?.unwrap_or_else(|| event.kind().to_string());
    let message_tpl = string_field(&resolved, "message")?.unwrap_or_default();
    let tags = tags_field(&resolved)?;
    let change = match present(&resolved, "change") {
        Some(Value::Object(change)) => change.clone(),
        Some(other) => return Err(invalid_field("change", "an object", other)),
        None => event.change().clone(),
    };

    resolved.retain(|key, _| !EVENT_ATTRIBUTES.contains(&key.as_str()));
    debug!(
        "resolved event {major}/{minor}: level={level} type={kind} extra={}",
        resolved.len()
    );

    Ok(ResolvedFields {
        level,
        kind,
        message_tpl,
        tags,
        change,
        additional_data: resolved,
    })
}

fn merge_sub(working: &mut Fields, sub: &SubEntry) {
    for (key, over) in sub.fields() {
        let merged = match (key.as_str(), working.remove(key), over) {
            ("message", Some(base), over) => MapValue::join_message(base, over.clone()),
            (_, Some(base), MapValue::Literal(Value::Array(items))) => {
                MapValue::extend_list(base, items.clone())
            }
            (_, _, over) => over.clone(),
        };
        working.insert(key.clone(), merged);
    }
}

/// A null value reads as absent so resolvers can fall back to defaults.
fn present<'a>(resolved: &'a BTreeMap<String, Value>, key: &str) -> Option<&'a Value> {
    resolved.get(key).filter(|value| !value.is_null())
}

fn string_field(
    resolved: &BTreeMap<String, Value>,
    field: &'static str,
) -> Result<Option<String>, EventError> {
    match present(resolved, field) {
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(invalid_field(field, "a string", other)),
        None => Ok(None),
    }
}

fn tags_field(resolved: &BTreeMap<String, Value>) -> Result<Vec<String>, EventError> {
    let Some(value) = present(resolved, "tags") else {
        return Ok(Vec::new());
    };
    let Value::Array(items) = value else {
        return Err(invalid_field("tags", "a list of strings", value));
    };
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid_field("tags", "a list of strings", value))
        })
        .collect()
}

fn invalid_field(field: &'static str, expected: &'static str, found: &Value) -> EventError {
    EventError::InvalidField {
        field,
        expected,
        found: found.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::{Value, json};

    use super::{EVENT_ATTRIBUTES, resolve};
    use crate::event::error::EventError;
    use crate::event::level::Level;
    use crate::event::map::{EventMapEntry, EventMapTable};
    use crate::event::names::NamesTable;
    use crate::event::tests::blank_event;

    fn base_table() -> EventMapTable {
        EventMapTable::new().with(
            1,
            EventMapEntry::new()
                .message("Base")
                .tags(["a"])
                .sub(2, EventMapEntry::new().message("Extra").tags(["b"])),
        )
    }

    #[test]
    fn override_concatenates_message_and_extends_tags() {
        // Lists are concatenated (base first), not dropped.
        let resolved = resolve(1, 2, &base_table(), &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(resolved.message_tpl, "Base: Extra");
        assert_eq!(resolved.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn unmatched_minor_uses_base_entry() {
        let resolved =
            resolve(1, 999, &base_table(), &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(resolved.message_tpl, "Base");
        assert_eq!(resolved.tags, vec!["a".to_string()]);
    }

    #[test]
    fn unknown_major_fails() {
        let err = resolve(5, 0, &base_table(), &blank_event(), &NamesTable::new()).unwrap_err();
        assert_eq!(err, EventError::UnknownMajor { major: 5 });
    }

    #[test]
    fn repeated_resolution_leaves_table_untouched() {
        let table = base_table();
        let snapshot = table.clone();
        for _ in 0..3 {
            resolve(1, 2, &table, &blank_event(), &NamesTable::new()).unwrap();
        }
        assert_eq!(table, snapshot);
        let resolved = resolve(1, 2, &table, &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(resolved.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn override_message_without_base_replaces() {
        let table = EventMapTable::new().with(3, EventMapEntry::new().sub(4, "Only"));
        let resolved = resolve(3, 4, &table, &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(resolved.message_tpl, "Only");
    }

    #[test]
    fn scalar_override_replaces_base() {
        let table = EventMapTable::new().with(
            3,
            EventMapEntry::new()
                .level(Level::Info)
                .kind("zone")
                .sub(4, EventMapEntry::new().level(Level::Critical).kind("alarm")),
        );
        let resolved = resolve(3, 4, &table, &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(resolved.level, Level::Critical);
        assert_eq!(resolved.kind, "alarm");
    }

    #[test]
    fn additional_data_skips_message_and_event_attributes() {
        let mut entry = EventMapEntry::new()
            .message("Zone")
            .field("priority", 3)
            .field("bypass", true);
        for name in EVENT_ATTRIBUTES {
            if !["level", "type", "tags", "change", "message"].contains(name) {
                entry = entry.field(name, "shadow");
            }
        }
        let table = EventMapTable::new().with(6, entry);
        let resolved = resolve(6, 0, &table, &blank_event(), &NamesTable::new()).unwrap();

        assert_eq!(resolved.additional_data.len(), 2);
        assert_eq!(resolved.additional_data["priority"], json!(3));
        assert_eq!(resolved.additional_data["bypass"], json!(true));
        assert!(!resolved.additional_data.contains_key("message"));
        for name in EVENT_ATTRIBUTES {
            assert!(!resolved.additional_data.contains_key(*name));
        }
    }

    #[test]
    fn deferred_values_run_once_after_merge() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let table = EventMapTable::new().with(
            8,
            EventMapEntry::new()
                .message("Base")
                .deferred("change", move |event, _| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    json!({"minor": event.minor()})
                })
                .sub(1, "Override"),
        );

        let resolved = resolve(8, 1, &table, &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(resolved.change["minor"], json!(0));
        assert_eq!(resolved.message_tpl, "Base: Override");
    }

    #[test]
    fn deferred_values_see_names_table() {
        let names = NamesTable::new().with("user", 0, "Master");
        let table = EventMapTable::new().with(
            9,
            EventMapEntry::new().deferred("message", |event, names| {
                let user = names.lookup("user", event.minor()).unwrap_or("-");
                Value::String(format!("User {user} code entered"))
            }),
        );
        let resolved = resolve(9, 0, &table, &blank_event(), &names).unwrap();
        assert_eq!(resolved.message_tpl, "User Master code entered");
    }

    #[test]
    fn deferred_base_message_still_concatenates() {
        let table = EventMapTable::new().with(
            10,
            EventMapEntry::new()
                .deferred("message", |_, _| json!("Computed"))
                .deferred("tags", |_, _| json!(["x"]))
                .sub(1, EventMapEntry::new().message("Extra").tags(["y"])),
        );
        let resolved = resolve(10, 1, &table, &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(resolved.message_tpl, "Computed: Extra");
        assert_eq!(resolved.tags, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn null_deferred_value_falls_back_to_default() {
        let table = EventMapTable::new().with(
            11,
            EventMapEntry::new().deferred("type", |_, _| Value::Null),
        );
        let resolved = resolve(11, 0, &table, &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(resolved.kind, "system");
    }

    #[test]
    fn level_accepts_numeric_value() {
        let table = EventMapTable::new().with(12, EventMapEntry::new().field("level", 40));
        let resolved = resolve(12, 0, &table, &blank_event(), &NamesTable::new()).unwrap();
        assert_eq!(resolved.level, Level::Error);
    }

    #[test]
    fn wrongly_shaped_fields_are_rejected() {
        let table = EventMapTable::new()
            .with(13, EventMapEntry::new().field("tags", "zone"))
            .with(14, EventMapEntry::new().field("level", "LOUD"))
            .with(15, EventMapEntry::new().field("change", json!([1])));

        for (major, field) in [(13, "tags"), (14, "level"), (15, "change")] {
            let err =
                resolve(major, 0, &table, &blank_event(), &NamesTable::new()).unwrap_err();
            assert!(
                matches!(err, EventError::InvalidField { field: f, .. } if f == field),
                "major {major}: {err}"
            );
        }
    }
}
