use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name returned when an event has no display name.
pub const UNKNOWN_NAME: &str = "-";

/// Display names keyed by event type, then by partition number or minor code.
///
/// # Examples
/// ```
/// use paradox_core::NamesTable;
///
/// let names = NamesTable::new()
///     .with("partition", 1, "Ground floor")
///     .with("zone", 3, "Kitchen");
/// assert_eq!(names.lookup("zone", 3), Some("Kitchen"));
/// assert_eq!(names.lookup("zone", 4), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamesTable {
    types: BTreeMap<String, BTreeMap<u16, String>>,
}

impl NamesTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: &str, key: u16, name: &str) -> Self {
        self.insert(kind, key, name);
        self
    }

    pub fn insert(&mut self, kind: &str, key: u16, name: &str) {
        self.types
            .entry(kind.to_string())
            .or_default()
            .insert(key, name.to_string());
    }

    pub fn lookup(&self, kind: &str, key: u16) -> Option<&str> {
        self.types
            .get(kind)
            .and_then(|names| names.get(&key))
            .map(String::as_str)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
