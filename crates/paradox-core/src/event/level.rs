use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event severity, ordered from least to most severe.
///
/// # Examples
/// ```
/// use paradox_core::Level;
///
/// assert!(Level::Critical > Level::Warn);
/// assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
/// assert_eq!(Level::try_from(40u8).unwrap(), Level::Error);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE", try_from = "Value")]
pub enum Level {
    #[default]
    NotSet = 0,
    Debug = 10,
    Info = 20,
    Warn = 30,
    Error = 40,
    Critical = 50,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::NotSet,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::NotSet => "NOTSET",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Accepts either the level name or its numeric value.
    pub fn from_value(value: &Value) -> Option<Level> {
        match value {
            Value::String(name) => name.parse().ok(),
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .and_then(|n| Level::try_from(n).ok()),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level: {}", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl TryFrom<u8> for Level {
    type Error = UnknownLevel;

    fn try_from(value: u8) -> Result<Self, UnknownLevel> {
        Level::ALL
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or_else(|| UnknownLevel(value.to_string()))
    }
}

impl TryFrom<Value> for Level {
    type Error = UnknownLevel;

    fn try_from(value: Value) -> Result<Self, UnknownLevel> {
        Level::from_value(&value).ok_or_else(|| UnknownLevel(value.to_string()))
    }
}

impl From<Level> for Value {
    fn from(level: Level) -> Self {
        Value::String(level.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Level, UnknownLevel};

    #[test]
    fn default_is_notset() {
        assert_eq!(Level::default(), Level::NotSet);
    }

    #[test]
    fn serializes_as_upper_case_name() {
        assert_eq!(serde_json::to_value(Level::Warn).unwrap(), json!("WARN"));
        assert_eq!(serde_json::to_value(Level::NotSet).unwrap(), json!("NOTSET"));
    }

    #[test]
    fn deserializes_from_name_or_number() {
        let by_name: Level = serde_json::from_value(json!("CRITICAL")).unwrap();
        let by_number: Level = serde_json::from_value(json!(10)).unwrap();
        assert_eq!(by_name, Level::Critical);
        assert_eq!(by_number, Level::Debug);
        assert!(serde_json::from_value::<Level>(json!(15)).is_err());
    }

    #[test]
    fn ordering_follows_numeric_value() {
        let mut levels = Level::ALL;
        levels.reverse();
        levels.sort();
        assert_eq!(levels, Level::ALL);
    }

    #[test]
    fn try_from_rejects_unknown_values() {
        assert_eq!(Level::try_from(30u8), Ok(Level::Warn));
        assert_eq!(
            Level::try_from(15u8),
            Err(UnknownLevel("15".to_string()))
        );
        assert_eq!(Level::try_from(json!("warn")), Ok(Level::Warn));
        assert!(Level::try_from(json!(["WARN"])).is_err());
    }
}
