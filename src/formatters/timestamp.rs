//! Timestamps stamped onto formatted messages

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Clock representation used by [`TextFormatter`](super::TextFormatter) and
/// [`JsonFormatter`](super::JsonFormatter)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// UTC with milliseconds, `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,
    /// UTC with microseconds and explicit offset
    Rfc3339,
    /// Whole seconds since the epoch
    Unix,
    UnixMillis,
    /// strftime pattern
    Custom(String),
}

/// A rendered timestamp; epoch formats stay numeric
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stamp {
    Text(String),
    Epoch(i64),
}

impl TimestampFormat {
    pub fn stamp(&self, at: &DateTime<Utc>) -> Stamp {
        match self {
            TimestampFormat::Iso8601 => {
                Stamp::Text(at.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            TimestampFormat::Rfc3339 => {
                Stamp::Text(at.to_rfc3339_opts(SecondsFormat::Micros, false))
            }
            TimestampFormat::Unix => Stamp::Epoch(at.timestamp()),
            TimestampFormat::UnixMillis => Stamp::Epoch(at.timestamp_millis()),
            TimestampFormat::Custom(pattern) => Stamp::Text(at.format(pattern).to_string()),
        }
    }

    pub fn stamp_now(&self) -> Stamp {
        self.stamp(&Utc::now())
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stamp::Text(text) => f.write_str(text),
            Stamp::Epoch(value) => write!(f, "{}", value),
        }
    }
}

impl From<Stamp> for Value {
    fn from(stamp: Stamp) -> Self {
        match stamp {
            Stamp::Text(text) => Value::String(text),
            Stamp::Epoch(value) => Value::from(value),
        }
    }
}
