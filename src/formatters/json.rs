//! JSON-lines formatter for machine consumption

use super::timestamp::TimestampFormat;
use crate::core::{Formatter, Severity};
use serde_json::{Map, Value};

/// Renders each message as one JSON object:
/// `{"timestamp":..,"level":"INFO","logger":"app","id":7,"message":"ready"}`
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    timestamp_format: Option<TimestampFormat>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            timestamp_format: Some(TimestampFormat::default()),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, name: &str, severity: Severity, id: u32, message: &str) -> String {
        let mut record = Map::with_capacity(5);
        if let Some(ref format) = self.timestamp_format {
            record.insert("timestamp".into(), format.stamp_now().into());
        }
        record.insert("level".into(), severity.to_str().into());
        record.insert("logger".into(), name.into());
        record.insert("id".into(), id.into());
        record.insert("message".into(), message.into());

        Value::Object(record).to_string()
    }
}
