//! Human-readable single-line formatter

use super::timestamp::TimestampFormat;
use crate::core::{Formatter, Severity};
use colored::Colorize;

/// Renders `[<timestamp>] [<LEVEL>] <logger>(<id>): <message>`
#[derive(Debug, Clone)]
pub struct TextFormatter {
    timestamp_format: Option<TimestampFormat>,
    use_colors: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            timestamp_format: Some(TimestampFormat::default()),
            use_colors: false,
        }
    }

    /// Set the timestamp format
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_hierarchy::formatters::{TextFormatter, TimestampFormat};
    ///
    /// let formatter = TextFormatter::new().with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Drop the timestamp column, making the output deterministic
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, name: &str, severity: Severity, id: u32, message: &str) -> String {
        let level_str = if self.use_colors {
            format!("{:8}", severity.to_str())
                .color(severity.color())
                .to_string()
        } else {
            format!("{:8}", severity.to_str())
        };

        let base = format!("[{}] {}({}): {}", level_str, name, id, message);

        match self.timestamp_format {
            Some(ref timestamp_format) => format!("[{}] {}", timestamp_format.stamp_now(), base),
            None => base,
        }
    }
}
