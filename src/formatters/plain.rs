//! Identity formatter

use crate::core::{Formatter, Severity};

/// Passes the message through untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, _name: &str, _severity: Severity, _id: u32, message: &str) -> String {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_unchanged() {
        let formatted = PlainFormatter.format("any", Severity::Critical, 9, "as is, key='v'");
        assert_eq!(formatted, "as is, key='v'");
    }
}
