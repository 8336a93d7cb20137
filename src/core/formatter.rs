//! Formatter capability: turns one log call into the string handed to an output

use super::severity::Severity;

/// Renders a message for the logger that received it.
///
/// Formatters are shared between loggers through `Arc`, so every logger that
/// resolves to an instance observes the same behavior.
pub trait Formatter: Send + Sync {
    fn format(&self, name: &str, severity: Severity, id: u32, message: &str) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&str, Severity, u32, &str) -> String + Send + Sync,
{
    fn format(&self, name: &str, severity: Severity, id: u32, message: &str) -> String {
        self(name, severity, id, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_closure_formatter() {
        let formatter: Arc<dyn Formatter> =
            Arc::new(|name: &str, severity: Severity, id: u32, message: &str| {
                format!("{}|{}|{}|{}", name, severity, id, message)
            });

        assert_eq!(
            formatter.format("net", Severity::Notice, 7, "up"),
            "net|NOTICE|7|up"
        );
    }
}
