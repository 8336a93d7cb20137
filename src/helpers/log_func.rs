//! Compose a base message with parameters and route it through a logger

use super::parameter::ParameterPair;
use crate::core::{Logger, Severity};

/// `message` followed by each pair's tail rendering, in the order given
pub fn compose_message(message: &str, parameters: &[ParameterPair]) -> String {
    let mut composed = String::with_capacity(message.len() + parameters.len() * 16);
    composed.push_str(message);
    for parameter in parameters {
        parameter.write_tail(&mut composed, parameter.delimiter());
    }
    composed
}

/// Log `message` with `parameters` appended
///
/// Nothing is composed when `logger` would filter `severity`.
///
/// ```
/// use rust_logger_hierarchy::prelude::*;
/// use std::sync::Arc;
///
/// let output = Arc::new(MemoryOutput::new());
/// let logger = Logger::builder("app")
///     .level(Severity::Debug)
///     .formatter(Arc::new(PlainFormatter))
///     .output(output.clone())
///     .build();
///
/// log_func(&logger, Severity::Debug, 100, "connected", &[
///     ParameterPair::new("host", "db1"),
///     ParameterPair::new("port", 5432),
/// ]);
/// assert_eq!(output.contents(), "connected, host='db1', port='5432'");
/// ```
pub fn log_func(
    logger: &Logger,
    severity: Severity,
    id: u32,
    message: &str,
    parameters: &[ParameterPair],
) {
    if !logger.need_log(severity) {
        return;
    }

    if parameters.is_empty() {
        logger.log(severity, id, message);
    } else {
        logger.log(severity, id, &compose_message(message, parameters));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_without_parameters() {
        assert_eq!(compose_message("message", &[]), "message");
    }

    #[test]
    fn test_compose_keeps_order_and_duplicates() {
        let composed = compose_message(
            "m",
            &[
                ParameterPair::new("b", 2),
                ParameterPair::new("a", 1),
                ParameterPair::new("b", 2),
            ],
        );
        assert_eq!(composed, "m, b='2', a='1', b='2'");
    }

    #[test]
    fn test_compose_skips_empty_pairs() {
        let composed = compose_message(
            "m",
            &[
                ParameterPair::empty(),
                ParameterPair::new("k", "v").with_delimiter(";"),
            ],
        );
        assert_eq!(composed, "m; k='v'");
    }
}
