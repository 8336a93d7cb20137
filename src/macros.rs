//! Logging macros with inline parameters.
//!
//! These macros wrap [`log_func`](crate::helpers::log_func) and
//! [`log_hexdump`](crate::helpers::log_hexdump) so parameters can be written as
//! `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use rust_logger_hierarchy::prelude::*;
//! use rust_logger_hierarchy::{info, notice};
//! use std::sync::Arc;
//!
//! let output = Arc::new(MemoryOutput::new());
//! let logger = Logger::builder("server")
//!     .level(Severity::Info)
//!     .formatter(Arc::new(PlainFormatter))
//!     .output(output.clone())
//!     .build();
//!
//! // Basic logging
//! info!(logger, 1, "Server started");
//!
//! // With parameters
//! let port = 8080;
//! notice!(logger, 2, "Listening", "port" => port, "tls" => false);
//!
//! assert_eq!(output.contents(), "Server startedListening, port='8080', tls='false'");
//! ```

/// Log a message with optional `key => value` parameters.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let registry = LoggerRegistry::new();
/// # let logger = registry.get("app");
/// use rust_logger_hierarchy::log;
/// log!(logger, Severity::Critical, 100, "Simple message");
/// log!(logger, Severity::Error, 101, "Request failed", "status" => 500, "path" => "/api");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $id:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::helpers::log_func(
            &$logger,
            $severity,
            $id,
            &$message,
            &[$($crate::helpers::ParameterPair::new($key, $value)),*],
        )
    };
}

/// Log a critical message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a notice message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a dump message, the most verbose severity.
#[macro_export]
macro_rules! dump {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Dump, $($arg)+)
    };
}

/// Log a hexdump of a byte buffer at debug severity.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let registry = LoggerRegistry::new();
/// # let logger = registry.get("usb");
/// use rust_logger_hierarchy::hexdump;
/// let packet = [0x02u8, 0x10, 0xff];
/// hexdump!(logger, 7, packet);
/// hexdump!(logger, 7, packet, indent = 4);
/// hexdump!(logger, 7, packet, indent = 2, group = 4);
/// ```
#[macro_export]
macro_rules! hexdump {
    ($logger:expr, $id:expr, $data:expr $(, indent = $indent:expr)? $(, group = $group:expr)? $(,)?) => {{
        let options = $crate::helpers::HexDumpOptions::new()
            $(.with_indent($indent))?
            $(.with_group_size($group))?;
        $crate::helpers::log_hexdump(&$logger, $id, &$data[..], &options)
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, Severity};
    use crate::formatters::PlainFormatter;
    use crate::outputs::MemoryOutput;
    use std::sync::Arc;

    fn capture(level: Severity) -> (Arc<Logger>, Arc<MemoryOutput>) {
        let output = Arc::new(MemoryOutput::new());
        let logger = Logger::builder("macros")
            .level(level)
            .formatter(Arc::new(PlainFormatter))
            .output(output.clone())
            .build();
        (logger, output)
    }

    #[test]
    fn test_log_macro() {
        let (logger, output) = capture(Severity::Dump);
        log!(logger, Severity::Info, 1, "plain");
        log!(logger, Severity::Info, 2, String::from(" owned"), "k" => "v",);
        assert_eq!(output.contents(), "plain owned, k='v'");
    }

    #[test]
    fn test_severity_macros() {
        let (logger, output) = capture(Severity::Dump);
        critical!(logger, 1, "c");
        error!(logger, 2, "e");
        warning!(logger, 3, "w");
        notice!(logger, 4, "n");
        info!(logger, 5, "i");
        debug!(logger, 6, "d", "x" => 1);
        dump!(logger, 7, "u");
        assert_eq!(output.contents(), "cewnid, x='1'u");
    }

    #[test]
    fn test_macros_respect_level() {
        let (logger, output) = capture(Severity::Warning);
        warning!(logger, 1, "kept");
        notice!(logger, 2, "dropped", "key" => "value");
        assert_eq!(output.contents(), "kept");
        assert_eq!(output.write_count(), 1);
    }

    #[test]
    fn test_hexdump_macro() {
        let (logger, output) = capture(Severity::Debug);
        hexdump!(logger, 1, b"AB", indent = 1, group = 2);
        assert_eq!(
            output.contents(),
            " 00000000  4142                                      AB              "
        );

        output.clear();
        hexdump!(logger, 1, Vec::<u8>::new());
        assert_eq!(output.write_count(), 0);
    }
}
