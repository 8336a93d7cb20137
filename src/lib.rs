//! # Rust Logger Hierarchy
//!
//! A tree of named loggers. Every logger has an optional severity threshold,
//! formatter and output; whatever a logger leaves unset is taken from the
//! nearest ancestor that sets it, at the time of each call.
//!
//! ## Features
//!
//! - **Inheritance**: level, formatter and output resolve independently up the tree
//! - **Zero-cost filtering**: filtered messages never reach formatter or output
//! - **Helpers**: `key='value'` parameters and fixed-width hexdumps
//! - **Pluggable back ends**: text, JSON and plain formatters; console, file and memory outputs
//!
//! ```
//! use rust_logger_hierarchy::prelude::*;
//! use std::sync::Arc;
//!
//! let output = Arc::new(MemoryOutput::new());
//! let registry = LoggerRegistry::with_root(Arc::new(PlainFormatter), output.clone());
//! registry.root().set_level(Severity::Info);
//!
//! let http = registry.get("net.http");
//! http.info(1, "listening");
//! http.debug(2, "not shown");
//!
//! assert_eq!(output.contents(), "listening");
//! ```

pub mod core;
pub mod formatters;
pub mod helpers;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        Formatter, Logger, LoggerBuilder, LoggerError, LoggerRegistry, LoggingConfig, Output,
        Result, Severity,
    };
    pub use crate::formatters::{JsonFormatter, PlainFormatter, TextFormatter, TimestampFormat};
    pub use crate::helpers::{format_hexdump, log_func, log_hexdump, HexDumpOptions, ParameterPair};
    pub use crate::outputs::{ConsoleOutput, FileOutput, MemoryOutput};
}

pub use crate::core::{
    FormatKind, Formatter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerRegistry,
    LoggingConfig, Output, OutputKind, Result, Severity, ROOT_LOGGER_NAME,
};
pub use formatters::{JsonFormatter, PlainFormatter, TextFormatter, TimestampFormat};
pub use helpers::{
    compose_message, format_hexdump, log_func, log_hexdump, HexDumpOptions, ParameterPair,
};
pub use outputs::{ConsoleOutput, ConsoleStream, FileOutput, MemoryOutput};
