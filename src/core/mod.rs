//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod output;
pub mod registry;
pub mod severity;

pub use config::{FormatKind, LoggerConfig, LoggingConfig, OutputKind};
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use logger::{Logger, LoggerBuilder};
pub use output::Output;
pub use registry::{LoggerRegistry, ROOT_LOGGER_NAME};
pub use severity::Severity;
