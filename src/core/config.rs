//! Declarative logging configuration
//!
//! A [`LoggingConfig`] describes the root overrides plus per-logger overrides
//! keyed by dotted name. It is applied to a
//! [`LoggerRegistry`](super::registry::LoggerRegistry).
//!
//! ```
//! use rust_logger_hierarchy::{LoggingConfig, Severity};
//!
//! let config = LoggingConfig::from_json_str(r#"{
//!     "level": "info",
//!     "loggers": { "net.http": { "level": "dump", "format": "json" } }
//! }"#).unwrap();
//!
//! assert_eq!(config.level, Some(Severity::Info));
//! assert_eq!(config.loggers["net.http"].level, Some(Severity::Dump));
//! ```

use super::{
    error::{LoggerError, Result},
    formatter::Formatter,
    output::Output,
    severity::Severity,
};
use crate::formatters::{JsonFormatter, PlainFormatter, TextFormatter};
use crate::outputs::{ConsoleOutput, FileOutput, MemoryOutput};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Text,
    Json,
    Plain,
}

impl FormatKind {
    pub fn build(self) -> Arc<dyn Formatter> {
        match self {
            FormatKind::Text => Arc::new(TextFormatter::new()),
            FormatKind::Json => Arc::new(JsonFormatter::new()),
            FormatKind::Plain => Arc::new(PlainFormatter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputKind {
    Stdout,
    Stderr,
    File { path: PathBuf },
    Memory,
}

impl OutputKind {
    pub fn build(&self) -> Result<Arc<dyn Output>> {
        let output: Arc<dyn Output> = match self {
            OutputKind::Stdout => Arc::new(ConsoleOutput::stdout()),
            OutputKind::Stderr => Arc::new(ConsoleOutput::stderr()),
            OutputKind::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("file output", "empty path"));
                }
                Arc::new(FileOutput::new(path)?)
            }
            OutputKind::Memory => Arc::new(MemoryOutput::new()),
        };
        Ok(output)
    }
}

/// Overrides for a single logger; an absent field leaves it inherited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputKind>,
    /// Per-logger overrides keyed by dotted name
    pub loggers: BTreeMap<String, LoggerConfig>,
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::path_access("read", path, e))?;
        Self::from_json_str(&contents)
    }

    /// The root overrides as a [`LoggerConfig`]
    pub fn root(&self) -> LoggerConfig {
        LoggerConfig {
            level: self.level,
            format: self.format,
            output: self.output.clone(),
        }
    }
}
