//! Error types for the logger hierarchy

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A file the logger needs could not be opened or read
    #[error("cannot {action} '{}': {source}", path.display())]
    PathAccess {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output failed to write or flush
    #[error("output I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed logging configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed configuration with a value that cannot be used
    #[error("invalid {component} configuration: {message}")]
    InvalidConfiguration { component: String, message: String },

    #[error("unknown severity '{0}'")]
    UnknownSeverity(String),

    /// No formatter or output resolvable anywhere up the chain
    #[error("Logger '{logger}' has no {component} configured on itself or any ancestor")]
    Misconfigured {
        logger: String,
        component: &'static str,
    },

    /// Failure reported by a custom output
    #[error("output '{output}' rejected the message: {reason}")]
    Rejected { output: String, reason: String },
}

impl LoggerError {
    pub fn path_access(action: &'static str, path: &Path, source: io::Error) -> Self {
        LoggerError::PathAccess {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn unknown_severity(name: impl Into<String>) -> Self {
        LoggerError::UnknownSeverity(name.into())
    }

    pub fn misconfigured(logger: impl Into<String>, component: &'static str) -> Self {
        LoggerError::Misconfigured {
            logger: logger.into(),
            component,
        }
    }

    pub fn rejected(output: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::Rejected {
            output: output.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_misconfigured_message() {
        let err = LoggerError::misconfigured("app.db", "output");
        assert_eq!(
            err.to_string(),
            "Logger 'app.db' has no output configured on itself or any ancestor"
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            LoggerError::unknown_severity("LOUD").to_string(),
            "unknown severity 'LOUD'"
        );
        assert_eq!(
            LoggerError::config("file output", "empty path").to_string(),
            "invalid file output configuration: empty path"
        );
        assert_eq!(
            LoggerError::rejected("udp", "closed").to_string(),
            "output 'udp' rejected the message: closed"
        );
    }

    #[test]
    fn test_path_access_keeps_source() {
        let source = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = LoggerError::path_access("read", Path::new("/etc/logging.json"), source);

        assert_eq!(
            err.to_string(),
            "cannot read '/etc/logging.json': no such file"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_conversions() {
        let err: LoggerError = io::Error::other("disk full").into();
        assert!(matches!(err, LoggerError::Io(_)));

        let json = serde_json::from_str::<u8>("x").unwrap_err();
        assert!(matches!(LoggerError::from(json), LoggerError::Json(_)));
    }
}
