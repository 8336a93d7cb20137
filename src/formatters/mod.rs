//! Formatter implementations

pub mod json;
pub mod plain;
pub mod text;
pub mod timestamp;

pub use json::JsonFormatter;
pub use plain::PlainFormatter;
pub use text::TextFormatter;
pub use timestamp::{Stamp, TimestampFormat};

// Re-export the capability trait next to its implementations
pub use crate::core::Formatter;
