//! Spy doubles shared by the integration suites

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_logger_hierarchy::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCall {
    pub name: String,
    pub severity: Severity,
    pub id: u32,
    pub message: String,
}

/// Formatter that records its last call and returns the message unchanged
#[derive(Debug, Default)]
pub struct FormatterSpy {
    last: Mutex<Option<FormatCall>>,
    calls: Mutex<usize>,
}

impl FormatterSpy {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn last(&self) -> Option<FormatCall> {
        self.last.lock().clone()
    }

    pub fn last_name(&self) -> Option<String> {
        self.last().map(|call| call.name)
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

impl Formatter for FormatterSpy {
    fn format(&self, name: &str, severity: Severity, id: u32, message: &str) -> String {
        *self.last.lock() = Some(FormatCall {
            name: name.to_string(),
            severity,
            id,
            message: message.to_string(),
        });
        *self.calls.lock() += 1;
        message.to_string()
    }
}

/// Whether two trait-object handles point at the same instance
pub fn same_instance<T: ?Sized, U: ?Sized>(a: &Arc<T>, b: &Arc<U>) -> bool {
    std::ptr::eq(Arc::as_ptr(a).cast::<()>(), Arc::as_ptr(b).cast::<()>())
}

/// A root logger wired to a fresh formatter spy and memory output
pub fn configured_logger(name: &str) -> (Arc<Logger>, Arc<FormatterSpy>, Arc<MemoryOutput>) {
    let formatter = FormatterSpy::new();
    let output = Arc::new(MemoryOutput::new());
    let logger = Logger::new(name);
    logger.set_formatter(formatter.clone());
    logger.set_output(output.clone());
    (logger, formatter, output)
}
