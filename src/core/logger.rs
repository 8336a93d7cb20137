//! Hierarchical logger
//!
//! Each [`Logger`] carries three independent overrides (level, formatter and
//! output). An unset override is resolved from the nearest ancestor that sets
//! it, walking parent links at call time, so a child always follows its
//! parent's current configuration until it sets its own.

use super::{
    error::{LoggerError, Result},
    formatter::Formatter,
    output::Output,
    severity::Severity,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};

pub struct Logger {
    name: String,
    /// Non-owning; a dropped parent turns this logger into a root.
    parent: Option<Weak<Logger>>,
    level: RwLock<Option<Severity>>,
    formatter: RwLock<Option<Arc<dyn Formatter>>>,
    output: RwLock<Option<Arc<dyn Output>>>,
}

impl Logger {
    /// Create a root logger with nothing configured
    #[must_use]
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::detached(name.into(), None))
    }

    /// Create a logger that inherits unset configuration from `parent`
    ///
    /// The child holds only a weak link: it does not keep `parent` alive.
    #[must_use]
    pub fn with_parent(name: impl Into<String>, parent: &Arc<Logger>) -> Arc<Self> {
        Arc::new(Self::detached(name.into(), Some(Arc::downgrade(parent))))
    }

    fn detached(name: String, parent: Option<Weak<Logger>>) -> Self {
        Self {
            name,
            parent,
            level: RwLock::new(None),
            formatter: RwLock::new(None),
            output: RwLock::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent logger, if one was given and is still alive
    pub fn parent(&self) -> Option<Arc<Logger>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn set_level(&self, level: Severity) {
        *self.level.write() = Some(level);
    }

    pub fn clear_level(&self) {
        *self.level.write() = None;
    }

    /// The level set on this logger itself, ignoring ancestors
    pub fn own_level(&self) -> Option<Severity> {
        *self.level.read()
    }

    /// Effective threshold: own level, else the nearest ancestor's, else
    /// [`Severity::BASELINE`]
    pub fn level(&self) -> Severity {
        self.resolve(|logger| logger.own_level())
            .unwrap_or(Severity::BASELINE)
    }

    pub fn set_formatter(&self, formatter: Arc<dyn Formatter>) {
        *self.formatter.write() = Some(formatter);
    }

    pub fn clear_formatter(&self) {
        *self.formatter.write() = None;
    }

    pub fn has_own_formatter(&self) -> bool {
        self.formatter.read().is_some()
    }

    /// Effective formatter, `None` when no logger up the chain sets one
    pub fn formatter(&self) -> Option<Arc<dyn Formatter>> {
        self.resolve(|logger| logger.formatter.read().clone())
    }

    pub fn set_output(&self, output: Arc<dyn Output>) {
        *self.output.write() = Some(output);
    }

    pub fn clear_output(&self) {
        *self.output.write() = None;
    }

    pub fn has_own_output(&self) -> bool {
        self.output.read().is_some()
    }

    /// Effective output, `None` when no logger up the chain sets one
    pub fn output(&self) -> Option<Arc<dyn Output>> {
        self.resolve(|logger| logger.output.read().clone())
    }

    /// Walk from this logger towards the root and return the first value
    /// `pick` yields.
    fn resolve<T>(&self, pick: impl Fn(&Logger) -> Option<T>) -> Option<T> {
        if let Some(value) = pick(self) {
            return Some(value);
        }

        let mut current = self.parent();
        while let Some(logger) = current {
            if let Some(value) = pick(&*logger) {
                return Some(value);
            }
            current = logger.parent();
        }
        None
    }

    #[inline]
    pub fn need_log(&self, severity: Severity) -> bool {
        severity.passes(self.level())
    }

    /// Format and write `message` if `severity` passes the effective level
    ///
    /// Filtered messages touch neither formatter nor output. A failing output
    /// is reported on stderr and otherwise ignored.
    ///
    /// # Panics
    ///
    /// Panics when the message passes the filter but no formatter or output is
    /// set on this logger or any ancestor. Configure the root logger (or use a
    /// [`LoggerRegistry`](crate::LoggerRegistry)) before logging.
    pub fn log(&self, severity: Severity, id: u32, message: &str) {
        if !self.need_log(severity) {
            return;
        }

        let (formatter, output) = match self.sinks() {
            Ok(sinks) => sinks,
            Err(e) => panic!("{}", e),
        };
        let formatted = formatter.format(&self.name, severity, id, message);
        if let Err(e) = output.write(&formatted) {
            eprintln!(
                "[LOGGER ERROR] Output '{}' failed for logger '{}': {}",
                output.name(),
                self.name,
                e
            );
        }
    }

    /// Like [`log`](Self::log), but returns misconfiguration and output
    /// failures instead of panicking or reporting them.
    pub fn try_log(&self, severity: Severity, id: u32, message: &str) -> Result<()> {
        if !self.need_log(severity) {
            return Ok(());
        }

        let (formatter, output) = self.sinks()?;
        let formatted = formatter.format(&self.name, severity, id, message);
        output.write(&formatted)
    }

    fn sinks(&self) -> Result<(Arc<dyn Formatter>, Arc<dyn Output>)> {
        let formatter = self
            .formatter()
            .ok_or_else(|| LoggerError::misconfigured(&self.name, "formatter"))?;
        let output = self
            .output()
            .ok_or_else(|| LoggerError::misconfigured(&self.name, "output"))?;
        Ok((formatter, output))
    }

    /// Flush the effective output, if any
    pub fn flush(&self) -> Result<()> {
        match self.output() {
            Some(output) => output.flush(),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn critical(&self, id: u32, message: &str) {
        self.log(Severity::Critical, id, message);
    }

    #[inline]
    pub fn error(&self, id: u32, message: &str) {
        self.log(Severity::Error, id, message);
    }

    #[inline]
    pub fn warning(&self, id: u32, message: &str) {
        self.log(Severity::Warning, id, message);
    }

    #[inline]
    pub fn notice(&self, id: u32, message: &str) {
        self.log(Severity::Notice, id, message);
    }

    #[inline]
    pub fn info(&self, id: u32, message: &str) {
        self.log(Severity::Info, id, message);
    }

    #[inline]
    pub fn debug(&self, id: u32, message: &str) {
        self.log(Severity::Debug, id, message);
    }

    #[inline]
    pub fn dump(&self, id: u32, message: &str) {
        self.log(Severity::Dump, id, message);
    }

    /// Create a builder for a logger named `name`
    ///
    /// # Example
    /// ```
    /// use rust_logger_hierarchy::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let root = Logger::builder("app")
    ///     .level(Severity::Info)
    ///     .formatter(Arc::new(PlainFormatter))
    ///     .output(Arc::new(MemoryOutput::new()))
    ///     .build();
    ///
    /// let net = Logger::builder("app.net").parent(&root).build();
    /// assert_eq!(net.level(), Severity::Info);
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("parent", &self.parent().map(|p| p.name.clone()))
            .field("level", &self.own_level())
            .field("has_formatter", &self.has_own_formatter())
            .field("has_output", &self.has_own_output())
            .finish()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
pub struct LoggerBuilder {
    name: String,
    parent: Option<Arc<Logger>>,
    level: Option<Severity>,
    formatter: Option<Arc<dyn Formatter>>,
    output: Option<Arc<dyn Output>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            level: None,
            formatter: None,
            output: None,
        }
    }

    /// Link the logger under `parent`
    #[must_use = "builder methods return a new value"]
    pub fn parent(mut self, parent: &Arc<Logger>) -> Self {
        self.parent = Some(Arc::clone(parent));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Arc<dyn Output>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn build(self) -> Arc<Logger> {
        let logger = match self.parent {
            Some(ref parent) => Logger::with_parent(self.name, parent),
            None => Logger::new(self.name),
        };

        if let Some(level) = self.level {
            logger.set_level(level);
        }
        if let Some(formatter) = self.formatter {
            logger.set_formatter(formatter);
        }
        if let Some(output) = self.output {
            logger.set_output(output);
        }

        logger
    }
}
