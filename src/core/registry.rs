//! Registry owning a tree of loggers addressed by dotted names
//!
//! Loggers link to their parents weakly; the registry holds the strong
//! references that keep every node of the tree alive. The root always has a
//! formatter and an output, so every logger handed out by a registry can log.

use super::{
    config::{FormatKind, LoggerConfig, LoggingConfig, OutputKind},
    error::Result,
    formatter::Formatter,
    logger::Logger,
    output::Output,
    severity::Severity,
};
use crate::formatters::TextFormatter;
use crate::outputs::ConsoleOutput;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const ROOT_LOGGER_NAME: &str = "root";

pub struct LoggerRegistry {
    root: Arc<Logger>,
    loggers: RwLock<BTreeMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Registry whose root writes text lines to stderr
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(
            Arc::new(TextFormatter::new()),
            Arc::new(ConsoleOutput::stderr()),
        )
    }

    #[must_use]
    pub fn with_root(formatter: Arc<dyn Formatter>, output: Arc<dyn Output>) -> Self {
        let root = Logger::builder(ROOT_LOGGER_NAME)
            .formatter(formatter)
            .output(output)
            .build();

        Self {
            root,
            loggers: RwLock::new(BTreeMap::new()),
        }
    }

    /// Build a registry and apply `config` to it
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let registry = Self::new();
        registry.apply_config(config)?;
        Ok(registry)
    }

    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(&self.root)
    }

    /// The logger registered under `name`, creating it and any missing
    /// ancestors (`a` and `a.b` for `a.b.c`) on first use
    ///
    /// Empty segments are ignored and leading `root` segments name the root
    /// itself, so `""`, `"root"`, `"root.a"` and `".a"` resolve as `""`,
    /// `""`, `"a"` and `"a"`.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        let name = canonical_name(name);
        if name.is_empty() {
            return self.root();
        }
        if let Some(logger) = self.loggers.read().get(&*name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        let mut parent = Arc::clone(&self.root);
        let mut path = String::with_capacity(name.len());

        for segment in name.split('.') {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(segment);

            let logger = loggers
                .entry(path.clone())
                .or_insert_with(|| Logger::with_parent(path.clone(), &parent));
            parent = Arc::clone(logger);
        }

        parent
    }

    /// The logger registered under `name`, without creating it
    pub fn lookup(&self, name: &str) -> Option<Arc<Logger>> {
        let name = canonical_name(name);
        if name.is_empty() {
            return Some(self.root());
        }
        self.loggers.read().get(&*name).cloned()
    }

    /// Names of every registered logger except the root, in sorted order
    pub fn names(&self) -> Vec<String> {
        self.loggers.read().keys().cloned().collect()
    }

    /// Apply root and per-logger overrides from `config`
    ///
    /// Fields absent from the configuration leave the current override as is.
    /// Every formatter and output is built before anything is applied, so a
    /// failing call changes no logger and registers no new names.
    pub fn apply_config(&self, config: &LoggingConfig) -> Result<()> {
        let root = Overrides::build(&config.root())?;
        let loggers = config
            .loggers
            .iter()
            .map(|(name, logger_config)| Overrides::build(logger_config).map(|o| (name, o)))
            .collect::<Result<Vec<_>>>()?;

        root.apply(&self.root);
        for (name, overrides) in loggers {
            overrides.apply(&self.get(name));
        }
        Ok(())
    }

    /// Flush the root output and every registered logger's own output
    pub fn flush(&self) -> Result<()> {
        self.root.flush()?;
        for logger in self.loggers.read().values() {
            if logger.has_own_output() {
                logger.flush()?;
            }
        }
        Ok(())
    }
}

/// `name` with empty segments and leading `root` segments removed
fn canonical_name(name: &str) -> Cow<'_, str> {
    let is_canonical = !name.split('.').any(str::is_empty)
        && name.split('.').next() != Some(ROOT_LOGGER_NAME);
    if is_canonical {
        return Cow::Borrowed(name);
    }

    let segments: Vec<&str> = name
        .split('.')
        .filter(|segment| !segment.is_empty())
        .skip_while(|&segment| segment == ROOT_LOGGER_NAME)
        .collect();
    Cow::Owned(segments.join("."))
}

/// One logger's configuration with its formatter and output already built
struct Overrides {
    level: Option<Severity>,
    formatter: Option<Arc<dyn Formatter>>,
    output: Option<Arc<dyn Output>>,
}

impl Overrides {
    fn build(config: &LoggerConfig) -> Result<Self> {
        Ok(Self {
            level: config.level,
            formatter: config.format.map(FormatKind::build),
            output: config.output.as_ref().map(OutputKind::build).transpose()?,
        })
    }

    fn apply(self, logger: &Logger) {
        if let Some(level) = self.level {
            logger.set_level(level);
        }
        if let Some(formatter) = self.formatter {
            logger.set_formatter(formatter);
        }
        if let Some(output) = self.output {
            logger.set_output(output);
        }
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
