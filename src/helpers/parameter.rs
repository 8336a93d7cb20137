//! Named values rendered as `key='value'`

use std::fmt;

pub const DEFAULT_DELIMITER: &str = ",";

/// A key/value pair appended to a log message
///
/// As a message tail it renders as `<delimiter> key='value'`; on its own
/// (`Display`) as `key='value'`. A pair with an empty key renders as the
/// empty string either way, so it can stand for "no parameter".
///
/// The delimiter only affects rendering: two pairs are equal when their keys
/// and values are.
#[derive(Debug, Clone)]
pub struct ParameterPair {
    key: String,
    value: String,
    delimiter: String,
}

impl ParameterPair {
    pub fn new(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// The "no parameter" sentinel
    pub fn empty() -> Self {
        Self::new(String::new(), "")
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Tail form using this pair's own delimiter: `, key='value'`
    pub fn render(&self) -> String {
        self.render_with(&self.delimiter)
    }

    /// Tail form using `delimiter`: `; key='value'` for `";"`
    pub fn render_with(&self, delimiter: &str) -> String {
        let mut rendered = String::new();
        self.write_tail(&mut rendered, delimiter);
        rendered
    }

    /// Append the tail form to `buf`
    pub(crate) fn write_tail(&self, buf: &mut String, delimiter: &str) {
        if self.is_empty() {
            return;
        }
        buf.push_str(delimiter);
        buf.push(' ');
        buf.push_str(&self.key);
        buf.push_str("='");
        buf.push_str(&self.value);
        buf.push('\'');
    }
}

impl Default for ParameterPair {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for ParameterPair {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl Eq for ParameterPair {}

impl fmt::Display for ParameterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}='{}'", self.key, self.value)
    }
}

impl<K: Into<String>, V: fmt::Display> From<(K, V)> for ParameterPair {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
