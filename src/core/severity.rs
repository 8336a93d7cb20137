//! Severity ranks
//!
//! Lower rank is louder. A message passes a logger's filter when its rank is
//! lower than or equal to the logger's effective threshold.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "crit")]
    Critical = 0,
    #[serde(alias = "err")]
    Error = 1,
    #[serde(alias = "warn")]
    Warning = 2,
    Notice = 3,
    Info = 4,
    Debug = 5,
    #[serde(alias = "trace")]
    Dump = 6,
}

impl Severity {
    /// Effective threshold of a chain where no logger sets a level.
    pub const BASELINE: Severity = Severity::Critical;

    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn all() -> [Severity; 7] {
        [
            Severity::Critical,
            Severity::Error,
            Severity::Warning,
            Severity::Notice,
            Severity::Info,
            Severity::Debug,
            Severity::Dump,
        ]
    }

    /// Whether a message of `self` passes a filter set at `threshold`
    #[inline]
    pub fn passes(self, threshold: Severity) -> bool {
        self <= threshold
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Dump => "DUMP",
        }
    }

    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Critical => BrightRed,
            Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Notice => Cyan,
            Severity::Info => Green,
            Severity::Debug => Blue,
            Severity::Dump => BrightBlack,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CRITICAL" | "CRIT" => Ok(Severity::Critical),
            "ERROR" | "ERR" => Ok(Severity::Error),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            "DUMP" | "TRACE" => Ok(Severity::Dump),
            _ => Err(LoggerError::unknown_severity(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        let ranks: Vec<u8> = Severity::all().iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(Severity::Critical < Severity::Dump);
    }

    #[test]
    fn test_passes() {
        assert!(Severity::Critical.passes(Severity::BASELINE));
        assert!(!Severity::Debug.passes(Severity::BASELINE));
        assert!(Severity::Debug.passes(Severity::Debug));
        assert!(Severity::Debug.passes(Severity::Dump));
        assert!(!Severity::Dump.passes(Severity::Debug));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("Crit".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("trace".parse::<Severity>().unwrap(), Severity::Dump);
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Severity::Notice).unwrap();
        assert_eq!(json, "\"notice\"");

        let parsed: Severity = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(parsed, Severity::Warning);
    }

    #[test]
    fn test_serde_accepts_every_parse_alias() {
        for alias in ["crit", "err", "warn", "trace"] {
            let parsed: Severity = serde_json::from_str(&format!("\"{}\"", alias)).unwrap();
            assert_eq!(parsed, alias.parse::<Severity>().unwrap(), "alias {}", alias);
        }
    }
}
