use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered classification of event importance.
///
/// Levels compare by urgency: `Verbose` is the least significant and
/// `Fatal` the most, so `Severity::Warning < Severity::Error` holds and
/// threshold filters can use plain comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Tracing-level noise, disabled in most environments.
    Verbose,
    /// Internal diagnostics useful during development.
    Debug,
    /// Normal operational messages.
    Information,
    /// Something unexpected that the service survived.
    Warning,
    /// A failure of the current operation.
    Error,
    /// A failure the process is unlikely to recover from.
    Fatal,
}

impl Severity {
    /// Canonical label for this level, e.g. `"Information"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Verbose => "Verbose",
            Severity::Debug => "Debug",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type returned when parsing a severity label.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized severity level: {0:?}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parse a canonical level name, case-insensitively.
    ///
    /// The common abbreviations `"info"` and `"warn"` are accepted as
    /// aliases for `Information` and `Warning`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(Severity::Verbose),
            "debug" => Ok(Severity::Debug),
            "information" | "info" => Ok(Severity::Information),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_urgency() {
        assert!(Severity::Verbose < Severity::Debug);
        assert!(Severity::Debug < Severity::Information);
        assert!(Severity::Information < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn display_uses_canonical_labels() {
        assert_eq!(Severity::Verbose.to_string(), "Verbose");
        assert_eq!(Severity::Information.to_string(), "Information");
        assert_eq!(Severity::Fatal.to_string(), "Fatal");
    }

    #[test]
    fn parses_canonical_names_case_insensitively() {
        assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("verbose".parse::<Severity>().unwrap(), Severity::Verbose);
    }

    #[test]
    fn parses_common_aliases() {
        assert_eq!("info".parse::<Severity>().unwrap(), Severity::Information);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "loud".parse::<Severity>().unwrap_err();
        assert_eq!(err, ParseSeverityError("loud".to_string()));
    }

    #[test]
    fn serializes_as_bare_variant_name() {
        let json = serde_json::to_string(&Severity::Information).unwrap();
        assert_eq!(json, "\"Information\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Information);
    }
}
