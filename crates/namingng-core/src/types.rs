//! Core types for naming violations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for violations and config diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Convention deviation; the normal outcome of a naming check.
    Style,
    /// Fatal-class finding (e.g. an unknown config key).
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Style => write!(f, "style"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
///
/// Line and column are 1-indexed; `0:0` denotes the file as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as reported by the symbol model.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 for whole-file findings).
    #[serde(default)]
    pub line: usize,
    /// Column number (1-indexed, 0 for whole-file findings).
    #[serde(default)]
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Creates a location that refers to a file as a whole (`0:0`).
    #[must_use]
    pub fn whole_file(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 0, 0)
    }
}

/// A naming violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Stable rule identifier (e.g., "namingng-namingConvention").
    pub rule_id: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Where the violation was found.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            location,
            message: message.into(),
        }
    }

    /// Formats the violation in the short standalone form,
    /// `[file:line] (severity) message`.
    #[must_use]
    pub fn format_standalone(&self) -> String {
        format!(
            "[{}:{}] ({}) {}",
            self.location.file.display(),
            self.location.line,
            self.severity,
            self.message
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}: {} [{}]",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.message,
            self.rule_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "namingng-namingConvention",
            severity,
            Location::new("src/test_.c", 7, 26),
            "Variable _invalid_arg violates naming convention",
        )
    }

    #[test]
    fn display_uses_template_form() {
        let v = make_violation(Severity::Style);
        assert_eq!(
            v.to_string(),
            "src/test_.c:7:26: style: Variable _invalid_arg violates naming convention \
             [namingng-namingConvention]"
        );
    }

    #[test]
    fn standalone_form_drops_column_and_id() {
        let v = make_violation(Severity::Style);
        assert_eq!(
            v.format_standalone(),
            "[src/test_.c:7] (style) Variable _invalid_arg violates naming convention"
        );
    }

    #[test]
    fn whole_file_location_is_zero() {
        let loc = Location::whole_file("a.h");
        assert_eq!((loc.line, loc.column), (0, 0));
    }

    #[test]
    fn severity_orders_style_below_error() {
        assert!(Severity::Style < Severity::Error);
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn violation_serializes_lowercase_severity() {
        let json = serde_json::to_string(&make_violation(Severity::Error)).unwrap();
        assert!(json.contains("\"severity\":\"error\""));
        assert!(json.contains("\"rule_id\":\"namingng-namingConvention\""));
    }
}
