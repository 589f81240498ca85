//! Config validation diagnostics.

use crate::types::Severity;
use miette::Diagnostic;
use serde_json::Value;

/// One problem found while validating a config document.
///
/// The key named by the error is treated as unset; sibling keys are still
/// validated and used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// A recognised key holds a value of the wrong shape.
    #[error("{key} must be {expected} (not {actual}), or not set")]
    #[diagnostic(code(namingng::config::wrong_shape), severity(Warning))]
    WrongShape {
        /// Offending key.
        key: String,
        /// Accepted shapes, e.g. `"str, list or dict"`.
        expected: &'static str,
        /// Shape found in the document.
        actual: &'static str,
    },

    /// A pattern does not compile.
    #[error("item '{item}' of '{key}' is not a valid regular expression: {reason}")]
    #[diagnostic(code(namingng::config::invalid_regex), severity(Warning))]
    InvalidRegex {
        /// Offending key.
        key: String,
        /// The pattern as written.
        item: String,
        /// Reason reported by the regex engine.
        reason: String,
    },

    /// A pattern in a dict-shaped rule maps to something other than
    /// `bool` or `[bool, string]`.
    #[error("item '{item}' of '{key}' must be an array [bool,string]")]
    #[diagnostic(code(namingng::config::invalid_outcome), severity(Warning))]
    InvalidOutcome {
        /// Offending key.
        key: String,
        /// The pattern whose value is malformed.
        item: String,
    },

    /// An item inside a list or dict has the wrong shape.
    #[error("item '{item}' of '{key}' must be {expected} (not {actual})")]
    #[diagnostic(code(namingng::config::item_shape), severity(Warning))]
    ItemShape {
        /// Offending key.
        key: String,
        /// The item (dict key, or the JSON text of a list item).
        item: String,
        /// Accepted shape.
        expected: &'static str,
        /// Shape found in the document.
        actual: &'static str,
    },

    /// A string option holds a value outside its fixed set of choices.
    #[error("{key} must be one of {choices} (not '{value}')")]
    #[diagnostic(code(namingng::config::invalid_choice), severity(Warning))]
    InvalidChoice {
        /// Offending key.
        key: String,
        /// The value found.
        value: String,
        /// Accepted values.
        choices: &'static str,
    },

    /// The key is not part of the recognised key set.
    #[error("unknown config key '{key}'")]
    #[diagnostic(code(namingng::config::unknown_key), severity(Error))]
    UnknownKey {
        /// The unrecognised key.
        key: String,
    },
}

impl ConfigError {
    /// Returns the key this diagnostic is about.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::WrongShape { key, .. }
            | Self::InvalidRegex { key, .. }
            | Self::InvalidOutcome { key, .. }
            | Self::ItemShape { key, .. }
            | Self::InvalidChoice { key, .. }
            | Self::UnknownKey { key } => key,
        }
    }

    /// Unknown keys are error-class; everything else is a style warning.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnknownKey { .. } => Severity::Error,
            _ => Severity::Style,
        }
    }

    /// The full diagnostic text.
    #[must_use]
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

/// Names a JSON value's shape the way config diagnostics spell it.
#[must_use]
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrong_shape_message() {
        let e = ConfigError::WrongShape {
            key: "RE_NAMESPACE".into(),
            expected: "str, list or dict",
            actual: "bool",
        };
        assert_eq!(
            e.to_string(),
            "RE_NAMESPACE must be str, list or dict (not bool), or not set"
        );
        assert_eq!(e.severity(), Severity::Style);
        assert_eq!(e.key(), "RE_NAMESPACE");
    }

    #[test]
    fn unknown_key_is_error_class() {
        let e = ConfigError::UnknownKey {
            key: "RE_VAR_NAME".into(),
        };
        assert_eq!(e.detail(), "unknown config key 'RE_VAR_NAME'");
        assert_eq!(e.severity(), Severity::Error);
    }

    #[test]
    fn outcome_message() {
        let e = ConfigError::InvalidOutcome {
            key: "RE_PUBLIC_MEMBER_VARIABLE".into(),
            item: r"public_.*\Z".into(),
        };
        assert_eq!(
            e.to_string(),
            r"item 'public_.*\Z' of 'RE_PUBLIC_MEMBER_VARIABLE' must be an array [bool,string]"
        );
    }

    #[test]
    fn shape_names() {
        assert_eq!(shape_name(&json!(null)), "null");
        assert_eq!(shape_name(&json!(5)), "int");
        assert_eq!(shape_name(&json!(-5)), "int");
        assert_eq!(shape_name(&json!(0.5)), "float");
        assert_eq!(shape_name(&json!("x")), "str");
        assert_eq!(shape_name(&json!([])), "list");
        assert_eq!(shape_name(&json!({})), "dict");
    }
}
