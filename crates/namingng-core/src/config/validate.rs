//! Raw document → [`ValidatedConfig`] conversion with exhaustive diagnostics.
//!
//! Validation never stops at the first failure: every key is checked and
//! every defect is reported, so one bad key cannot hide problems in its
//! siblings. A key with any defect is treated as unset.

use super::error::{shape_name, ConfigError};
use super::include_guard::{
    GuardCase, GuardInput, IncludeGuardPolicy, DEFAULT_HEADER_FILE_PATTERN,
};
use super::rule_spec::resolve_rule_spec;
use super::{RuleKey, ValidatedConfig, Validation};
use crate::model::canonical_type;
use crate::pattern::NamePattern;
use crate::prefix::PrefixTable;
use serde_json::{Map, Value};
use tracing::debug;

/// Top-level keys understood by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigKey {
    Rule(RuleKey),
    VarPrefixes,
    FunctionPrefixes,
    IncludeGuard,
    SkipOneCharVariables,
    /// `_`-prefixed keys carry comments and are ignored.
    Comment,
}

impl ConfigKey {
    fn classify(key: &str) -> Option<Self> {
        if let Some(rule) = RuleKey::from_key(key) {
            return Some(Self::Rule(rule));
        }
        match key {
            "var_prefixes" => Some(Self::VarPrefixes),
            "function_prefixes" => Some(Self::FunctionPrefixes),
            "include_guard" => Some(Self::IncludeGuard),
            "skip_one_char_variables" => Some(Self::SkipOneCharVariables),
            _ if key.starts_with('_') => Some(Self::Comment),
            _ => None,
        }
    }
}

/// Validates a whole config document.
///
/// Diagnostics are returned in document order.
#[must_use]
pub fn validate(document: &Map<String, Value>) -> Validation {
    let mut config = ValidatedConfig::default();
    let mut errors = Vec::new();

    for (key, value) in document {
        let Some(kind) = ConfigKey::classify(key) else {
            errors.push(ConfigError::UnknownKey { key: key.clone() });
            continue;
        };
        if kind == ConfigKey::Comment || value.is_null() {
            debug!("Skipping config key {key}");
            continue;
        }

        match kind {
            ConfigKey::Rule(rule) => {
                if let Some(spec) = resolve_rule_spec(key, value, &mut errors) {
                    debug!("{key}: {} pattern(s)", spec.entries().len());
                    config.rules.insert(rule, spec);
                }
            }
            ConfigKey::VarPrefixes => {
                if let Some(table) = resolve_prefix_table(key, value, &mut errors) {
                    config.var_prefixes = table;
                }
            }
            ConfigKey::FunctionPrefixes => {
                if let Some(table) = resolve_prefix_table(key, value, &mut errors) {
                    config.function_prefixes = table;
                }
            }
            ConfigKey::IncludeGuard => {
                config.include_guard = resolve_include_guard(key, value, &mut errors);
            }
            ConfigKey::SkipOneCharVariables => {
                if let Some(skip) = expect_bool(key, value, &mut errors) {
                    config.skip_one_char_variables = skip;
                }
            }
            ConfigKey::Comment => {}
        }
    }

    debug!("Config validated with {} diagnostic(s)", errors.len());
    Validation { config, errors }
}

/// A prefix table must be a dict of str; any bad entry drops the whole key.
fn resolve_prefix_table(
    key: &str,
    value: &Value,
    errors: &mut Vec<ConfigError>,
) -> Option<PrefixTable> {
    let Value::Object(map) = value else {
        errors.push(ConfigError::WrongShape {
            key: key.to_string(),
            expected: "dict",
            actual: shape_name(value),
        });
        return None;
    };

    let before = errors.len();
    let mut table = PrefixTable::new();
    for (type_spelling, prefix) in map {
        match prefix {
            Value::String(prefix) => table.insert(canonical_type(type_spelling), prefix.clone()),
            other => errors.push(ConfigError::ItemShape {
                key: key.to_string(),
                item: type_spelling.clone(),
                expected: "str",
                actual: shape_name(other),
            }),
        }
    }
    (errors.len() == before).then_some(table)
}

/// Any defect in a sub-key disables the whole include-guard check.
fn resolve_include_guard(
    key: &str,
    value: &Value,
    errors: &mut Vec<ConfigError>,
) -> Option<IncludeGuardPolicy> {
    let Value::Object(map) = value else {
        errors.push(ConfigError::WrongShape {
            key: key.to_string(),
            expected: "dict",
            actual: shape_name(value),
        });
        return None;
    };

    let before = errors.len();
    let mut required = true;
    let mut input = GuardInput::default();
    let mut case = GuardCase::default();
    let mut prefix = String::new();
    let mut suffix = String::new();
    let mut max_linenr = None;
    let mut header_pattern = None;

    for (field, v) in map {
        let field_key = format!("{key}.{field}");
        if v.is_null() {
            continue;
        }
        match field.as_str() {
            "required" => {
                if let Some(b) = expect_bool(&field_key, v, errors) {
                    required = b;
                }
            }
            "input" => {
                if let Some(s) = expect_str(&field_key, v, errors) {
                    match GuardInput::parse(s) {
                        Some(parsed) => input = parsed,
                        None => errors.push(ConfigError::InvalidChoice {
                            key: field_key,
                            value: s.to_string(),
                            choices: GuardInput::CHOICES,
                        }),
                    }
                }
            }
            "case" => {
                if let Some(s) = expect_str(&field_key, v, errors) {
                    match GuardCase::parse(s) {
                        Some(parsed) => case = parsed,
                        None => errors.push(ConfigError::InvalidChoice {
                            key: field_key,
                            value: s.to_string(),
                            choices: GuardCase::CHOICES,
                        }),
                    }
                }
            }
            "prefix" => {
                if let Some(s) = expect_str(&field_key, v, errors) {
                    prefix = s.to_string();
                }
            }
            "suffix" => {
                if let Some(s) = expect_str(&field_key, v, errors) {
                    suffix = s.to_string();
                }
            }
            "max_linenr" => max_linenr = expect_line_count(&field_key, v, errors),
            "RE_HEADERFILE" => {
                if let Some(s) = expect_str(&field_key, v, errors) {
                    match NamePattern::new(s) {
                        Ok(p) => header_pattern = Some(p),
                        Err(e) => errors.push(ConfigError::InvalidRegex {
                            key: field_key,
                            item: s.to_string(),
                            reason: e.reason,
                        }),
                    }
                }
            }
            _ if field.starts_with('_') => {}
            _ => errors.push(ConfigError::UnknownKey { key: field_key }),
        }
    }

    if errors.len() != before {
        return None;
    }

    let header_file_pattern = match header_pattern {
        Some(p) => p,
        None => match NamePattern::new(DEFAULT_HEADER_FILE_PATTERN) {
            Ok(p) => p,
            Err(e) => {
                errors.push(ConfigError::InvalidRegex {
                    key: format!("{key}.RE_HEADERFILE"),
                    item: DEFAULT_HEADER_FILE_PATTERN.to_string(),
                    reason: e.reason,
                });
                return None;
            }
        },
    };

    let mut policy = IncludeGuardPolicy::new(header_file_pattern);
    policy.required = required;
    policy.input = input;
    policy.case = case;
    policy.prefix = prefix;
    policy.suffix = suffix;
    if let Some(n) = max_linenr {
        policy.max_linenr = n;
    }
    Some(policy)
}

fn expect_bool(key: &str, value: &Value, errors: &mut Vec<ConfigError>) -> Option<bool> {
    if let Value::Bool(b) = value {
        return Some(*b);
    }
    errors.push(ConfigError::WrongShape {
        key: key.to_string(),
        expected: "bool",
        actual: shape_name(value),
    });
    None
}

fn expect_str<'v>(key: &str, value: &'v Value, errors: &mut Vec<ConfigError>) -> Option<&'v str> {
    if let Value::String(s) = value {
        return Some(s);
    }
    errors.push(ConfigError::WrongShape {
        key: key.to_string(),
        expected: "str",
        actual: shape_name(value),
    });
    None
}

fn expect_line_count(key: &str, value: &Value, errors: &mut Vec<ConfigError>) -> Option<usize> {
    if let Some(n) = value.as_u64() {
        return Some(usize::try_from(n).unwrap_or(usize::MAX));
    }
    let actual = if value.as_i64().is_some() {
        "negative int"
    } else {
        shape_name(value)
    };
    errors.push(ConfigError::WrongShape {
        key: key.to_string(),
        expected: "int >= 0",
        actual,
    });
    None
}
