//! Resolution of raw rule values into [`RuleSpec`]s.

use super::error::{shape_name, ConfigError};
use crate::pattern::{NamePattern, PatternEntry, RuleSpec};
use serde_json::{Map, Value};

/// Shapes accepted for a naming rule, as named in diagnostics.
pub(crate) const RULE_SHAPES: &str = "str, list or dict";

/// The raw shapes a naming rule may take in a config document.
#[derive(Debug, Clone, Copy)]
enum RuleShape<'a> {
    /// One pattern that names must match.
    Single(&'a str),
    /// Several patterns that names must match.
    List(&'a [Value]),
    /// Pattern → `report_on_match` or `[report_on_match, message]`.
    Outcomes(&'a Map<String, Value>),
}

impl<'a> RuleShape<'a> {
    fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Single(s)),
            Value::Array(items) => Some(Self::List(items)),
            Value::Object(map) => Some(Self::Outcomes(map)),
            _ => None,
        }
    }
}

/// Resolves the value of rule key `key`.
///
/// Every entry is checked so that all defects are reported, but a key with
/// any defect resolves to `None` and is treated as unset.
pub(crate) fn resolve_rule_spec(
    key: &str,
    value: &Value,
    errors: &mut Vec<ConfigError>,
) -> Option<RuleSpec> {
    let Some(shape) = RuleShape::classify(value) else {
        errors.push(ConfigError::WrongShape {
            key: key.to_string(),
            expected: RULE_SHAPES,
            actual: shape_name(value),
        });
        return None;
    };

    let before = errors.len();
    let entries: Vec<PatternEntry> = match shape {
        RuleShape::Single(pattern) => compile(key, pattern, errors)
            .map(PatternEntry::required)
            .into_iter()
            .collect(),
        RuleShape::List(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(pattern) => compile(key, pattern, errors).map(PatternEntry::required),
                other => {
                    errors.push(ConfigError::ItemShape {
                        key: key.to_string(),
                        item: other.to_string(),
                        expected: "str",
                        actual: shape_name(other),
                    });
                    None
                }
            })
            .collect(),
        RuleShape::Outcomes(map) => map
            .iter()
            .filter_map(|(pattern, outcome)| {
                let Some((report_on_match, message)) = parse_outcome(outcome) else {
                    errors.push(ConfigError::InvalidOutcome {
                        key: key.to_string(),
                        item: pattern.clone(),
                    });
                    return None;
                };
                compile(key, pattern, errors)
                    .map(|p| PatternEntry::with_outcome(p, !report_on_match, message))
            })
            .collect(),
    };

    (errors.len() == before).then(|| RuleSpec::new(entries))
}

/// Reads `true`, `false`, or `[bool, "message"]`. The flag says whether a
/// matching name is reported, so `[false, ..]` reports names that do not match.
fn parse_outcome(value: &Value) -> Option<(bool, Option<String>)> {
    match value {
        Value::Bool(expected) => Some((*expected, None)),
        Value::Array(items) => match items.as_slice() {
            [Value::Bool(expected), Value::String(message)] => {
                Some((*expected, Some(message.clone())))
            }
            _ => None,
        },
        _ => None,
    }
}

fn compile(key: &str, pattern: &str, errors: &mut Vec<ConfigError>) -> Option<NamePattern> {
    NamePattern::new(pattern)
        .map_err(|e| {
            errors.push(ConfigError::InvalidRegex {
                key: key.to_string(),
                item: pattern.to_string(),
                reason: e.reason,
            });
        })
        .ok()
}
