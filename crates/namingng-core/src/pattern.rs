//! Compiled naming patterns and rule specs.
//!
//! Naming configs are written in the `re` dialect used by existing naming
//! tools: a match must start at the beginning of the name but may stop
//! anywhere, and `\Z` anchors to the end of the name. [`NamePattern`]
//! translates that dialect once, at construction, into a [`regex::Regex`].
//!
//! Look-around (`(?=..)`, `(?!..)`, `(?<=..)`, `(?<!..)`) and backreferences
//! are not supported and are reported as invalid regular expressions. To
//! forbid a shape, use the dict form of a rule with a `true` outcome:
//!
//! ```json
//! "RE_VARNAME": {"tmp_.*": [true, "no tmp_ prefix"], "[a-z_]+\\Z": [false, "lower case only"]}
//! ```

use regex::Regex;
use std::fmt;

/// Error produced when a naming pattern does not compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct PatternError {
    /// One-line reason reported by the regex engine.
    pub reason: String,
}

/// A validated naming regex.
///
/// The regex is compiled once at construction and reused for all match calls.
#[derive(Debug, Clone)]
pub struct NamePattern {
    raw: String,
    compiled: Regex,
}

impl NamePattern {
    /// Compiles a naming pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let compiled = Regex::new(&translate(pattern)).map_err(|e| PatternError {
            reason: engine_message(&e),
        })?;
        Ok(Self {
            raw: pattern.to_string(),
            compiled,
        })
    }

    /// Tests whether the pattern matches at the start of `name`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.compiled.is_match(name)
    }

    /// Returns the pattern as written in the config.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for NamePattern {}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Rewrites a config pattern into `regex` syntax: anchors it at the start
/// and maps the `\Z` end-of-text escape to `\z`.
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 6);
    out.push_str("^(?:");
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('Z') => out.push_str(r"\z"),
            Some(escaped) => {
                out.push('\\');
                out.push(escaped);
            }
            None => out.push('\\'),
        }
    }
    out.push(')');
    out
}

/// Reduces a `regex` error to its one-line reason.
fn engine_message(err: &regex::Error) -> String {
    match err {
        regex::Error::Syntax(text) => text
            .lines()
            .rev()
            .find_map(|line| line.trim_start().strip_prefix("error: "))
            .unwrap_or(text.as_str())
            .trim()
            .to_string(),
        regex::Error::CompiledTooBig(limit) => {
            format!("compiled pattern exceeds the size limit of {limit} bytes")
        }
        other => other.to_string().replace('\n', " "),
    }
}

/// One entry of a [`RuleSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    /// The compiled pattern.
    pub pattern: NamePattern,
    /// Whether a conforming name is expected to match.
    pub expected_match: bool,
    /// Custom message appended to the generic violation text.
    pub message: Option<String>,
}

impl PatternEntry {
    /// Entry that requires names to match `pattern`.
    #[must_use]
    pub fn required(pattern: NamePattern) -> Self {
        Self {
            pattern,
            expected_match: true,
            message: None,
        }
    }

    /// Entry with an explicit outcome and optional message.
    #[must_use]
    pub fn with_outcome(pattern: NamePattern, expected_match: bool, message: Option<String>) -> Self {
        Self {
            pattern,
            expected_match,
            message,
        }
    }

    /// Returns true if `name` violates this entry.
    #[must_use]
    pub fn fires(&self, name: &str) -> bool {
        self.pattern.matches(name) != self.expected_match
    }
}

/// The canonical form of a naming rule for one symbol category.
///
/// Every entry holds a compiled pattern; raw config shapes never reach this
/// type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSpec {
    entries: Vec<PatternEntry>,
}

impl RuleSpec {
    /// Creates a rule spec from resolved entries.
    #[must_use]
    pub fn new(entries: Vec<PatternEntry>) -> Self {
        Self { entries }
    }

    /// Builds a rule spec where every pattern must match.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = patterns
            .into_iter()
            .map(|p| NamePattern::new(p.as_ref()).map(PatternEntry::required))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Returns the entries in evaluation order.
    #[must_use]
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Returns true if the spec holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every entry that `name` violates, in order.
    ///
    /// Overlapping entries are not de-duplicated.
    pub fn violations<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a PatternEntry> + 'a {
        self.entries.iter().filter(move |e| e.fires(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARNAME: &str = r"[a-z][a-z0-9_]*[a-z0-9]\Z";

    #[test]
    fn matches_at_start_only() {
        let p = NamePattern::new("[a-z]+").unwrap();
        assert!(p.matches("abc_DEF"));
        assert!(!p.matches("_abc"));
    }

    #[test]
    fn end_of_text_escape_is_translated() {
        let p = NamePattern::new(VARNAME).unwrap();
        assert!(p.matches("valid_arg32"));
        assert!(!p.matches("_invalid_arg"));
        assert!(!p.matches("invalid_arg_"));
    }

    #[test]
    fn escaped_backslash_before_z_is_literal() {
        // `\\Z` is a literal backslash followed by `Z`.
        let p = NamePattern::new(r"a\\Z").unwrap();
        assert!(p.matches(r"a\Z"));
        assert!(!p.matches("a"));
    }

    #[test]
    fn invalid_pattern_reports_one_line_reason() {
        for bad in ["+bad pattern", "(parentheses?"] {
            let err = NamePattern::new(bad).unwrap_err();
            assert!(!err.reason.is_empty());
            assert!(!err.reason.contains('\n'), "{bad}: {}", err.reason);
        }
    }

    #[test]
    fn look_around_and_backreferences_are_rejected() {
        for unsupported in ["(?!tmp_)[a-z]+", r"(?<=x)y", r"(a)\1"] {
            assert!(NamePattern::new(unsupported).is_err(), "{unsupported}");
        }
        let forbidden = PatternEntry::with_outcome(NamePattern::new("tmp_").unwrap(), false, None);
        assert!(forbidden.fires("tmp_value"));
        assert!(!forbidden.fires("value"));
    }

    #[test]
    fn required_entry_fires_on_mismatch() {
        let spec = RuleSpec::from_patterns([VARNAME]).unwrap();
        assert_eq!(spec.violations("_invalid_arg").count(), 1);
        assert_eq!(spec.violations("valid_arg32").count(), 0);
    }

    #[test]
    fn forbidden_entry_fires_on_match() {
        let entry = PatternEntry::with_outcome(
            NamePattern::new(r".*_tmp\Z").unwrap(),
            false,
            Some("illegal suffix _tmp".into()),
        );
        assert!(entry.fires("priv_bad_tmp"));
        assert!(!entry.fires("priv_good"));
    }

    #[test]
    fn overlapping_entries_each_fire() {
        let spec = RuleSpec::from_patterns(["[a-z]", "[a-z]+\\Z"]).unwrap();
        assert_eq!(spec.violations("_X").count(), 2);
    }
}
