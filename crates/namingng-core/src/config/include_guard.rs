//! Include guard policy and expected-token derivation.

use crate::pattern::{NamePattern, PatternError};
use std::path::Path;

/// Header files checked when `RE_HEADERFILE` is not configured.
pub const DEFAULT_HEADER_FILE_PATTERN: &str = r".*\.h\Z";

/// Number of leading lines scanned when `max_linenr` is not configured.
pub const DEFAULT_MAX_LINENR: usize = 5;

/// Which part of the file path the guard token is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardInput {
    /// The file name only.
    Basename,
    /// The path as reported by the symbol model.
    #[default]
    Path,
}

impl GuardInput {
    /// Accepted config spellings.
    pub const CHOICES: &'static str = "basename, path";

    /// Parses the config spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "basename" => Some(Self::Basename),
            "path" => Some(Self::Path),
            _ => None,
        }
    }
}

/// Case transform applied before building the guard token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardCase {
    /// Upper-case the input.
    #[default]
    Upper,
    /// Lower-case the input.
    Lower,
    /// Keep the input as is.
    Unchanged,
}

impl GuardCase {
    /// Accepted config spellings.
    pub const CHOICES: &'static str = "upper, lower, keep";

    /// Parses the config spelling. `unchanged` is accepted for `keep`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upper" => Some(Self::Upper),
            "lower" => Some(Self::Lower),
            "keep" | "unchanged" => Some(Self::Unchanged),
            _ => None,
        }
    }

    fn apply(self, input: &str) -> String {
        match self {
            Self::Upper => input.to_uppercase(),
            Self::Lower => input.to_lowercase(),
            Self::Unchanged => input.to_string(),
        }
    }
}

/// How include guards are detected and named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeGuardPolicy {
    /// Report headers without a guard.
    pub required: bool,
    /// Source of the token derivation.
    pub input: GuardInput,
    /// Prepended to the derived token.
    pub prefix: String,
    /// Appended to the derived token.
    pub suffix: String,
    /// Case transform.
    pub case: GuardCase,
    /// Number of leading lines in which the guard must appear.
    pub max_linenr: usize,
    /// Basenames of the files the check applies to.
    pub header_file_pattern: NamePattern,
}

impl IncludeGuardPolicy {
    /// Creates a policy with default settings for the given header pattern.
    #[must_use]
    pub fn new(header_file_pattern: NamePattern) -> Self {
        Self {
            required: true,
            input: GuardInput::default(),
            prefix: String::new(),
            suffix: String::new(),
            case: GuardCase::default(),
            max_linenr: DEFAULT_MAX_LINENR,
            header_file_pattern,
        }
    }

    /// Creates a policy with default settings and the default header pattern.
    ///
    /// # Errors
    ///
    /// Returns error if the default header pattern does not compile.
    pub fn with_defaults() -> Result<Self, PatternError> {
        NamePattern::new(DEFAULT_HEADER_FILE_PATTERN).map(Self::new)
    }

    /// Returns true if the file with this basename is a header to check.
    #[must_use]
    pub fn applies_to(&self, basename: &str) -> bool {
        self.header_file_pattern.matches(basename)
    }

    /// Derives the guard token expected for the file at `path`.
    #[must_use]
    pub fn expected_guard(&self, path: &Path) -> String {
        let input = match self.input {
            GuardInput::Basename => path
                .file_name()
                .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy()),
            GuardInput::Path => path.to_string_lossy(),
        };
        derive_token(&input, &self.prefix, &self.suffix, self.case)
    }
}

/// Builds a guard token: case transform, every run of non-alphanumeric
/// characters collapsed to `_`, outer `_` trimmed, then `prefix` and `suffix`
/// attached.
#[must_use]
pub fn derive_token(input: &str, prefix: &str, suffix: &str, case: GuardCase) -> String {
    let cased = case.apply(input);
    let mut body = String::with_capacity(cased.len());
    let mut in_barrier = false;
    for c in cased.chars() {
        if c.is_ascii_alphanumeric() {
            body.push(c);
            in_barrier = false;
        } else if !in_barrier {
            body.push('_');
            in_barrier = true;
        }
    }
    format!("{prefix}{}{suffix}", body.trim_matches('_'))
}
