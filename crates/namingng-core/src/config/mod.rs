//! Configuration loading and validation.
//!
//! ```text
//! JSON / TOML text
//!   ↓ serde (RawConfig: loosely typed document)
//! serde_json::Map
//!   ↓ validate()
//! ValidatedConfig + Vec<ConfigError>
//! ```

mod error;
mod include_guard;
mod rule_spec;
mod validate;

pub use error::{shape_name, ConfigError};
pub use include_guard::{
    derive_token, GuardCase, GuardInput, IncludeGuardPolicy, DEFAULT_HEADER_FILE_PATTERN,
    DEFAULT_MAX_LINENR,
};
pub use validate::validate;

use crate::error::LoadError;
use crate::pattern::RuleSpec;
use crate::prefix::PrefixTable;
use crate::types::Severity;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// Naming rule keys, one per symbol category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKey {
    /// `RE_FILE`: file basenames.
    File,
    /// `RE_CLASS_NAME`: class names.
    ClassName,
    /// `RE_NAMESPACE`: namespace names.
    Namespace,
    /// `RE_VARNAME`: local variables, and the fallback for other scopes.
    VarName,
    /// `RE_PUBLIC_MEMBER_VARIABLE`: public member variables.
    PublicMemberVariable,
    /// `RE_PRIVATE_MEMBER_VARIABLE`: private member variables.
    PrivateMemberVariable,
    /// `RE_GLOBAL_VARNAME`: global variables.
    GlobalVarName,
    /// `RE_FUNCTIONNAME`: functions and constructors.
    FunctionName,
}

impl RuleKey {
    /// All rule keys.
    pub const ALL: [Self; 8] = [
        Self::File,
        Self::ClassName,
        Self::Namespace,
        Self::VarName,
        Self::PublicMemberVariable,
        Self::PrivateMemberVariable,
        Self::GlobalVarName,
        Self::FunctionName,
    ];

    /// The key as spelled in config documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "RE_FILE",
            Self::ClassName => "RE_CLASS_NAME",
            Self::Namespace => "RE_NAMESPACE",
            Self::VarName => "RE_VARNAME",
            Self::PublicMemberVariable => "RE_PUBLIC_MEMBER_VARIABLE",
            Self::PrivateMemberVariable => "RE_PRIVATE_MEMBER_VARIABLE",
            Self::GlobalVarName => "RE_GLOBAL_VARNAME",
            Self::FunctionName => "RE_FUNCTIONNAME",
        }
    }

    /// Looks up a rule key by its config spelling.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for RuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration that passed validation.
///
/// Immutable once built; share it by reference across analyses.
#[derive(Debug, Clone, Default)]
pub struct ValidatedConfig {
    rules: HashMap<RuleKey, RuleSpec>,
    var_prefixes: PrefixTable,
    function_prefixes: PrefixTable,
    include_guard: Option<IncludeGuardPolicy>,
    skip_one_char_variables: bool,
}

impl ValidatedConfig {
    /// Creates an empty configuration (checks nothing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spec for a rule key.
    #[must_use]
    pub fn with_rule(mut self, key: RuleKey, spec: RuleSpec) -> Self {
        self.rules.insert(key, spec);
        self
    }

    /// Sets the variable prefix table.
    #[must_use]
    pub fn with_var_prefixes(mut self, table: PrefixTable) -> Self {
        self.var_prefixes = table;
        self
    }

    /// Sets the function prefix table.
    #[must_use]
    pub fn with_function_prefixes(mut self, table: PrefixTable) -> Self {
        self.function_prefixes = table;
        self
    }

    /// Sets the include guard policy.
    #[must_use]
    pub fn with_include_guard(mut self, policy: IncludeGuardPolicy) -> Self {
        self.include_guard = Some(policy);
        self
    }

    /// Sets whether single-character variable names skip regex checks.
    #[must_use]
    pub fn with_skip_one_char_variables(mut self, skip: bool) -> Self {
        self.skip_one_char_variables = skip;
        self
    }

    /// Returns the spec for a rule key, if set.
    #[must_use]
    pub fn rule(&self, key: RuleKey) -> Option<&RuleSpec> {
        self.rules.get(&key)
    }

    /// Variable type → prefix table (empty when unset).
    #[must_use]
    pub fn var_prefixes(&self) -> &PrefixTable {
        &self.var_prefixes
    }

    /// Function return type → prefix table (empty when unset).
    #[must_use]
    pub fn function_prefixes(&self) -> &PrefixTable {
        &self.function_prefixes
    }

    /// Include guard policy, if the check is enabled.
    #[must_use]
    pub fn include_guard(&self) -> Option<&IncludeGuardPolicy> {
        self.include_guard.as_ref()
    }

    /// Whether single-character variable names skip regex checks.
    #[must_use]
    pub fn skip_one_char_variables(&self) -> bool {
        self.skip_one_char_variables
    }
}

/// Outcome of validating a config document.
#[derive(Debug)]
pub struct Validation {
    /// Everything that validated; malformed keys are absent.
    pub config: ValidatedConfig,
    /// One diagnostic per defect, in document order.
    pub errors: Vec<ConfigError>,
}

impl Validation {
    /// Checks if any diagnostic meets or exceeds the given severity.
    #[must_use]
    pub fn has_errors_at(&self, severity: Severity) -> bool {
        self.errors.iter().any(|e| e.severity() >= severity)
    }

    /// Splits into the config and its diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (ValidatedConfig, Vec<ConfigError>) {
        (self.config, self.errors)
    }
}

/// A loosely typed config document, as read from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    document: Map<String, Value>,
}

impl RawConfig {
    /// Loads a config document. Files ending in `.toml` are read as TOML,
    /// everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its top
    /// level is not a mapping.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::parse_toml(&content)
        } else {
            Self::parse_json(&content)
        }
    }

    /// Parses a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or not an object.
    pub fn parse_json(content: &str) -> Result<Self, LoadError> {
        Self::from_value(serde_json::from_str(content)?)
    }

    /// Parses a TOML config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, LoadError> {
        Self::from_value(toml::from_str::<Value>(content)?)
    }

    /// Wraps an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a mapping.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => Err(LoadError::NotADict {
                actual: shape_name(&other),
            }),
        }
    }

    /// Returns the raw document.
    #[must_use]
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Validates the document.
    #[must_use]
    pub fn validate(&self) -> Validation {
        validate(&self.document)
    }
}
