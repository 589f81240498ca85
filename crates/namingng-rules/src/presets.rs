//! Rule presets.

use crate::{IncludeGuard, NamingConvention};
use namingng_core::RuleBox;

/// Preset rule sets for namingng.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in rule.
    All,
    /// Symbol and file names only; include guards are not checked.
    NamingOnly,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::All => all_rules(),
            Self::NamingOnly => naming_rules(),
        }
    }
}

/// Returns all available rules.
///
/// Includes:
/// - `naming-convention` (namingng-namingConvention)
/// - `include-guard` (namingng-includeGuardMissing, namingng-includeGuardName,
///   namingng-includeGuardInvalid)
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NamingConvention::new()),
        Box::new(IncludeGuard::new()),
    ]
}

/// Returns the naming rules without the include guard check.
#[must_use]
pub fn naming_rules() -> Vec<RuleBox> {
    vec![Box::new(NamingConvention::new())]
}
