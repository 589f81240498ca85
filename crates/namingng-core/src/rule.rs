//! Rule trait for defining naming checks.

use crate::context::CheckContext;
use crate::types::{Severity, Violation};

/// A check run once per translation unit.
///
/// Rules read the symbol model and the validated config from the context and
/// return violations in discovery order.
///
/// # Example
///
/// ```ignore
/// use namingng_core::{CheckContext, Rule, Violation};
///
/// pub struct NoEmptyNamespaces;
///
/// impl Rule for NoEmptyNamespaces {
///     fn name(&self) -> &'static str { "no-empty-namespaces" }
///     fn rule_ids(&self) -> &'static [&'static str] { &["demo-emptyNamespace"] }
///
///     fn check(&self, ctx: &CheckContext) -> Vec<Violation> {
///         ctx.model.namespaces().iter().filter_map(|ns| ...).collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "naming-convention").
    fn name(&self) -> &'static str;

    /// Returns the ids this rule reports violations under.
    fn rule_ids(&self) -> &'static [&'static str];

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the severity of violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Style
    }

    /// Checks one translation unit and returns any violations found.
    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
