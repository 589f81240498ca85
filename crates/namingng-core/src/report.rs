//! Violation accumulation for one analysis pass.

use crate::types::{Severity, Violation};
use serde::Serialize;

/// Accumulates violations in discovery order.
///
/// One reporter belongs to one translation unit; the host drains it once the
/// pass is complete and is responsible for sorting and exit-code derivation.
#[derive(Debug, Default, Serialize)]
pub struct Reporter {
    violations: Vec<Violation>,
}

impl Reporter {
    /// Creates a new empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one violation.
    pub fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Records several violations, keeping their order.
    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    /// Returns the violations recorded so far.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Number of recorded violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Takes every recorded violation out of the reporter.
    pub fn drain(&mut self) -> Vec<Violation> {
        std::mem::take(&mut self.violations)
    }

    /// Consumes the reporter and returns its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Counts violations as `(errors, styles)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        (errors, self.violations.len() - errors)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    fn make_violation(message: &str, severity: Severity) -> Violation {
        Violation::new(
            "namingng-namingConvention",
            severity,
            Location::new("test.c", 1, 1),
            message,
        )
    }

    #[test]
    fn keeps_discovery_order() {
        let mut reporter = Reporter::new();
        reporter.report(make_violation("b", Severity::Style));
        reporter.report(make_violation("a", Severity::Style));
        let messages: Vec<&str> = reporter
            .violations()
            .iter()
            .map(|v| v.message.as_str())
            .collect();
        assert_eq!(messages, vec!["b", "a"]);
    }

    #[test]
    fn drain_empties_reporter() {
        let mut reporter = Reporter::new();
        reporter.extend([
            make_violation("x", Severity::Style),
            make_violation("y", Severity::Error),
        ]);
        let drained = reporter.drain();
        assert_eq!(drained.len(), 2);
        assert!(reporter.is_empty());
    }

    #[test]
    fn counts_and_thresholds() {
        let mut reporter = Reporter::new();
        reporter.report(make_violation("x", Severity::Style));
        assert_eq!(reporter.count_by_severity(), (0, 1));
        assert!(!reporter.has_violations_at(Severity::Error));
        assert!(reporter.has_violations_at(Severity::Style));

        reporter.report(make_violation("y", Severity::Error));
        assert_eq!(reporter.count_by_severity(), (1, 1));
        assert!(reporter.has_violations_at(Severity::Error));
    }
}
