//! Core analyzer for orchestrating naming checks.

use crate::config::ValidatedConfig;
use crate::context::CheckContext;
use crate::error::LoadError;
use crate::model::{SymbolModel, TranslationUnit};
use crate::report::Reporter;
use crate::rule::{Rule, RuleBox};

use std::path::Path;
use tracing::{debug, info};

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<ValidatedConfig>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the validated configuration.
    #[must_use]
    pub fn config(mut self, config: ValidatedConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer. Without a config nothing is checked.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs every registered rule over translation units.
///
/// Use [`Analyzer::builder()`] to construct an instance. An analyzer holds no
/// mutable state and can be shared across threads.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: ValidatedConfig,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the validated configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks one translation unit. Violations are reported rule by rule, in
    /// registration order.
    #[must_use]
    pub fn analyze(&self, model: &dyn SymbolModel) -> Reporter {
        let ctx = CheckContext::new(&self.config, model);
        let mut reporter = Reporter::new();

        for rule in &self.rules {
            let violations = rule.check(&ctx);
            debug!("{}: {} violation(s)", rule.name(), violations.len());
            reporter.extend(violations);
        }

        reporter
    }

    /// Loads a symbol dump and checks it.
    ///
    /// # Errors
    ///
    /// Returns an error if the dump cannot be read or parsed.
    pub fn analyze_dump(&self, path: &Path) -> Result<Reporter, LoadError> {
        info!("Checking {}", path.display());
        let unit = TranslationUnit::from_file(path)?;
        let reporter = self.analyze(&unit);
        info!(
            "Finished {}: {} violation(s)",
            path.display(),
            reporter.len()
        );
        Ok(reporter)
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}
