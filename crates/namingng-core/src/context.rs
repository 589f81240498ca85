//! Context passed to rules during analysis.

use crate::config::ValidatedConfig;
use crate::model::SymbolModel;

/// Everything a rule may read while checking one translation unit.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    /// Validated configuration shared by all rules.
    pub config: &'a ValidatedConfig,
    /// The unit being checked.
    pub model: &'a dyn SymbolModel,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    #[must_use]
    pub fn new(config: &'a ValidatedConfig, model: &'a dyn SymbolModel) -> Self {
        Self { config, model }
    }
}

impl std::fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("config", self.config)
            .field("files", &self.model.files().len())
            .finish()
    }
}
