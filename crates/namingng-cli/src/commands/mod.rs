//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_rules;
pub mod output;
pub mod validate_config;

use crate::config_resolver::{Lookup, Origin, ResolvedConfig};
use anyhow::Result;
use namingng_core::Validation;
use std::path::Path;

/// Locates, loads and validates the configuration.
///
/// A document that does not parse is fatal; validation problems are returned
/// in [`Validation::errors`].
pub fn load_config(explicit: Option<&Path>) -> Result<(ResolvedConfig, Validation)> {
    let resolved = Lookup::from_env(Path::new(".")).load(explicit)?;
    match resolved.origin {
        Origin::Builtin => tracing::info!("No config found; nothing will be checked"),
        Origin::Global => tracing::info!("Using global config: {resolved}"),
        Origin::Flag | Origin::Project => tracing::debug!("Using config: {resolved}"),
    }
    let validation = resolved.raw.validate();
    Ok((resolved, validation))
}
