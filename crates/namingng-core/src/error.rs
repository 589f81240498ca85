//! Errors raised while loading documents from disk or text.

use miette::Diagnostic;
use std::path::PathBuf;

/// A config document or symbol dump could not be loaded at all.
///
/// Unlike [`crate::ConfigError`], a load error is fatal for the document: no
/// validation or analysis happens.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LoadError {
    /// IO error reading the document.
    #[error("Failed to read {path}: {source}")]
    #[diagnostic(code(namingng::load::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid JSON, or does not fit the expected model.
    #[error("Failed to parse JSON: {0}")]
    #[diagnostic(code(namingng::load::json))]
    Json(#[from] serde_json::Error),

    /// The document is not valid TOML.
    #[error("Failed to parse TOML: {0}")]
    #[diagnostic(code(namingng::load::toml))]
    Toml(#[from] toml::de::Error),

    /// The config document parsed, but its top level is not a mapping.
    #[error("config document must be a dict (not {actual})")]
    #[diagnostic(code(namingng::load::not_a_dict))]
    NotADict {
        /// Shape of the top-level value.
        actual: &'static str,
    },
}
