//! # namingng-core
//!
//! Core framework for naming-convention linting over a pre-extracted symbol
//! model.
//!
//! This crate provides the foundational types for building naming checks:
//!
//! - [`RawConfig`] and [`validate`] for turning a loosely typed config
//!   document into a [`ValidatedConfig`] plus per-key [`ConfigError`]s
//! - [`SymbolModel`] for read access to a translation unit, with the
//!   [`TranslationUnit`] JSON dump adapter
//! - [`Rule`] trait for checks run against a unit
//! - [`Analyzer`] for orchestrating rule execution
//! - [`Reporter`] and [`Violation`] for collecting findings
//!
//! ## Example
//!
//! ```ignore
//! use namingng_core::{Analyzer, RawConfig};
//!
//! let validation = RawConfig::from_file("namingng.json".as_ref())?.validate();
//! for error in &validation.errors {
//!     eprintln!("config error: {error}");
//! }
//!
//! let analyzer = Analyzer::builder()
//!     .config(validation.config)
//!     .rule(MyRule::new())
//!     .build();
//!
//! let reporter = analyzer.analyze_dump("test.c.dump.json".as_ref())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
pub mod config;
mod context;
mod error;
pub mod model;
mod pattern;
mod prefix;
mod report;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::{
    validate, ConfigError, GuardCase, GuardInput, IncludeGuardPolicy, RawConfig, RuleKey,
    ValidatedConfig, Validation,
};
pub use context::CheckContext;
pub use error::LoadError;
pub use model::{
    canonical_type, Class, Function, Namespace, ScopeKind, SourceFile, Symbol, SymbolModel,
    TranslationUnit, Variable,
};
pub use pattern::{NamePattern, PatternEntry, PatternError, RuleSpec};
pub use prefix::PrefixTable;
pub use report::Reporter;
pub use rule::{Rule, RuleBox};
pub use types::{Location, Severity, Violation};
