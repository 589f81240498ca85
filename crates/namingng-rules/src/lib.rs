//! # namingng-rules
//!
//! Built-in rules for namingng.
//!
//! ## Available Rules
//!
//! | Name | Ids | Description |
//! |------|-----|-------------|
//! | `naming-convention` | `namingng-namingConvention` | Checks file, variable, function, class and namespace names against configured patterns and type prefixes |
//! | `include-guard` | `namingng-includeGuardMissing`, `namingng-includeGuardName`, `namingng-includeGuardInvalid` | Checks that headers open with an `#ifndef` guard named after the file |
//!
//! ## Usage
//!
//! ```ignore
//! use namingng_core::{Analyzer, RawConfig};
//! use namingng_rules::{IncludeGuard, NamingConvention};
//!
//! let (config, _errors) = RawConfig::parse_json(text)?.validate().into_parts();
//! let analyzer = Analyzer::builder()
//!     .config(config)
//!     .rule(NamingConvention::new())
//!     .rule(IncludeGuard::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod include_guard;
pub mod naming_convention;
mod presets;

pub use include_guard::IncludeGuard;
pub use naming_convention::NamingConvention;
pub use presets::{all_rules, naming_rules, Preset};

/// Re-export core types for convenience.
pub use namingng_core::{Rule, Severity, Violation};
