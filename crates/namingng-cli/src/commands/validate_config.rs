//! Validate-config command implementation.

use anyhow::Result;
use namingng_core::RuleKey;
use std::path::Path;

/// Runs the validate-config command.
pub fn run(explicit_config: Option<&Path>) -> Result<()> {
    let (resolved, validation) = super::load_config(explicit_config)?;
    println!("Config: {resolved}");

    for err in &validation.errors {
        println!("config error: {err}");
    }

    let config = &validation.config;
    let active: Vec<&str> = RuleKey::ALL
        .iter()
        .filter(|k| config.rule(**k).is_some())
        .map(|k| k.as_str())
        .collect();
    if !active.is_empty() {
        println!("Active rules: {}", active.join(", "));
    }
    if config.include_guard().is_some() {
        println!("Include guard: enabled");
    }

    if validation.errors.is_empty() {
        println!("Config OK");
        Ok(())
    } else {
        println!("{} config error(s)", validation.errors.len());
        std::process::exit(1);
    }
}

