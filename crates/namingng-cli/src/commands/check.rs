//! Check command implementation.

use anyhow::{Context, Result};
use namingng_core::{Analyzer, LoadError, Severity};
use namingng_rules::Preset;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use super::output::{CheckReport, UnitReport};
use crate::OutputFormat;

/// Suffix identifying symbol dump files.
const DUMP_SUFFIX: &str = ".dump.json";

/// Runs the check command.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    fail_on: Severity,
    preset: Preset,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let (_, validation) = super::load_config(explicit_config)?;
    let (config, config_errors) = validation.into_parts();

    let analyzer = Analyzer::builder()
        .config(config)
        .rules(preset.rules())
        .build();

    let dumps = discover_dumps(paths)?;
    tracing::info!(
        "Checking {} dump(s) with {} rules",
        dumps.len(),
        analyzer.rule_count()
    );

    let results: Vec<(PathBuf, Result<_, LoadError>)> = dumps
        .into_par_iter()
        .map(|dump| {
            let result = analyzer.analyze_dump(&dump);
            (dump, result)
        })
        .collect();

    let mut units = Vec::with_capacity(results.len());
    let mut load_failures = 0usize;
    for (dump, result) in results {
        match result {
            Ok(reporter) => units.push(UnitReport {
                dump,
                violations: reporter.into_violations(),
            }),
            Err(e) => {
                eprintln!("error: {e}");
                load_failures += 1;
            }
        }
    }

    let report = CheckReport::new(&config_errors, units);
    super::output::print(&report, format)?;

    if load_failures > 0 || report.fails_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Collects dump files: explicit files as given, directories walked for
/// `*.dump.json` (respecting ignore files). Directory results are sorted.
fn discover_dumps(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut dumps = Vec::new();
    for path in paths {
        if path.is_file() {
            dumps.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in ignore::WalkBuilder::new(path).hidden(false).build() {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            let p = entry.path();
            let is_dump = p
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(DUMP_SUFFIX));
            if is_dump && p.is_file() {
                found.push(p.to_path_buf());
            }
        }
        found.sort();
        tracing::debug!("{}: {} dump(s)", path.display(), found.len());
        dumps.extend(found);
    }
    Ok(dumps)
}
