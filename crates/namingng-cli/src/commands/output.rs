//! Shared output formatting for check results.

use anyhow::Result;
use miette::Diagnostic;
use namingng_core::{ConfigError, Severity, Violation};
use serde::Serialize;
use std::path::PathBuf;

use crate::OutputFormat;

/// Violations found in one symbol dump.
#[derive(Debug, Serialize)]
pub struct UnitReport {
    /// Path of the dump file.
    pub dump: PathBuf,
    /// Violations in document order.
    pub violations: Vec<Violation>,
}

/// A config diagnostic in serialisable form.
#[derive(Debug, Serialize)]
pub struct ConfigDiagnostic {
    key: String,
    code: Option<String>,
    severity: Severity,
    message: String,
}

impl From<&ConfigError> for ConfigDiagnostic {
    fn from(err: &ConfigError) -> Self {
        Self {
            key: err.key().to_string(),
            code: err.code().map(|c| c.to_string()),
            severity: err.severity(),
            message: err.detail(),
        }
    }
}

/// Totals across config diagnostics and all units.
#[derive(Debug, Default, Serialize)]
pub struct Summary {
    units: usize,
    errors: usize,
    styles: usize,
}

/// Everything a check run produced.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    config_errors: Vec<ConfigDiagnostic>,
    units: Vec<UnitReport>,
    summary: Summary,
}

impl CheckReport {
    /// Builds a report and its summary.
    #[must_use]
    pub fn new(config_errors: &[ConfigError], units: Vec<UnitReport>) -> Self {
        let config_errors: Vec<ConfigDiagnostic> =
            config_errors.iter().map(ConfigDiagnostic::from).collect();

        let mut summary = Summary {
            units: units.len(),
            ..Summary::default()
        };
        let severities = config_errors
            .iter()
            .map(|d| d.severity)
            .chain(units.iter().flat_map(|u| u.violations.iter().map(|v| v.severity)));
        for severity in severities {
            match severity {
                Severity::Error => summary.errors += 1,
                Severity::Style => summary.styles += 1,
            }
        }

        Self {
            config_errors,
            units,
            summary,
        }
    }

    /// Returns `true` if any diagnostic or violation reaches `threshold`.
    #[must_use]
    pub fn fails_at(&self, threshold: Severity) -> bool {
        match threshold {
            Severity::Style => self.summary.errors + self.summary.styles > 0,
            Severity::Error => self.summary.errors > 0,
        }
    }

    fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.units.iter().flat_map(|u| u.violations.iter())
    }
}

/// Print a check report in the specified format.
pub fn print(report: &CheckReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Standalone => print_standalone(report),
        OutputFormat::Json => return print_json(report),
    }
    Ok(())
}

fn print_config_errors(report: &CheckReport) {
    for diag in &report.config_errors {
        eprintln!("config error: {}", diag.message);
    }
}

fn print_text(report: &CheckReport) {
    print_config_errors(report);

    for violation in report.violations() {
        println!("{violation}");
    }

    let Summary {
        units,
        errors,
        styles,
    } = report.summary;
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if styles > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    eprintln!("{summary_color}Found {errors} error(s), {styles} style issue(s) in {units} dump(s)\x1b[0m");
}

fn print_standalone(report: &CheckReport) {
    print_config_errors(report);

    for violation in report.violations() {
        println!("{}", violation.format_standalone());
    }
}

fn print_json(report: &CheckReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
