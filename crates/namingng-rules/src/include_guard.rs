//! Rule checking the include guard of header files.
//!
//! The first preprocessor directive within the first `max_linenr` lines of
//! a header must be `#ifndef <TOKEN>`, and `<TOKEN>` must equal the guard
//! derived from the file name (see [`IncludeGuardPolicy::expected_guard`]).
//! The matching `#define` and `#endif` are not verified. Comments are
//! ignored and a leading byte order mark is skipped.

use namingng_core::{
    CheckContext, IncludeGuardPolicy, Location, Rule, Severity, SourceFile, Violation,
};
use tracing::debug;

/// Rule id for headers without a guard.
pub const CODE_MISSING: &str = "namingng-includeGuardMissing";

/// Rule id for guards whose token differs from the expected one.
pub const CODE_NAME: &str = "namingng-includeGuardName";

/// Rule id for `#ifndef` lines without exactly one token.
pub const CODE_INVALID: &str = "namingng-includeGuardInvalid";

/// Rule name for include-guard.
pub const NAME: &str = "include-guard";

/// Outcome of scanning the leading lines of a header.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GuardScan<'a> {
    /// No `#ifndef` opens the file.
    Missing,
    /// `#ifndef` without exactly one token.
    Invalid { line: usize, column: usize },
    /// `#ifndef <token>` (line and column are 1-based).
    Found {
        token: &'a str,
        line: usize,
        column: usize,
    },
}

/// Scans at most `max_linenr` lines for the opening `#ifndef`.
///
/// Comments are blanked before a line is inspected, so `#` lines inside a
/// block comment are not directives and trailing comments are not tokens.
fn scan(lines: &[String], max_linenr: usize) -> GuardScan<'_> {
    let mut in_comment = false;
    for (idx, raw) in lines.iter().take(max_linenr).enumerate() {
        let line = if idx == 0 {
            raw.strip_prefix('\u{feff}').unwrap_or(raw.as_str())
        } else {
            raw.as_str()
        };
        let code = blank_comments(line, &mut in_comment);

        let hash_at = code.len() - code.trim_start().len();
        let Some(directive) = code[hash_at..].strip_prefix('#') else {
            continue;
        };
        let Some(args) = directive.trim_start().strip_prefix("ifndef") else {
            return GuardScan::Missing;
        };
        if args.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
            // e.g. `#ifndefined`
            return GuardScan::Missing;
        }

        let args = args.trim_start();
        let token_at = code.len() - args.len();
        let mut tokens = args.split_whitespace();
        return match (tokens.next(), tokens.next()) {
            (Some(token), None) => GuardScan::Found {
                token: &line[token_at..token_at + token.len()],
                line: idx + 1,
                column: column_of(line, token_at),
            },
            _ => GuardScan::Invalid {
                line: idx + 1,
                column: column_of(line, hash_at),
            },
        };
    }
    GuardScan::Missing
}

/// Replaces `//` and `/* */` comment text with spaces, keeping byte offsets.
/// `in_comment` carries an open block comment over to the next line.
fn blank_comments(line: &str, in_comment: &mut bool) -> String {
    let bytes = line.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let pair = bytes.get(i..i + 2);
        if *in_comment {
            if pair == Some(b"*/".as_slice()) {
                *in_comment = false;
                out.extend_from_slice(b"  ");
                i += 2;
            } else {
                out.push(b' ');
                i += 1;
            }
        } else if pair == Some(b"/*".as_slice()) {
            *in_comment = true;
            out.extend_from_slice(b"  ");
            i += 2;
        } else if pair == Some(b"//".as_slice()) {
            out.resize(bytes.len(), b' ');
            break;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    // Multi-byte characters are either copied whole or blanked byte by byte.
    String::from_utf8_lossy(&out).into_owned()
}

/// 1-based column of the byte `offset` in `line`.
fn column_of(line: &str, offset: usize) -> usize {
    line[..offset].chars().count() + 1
}

/// Checks that every header opens with a correctly named include guard.
#[derive(Debug, Clone)]
pub struct IncludeGuard {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for IncludeGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl IncludeGuard {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Style,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check_file(&self, policy: &IncludeGuardPolicy, file: &SourceFile) -> Option<Violation> {
        let Some(lines) = file.lines.as_deref() else {
            debug!("{}: contents unknown, guard not checked", file.path.display());
            return None;
        };

        match scan(lines, policy.max_linenr) {
            GuardScan::Missing if policy.required => Some(Violation::new(
                CODE_MISSING,
                self.severity,
                Location::whole_file(file.path.clone()),
                "Missing include guard",
            )),
            GuardScan::Missing => None,
            GuardScan::Invalid { line, column } => Some(Violation::new(
                CODE_INVALID,
                self.severity,
                Location::new(file.path.clone(), line, column),
                "Invalid #ifndef directive",
            )),
            GuardScan::Found {
                token,
                line,
                column,
            } => {
                let expected = policy.expected_guard(&file.path);
                debug!(
                    "{}: guard {token} at line {line}, expected {expected}",
                    file.path.display()
                );
                (token != expected).then(|| {
                    Violation::new(
                        CODE_NAME,
                        self.severity,
                        Location::new(file.path.clone(), line, column),
                        format!("include guard naming violation; {token} != {expected}"),
                    )
                })
            }
        }
    }
}

impl Rule for IncludeGuard {
    fn name(&self) -> &'static str {
        NAME
    }

    fn rule_ids(&self) -> &'static [&'static str] {
        &[CODE_MISSING, CODE_NAME, CODE_INVALID]
    }

    fn description(&self) -> &'static str {
        "Checks that headers open with an #ifndef guard named after the file"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &CheckContext<'_>) -> Vec<Violation> {
        let Some(policy) = ctx.config.include_guard() else {
            return Vec::new();
        };

        ctx.model
            .files()
            .iter()
            .filter(|file| policy.applies_to(&file.basename()))
            .filter_map(|file| self.check_file(policy, file))
            .collect()
    }
}
