//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::Write;

use miette::Diagnostic;
use neon_core::lang::tokens::{self, TokenKind};
use thiserror::Error;

use crate::report::{self, ReportConfig};

use super::{CliError, CliResult, ExitCode};

/// A name passed to `neon lookup` that is not a canonical token name.
#[derive(Debug, Error, Diagnostic)]
#[error("unknown token kind `{name}`")]
#[diagnostic(code(neon::tokens::unknown_name))]
pub struct UnknownTokenName {
    pub name: String,
    #[help]
    pub help: String,
}

impl UnknownTokenName {
    pub fn new(name: &str) -> Self {
        let upper = name.to_ascii_uppercase();
        let help = match tokens::from_str(&upper) {
            Some(kind) => format!("token names are case-sensitive; did you mean `{kind}`?"),
            None => {
                let expected: Vec<&str> = TokenKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("expected one of: {}", expected.join(", "))
            }
        };
        Self {
            name: name.to_string(),
            help,
        }
    }
}

/// Print the token registry.
#[tracing::instrument(skip_all, fields(format = ?config.format))]
pub fn print_tokens<W: Write>(out: &mut W, config: &ReportConfig) -> CliResult<ExitCode> {
    report::write_registry(out, config).map_err(|e| CliError::failure(format!("Error: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Render raw values through the total name renderer, one per line.
///
/// Values that name no token kind still render (as the fallback) and do not fail the command;
/// they are logged as a data-integrity warning.
#[tracing::instrument(skip_all, fields(count = values.len()))]
pub fn render_names<W: Write>(out: &mut W, values: &[i32]) -> CliResult<ExitCode> {
    for &raw in values {
        match TokenKind::from_ordinal(raw) {
            Some(kind) => writeln!(out, "{kind}"),
            None => {
                tracing::warn!(value = raw, "value does not name a token kind");
                writeln!(out, "{}", tokens::name(raw))
            }
        }
        .map_err(write_error)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve canonical names to ordinals, printing `<NAME> <ordinal>` per resolved name.
///
/// ## Errors
///
/// Fails with exit code 1 if any name is unknown; resolved names are still printed.
#[tracing::instrument(skip_all, fields(count = names.len()))]
pub fn lookup_names<W: Write>(out: &mut W, names: &[String]) -> CliResult<ExitCode> {
    let mut failures: Vec<String> = Vec::new();

    for name in names {
        match tokens::from_str(name) {
            Some(kind) => {
                tracing::debug!(name = %name, ordinal = kind.ordinal(), "resolved token name");
                writeln!(out, "{} {}", kind, kind.ordinal()).map_err(write_error)?;
            }
            None => {
                let report = miette::Report::new(UnknownTokenName::new(name));
                failures.push(format!("{report:?}"));
            }
        }
    }

    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(failures.join("\n")))
    }
}

fn write_error(e: std::io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {e}"))
}
