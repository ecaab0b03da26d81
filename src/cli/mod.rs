//! CLI module for the Neon token-kind registry
//!
//! ## Commands
//!
//! - `tokens` - Print the registry table (plain, Markdown, or JSON)
//! - `name <VALUE>...` - Render raw token-kind values through the total name renderer
//! - `lookup <NAME>...` - Resolve canonical names to ordinals
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};

use crate::report::{OutputFormat, ReportConfig};
use crate::version::NEON_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the Neon token-kind registry
#[derive(Parser, Debug)]
#[command(name = "neon")]
#[command(version = NEON_VERSION)]
#[command(about = "Inspect the Neon token-kind registry", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every token kind in ordinal order
    Tokens {
        /// Output format (default: $NEON_REPORT_FORMAT, then plain)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<OutputFormat>,
        /// Omit the lexeme column
        #[arg(long)]
        no_lexemes: bool,
        /// Omit the header: the column row in plain output, the title and note in Markdown (the table's
        /// column row stays); JSON output has no header
        #[arg(long)]
        no_header: bool,
    },

    /// Render raw token-kind values to their diagnostic names
    Name {
        /// Raw values (any 32-bit signed integer)
        #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Resolve canonical token names (case-sensitive) to ordinals
    Lookup {
        /// Canonical names, e.g. LPAREN
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(cli, &mut out) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            let _ = out.flush();
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command, writing command output to `out`.
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> CliResult<ExitCode> {
    match cli.command {
        Command::Tokens {
            format,
            no_lexemes,
            no_header,
        } => {
            let config = match format {
                Some(format) => ReportConfig::new().with_format(format),
                None => ReportConfig::from_env(),
            }
            .with_lexemes(!no_lexemes)
            .with_header(!no_header);
            commands::print_tokens(out, &config)
        }
        Command::Name { values } => commands::render_names(out, &values),
        Command::Lookup { names } => commands::lookup_names(out, &names),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> (CliResult<ExitCode>, String) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut buf: Vec<u8> = Vec::new();
        let result = execute(cli, &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::try_parse_from(["neon", "tokens", "--format", "markdown", "--no-header"]).unwrap();
        if let Command::Tokens {
            format, no_header, ..
        } = cli.command
        {
            assert_eq!(format, Some(OutputFormat::Markdown));
            assert!(no_header);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_name_accepts_negative_values() {
        let cli = Cli::try_parse_from(["neon", "name", "-1", "19", "-2147483648"]).unwrap();
        if let Command::Name { values } = cli.command {
            assert_eq!(values, vec![-1, 19, i32::MIN]);
        } else {
            panic!("Expected Name command");
        }
    }

    #[test]
    fn test_cli_parse_rejects_out_of_range_values() {
        assert!(Cli::try_parse_from(["neon", "name", "2147483648"]).is_err());
        assert!(Cli::try_parse_from(["neon", "name"]).is_err());
    }

    #[test]
    fn test_cli_parse_lookup() {
        let cli = Cli::try_parse_from(["neon", "lookup", "LPAREN", "NUM"]).unwrap();
        assert!(matches!(cli.command, Command::Lookup { ref names } if names.len() == 2));
    }

    #[test]
    fn test_execute_name() {
        let (result, out) = run_to_string(&["neon", "name", "8", "19", "-1"]);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
        assert_eq!(out, "LPAREN\nUNKNOWN TOKEN: 19\nUNKNOWN TOKEN: -1\n");
    }

    #[test]
    fn test_execute_lookup() {
        let (result, out) = run_to_string(&["neon", "lookup", "EOF", "EQUALS"]);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
        assert_eq!(out, "EOF 0\nEQUALS 16\n");
    }

    #[test]
    fn test_execute_lookup_unknown_fails() {
        let (result, out) = run_to_string(&["neon", "lookup", "NUM", "lparen"]);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("lparen"));
        assert_eq!(out, "NUM 18\n");
    }

    #[test]
    fn test_execute_tokens_json() {
        let (result, out) = run_to_string(&["neon", "tokens", "--format", "json"]);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
        assert!(out.trim_start().starts_with('['));
        assert!(out.contains("\"SEMICOLON\""));
    }
}
