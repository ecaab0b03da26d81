//! Registry reports for the Neon token-kind vocabulary
//!
//! Renders `neon_core::lang::tokens::TOKEN_KINDS` as a plain-text transcript, a Markdown reference table, or JSON.
//!
//! ## Notes
//!
//! - Rows are always emitted in ordinal order.
//! - Plain output is the golden-transcript format: fixed-width columns, trailing whitespace trimmed.
//! - JSON is a documentation artifact. It is not an encoding for token streams.
//!
//! ## Example
//!
//! ```rust
//! use neon::report::{OutputFormat, ReportConfig, render_registry};
//!
//! let config = ReportConfig::new().with_format(OutputFormat::Markdown);
//! let table = render_registry(&config).unwrap();
//! assert!(table.contains("| 8 | LPAREN | delimiter | `(` |"));
//! ```

pub mod config;

use std::io::{self, Write};

use neon_core::lang::tokens::{TOKEN_KINDS, TokenKindInfo};
use serde_json::{Value, json};
use thiserror::Error;

pub use config::{OutputFormat, ReportConfig};

/// Errors produced while rendering or writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize registry: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Render the token registry to a string.
#[tracing::instrument(skip_all, fields(format = ?config.format))]
pub fn render_registry(config: &ReportConfig) -> Result<String, ReportError> {
    let mut out = String::new();
    match config.format {
        OutputFormat::Plain => write_plain(&mut out, config),
        OutputFormat::Markdown => write_markdown(&mut out, config),
        OutputFormat::Json => write_json(&mut out, config)?,
    }
    tracing::debug!(bytes = out.len(), rows = TOKEN_KINDS.len(), "rendered token registry");
    Ok(out)
}

/// Render the token registry and write it to `out`.
pub fn write_registry<W: Write>(out: &mut W, config: &ReportConfig) -> Result<(), ReportError> {
    let text = render_registry(config)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}

// ============================================================================
// Plain text
// ============================================================================

fn write_plain(out: &mut String, config: &ReportConfig) {
    if config.header {
        push_plain_row(out, "ORDINAL", "NAME", "GROUP", config.lexemes.then_some("LEXEME"));
    }
    for info in TOKEN_KINDS {
        // Debug-quote so whitespace lexemes stay visible
        let lexeme = info.lexeme.map(|l| format!("{l:?}")).unwrap_or_default();
        push_plain_row(
            out,
            &info.id.ordinal().to_string(),
            info.canonical,
            info.group.as_str(),
            config.lexemes.then_some(lexeme.as_str()),
        );
    }
}

fn push_plain_row(out: &mut String, ordinal: &str, name: &str, group: &str, lexeme: Option<&str>) {
    let mut line = format!("{ordinal:<7}  {name:<10}  {group:<9}");
    if let Some(lexeme) = lexeme {
        line.push_str("  ");
        line.push_str(lexeme);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

// ============================================================================
// Markdown
// ============================================================================

fn write_markdown(out: &mut String, config: &ReportConfig) {
    if config.header {
        out.push_str("## Token kinds\n\n");
        out.push_str("Generated from `neon_core::lang::tokens`. Do not edit by hand.\n\n");
    }

    let mut columns = vec!["Ordinal", "Name", "Group"];
    let mut align = vec!["---:", "---", "---"];
    if config.lexemes {
        columns.push("Lexeme");
        align.push("---");
    }
    push_markdown_row(out, &columns);
    push_markdown_row(out, &align);

    for info in TOKEN_KINDS {
        let ordinal = info.id.ordinal().to_string();
        let lexeme = markdown_lexeme(info);
        let mut cells = vec![ordinal.as_str(), info.canonical, info.group.as_str()];
        if config.lexemes {
            cells.push(lexeme.as_str());
        }
        push_markdown_row(out, &cells);
    }
}

fn push_markdown_row(out: &mut String, cells: &[&str]) {
    out.push_str("| ");
    out.push_str(&cells.join(" | "));
    out.push_str(" |\n");
}

fn markdown_lexeme(info: &TokenKindInfo) -> String {
    match info.lexeme {
        Some(lexeme) => {
            let escaped = lexeme.replace('\t', "\\t").replace('\n', "\\n");
            format!("`{escaped}`")
        }
        None => String::new(),
    }
}

// ============================================================================
// JSON
// ============================================================================

fn write_json(out: &mut String, config: &ReportConfig) -> Result<(), ReportError> {
    let rows: Vec<Value> = TOKEN_KINDS
        .iter()
        .map(|info| {
            let mut row = json!({
                "ordinal": info.id.ordinal(),
                "name": info.canonical,
                "group": info.group.as_str(),
                "description": info.description,
                "stability": info.stability.as_str(),
            });
            if config.lexemes {
                row["lexeme"] = json!(info.lexeme);
            }
            row
        })
        .collect();

    out.push_str(&serde_json::to_string_pretty(&rows)?);
    out.push('\n');
    Ok(())
}
