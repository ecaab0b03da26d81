#![forbid(unsafe_code)]
//! Neon token-kind tooling
//!
//! This crate wraps the `neon_core` token-kind registry with the pieces a toolchain needs around it: report
//! rendering (plain text, Markdown, JSON) and the `neon` command-line interface.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod report;
pub mod version;

pub use neon_core::lang::tokens;
pub use neon_core::{TokenKind, UnknownTokenKind};

pub use report::{OutputFormat, ReportConfig, render_registry};
