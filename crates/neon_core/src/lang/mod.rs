//! Neon language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary. Today that is the closed set of lexical token
//! kinds produced by the scanner.
//!
//! The design goal is to avoid stringly-typed checks scattered across the toolchain. Callers work with **stable
//! IDs** (`TokenKind`) and look up names and metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token records, no IO, no side effects.
//! - The scanner decides which kinds it emits; registries provide names and metadata for shared use (diagnostics,
//!   docs, golden transcripts).
//!
//! ## Examples
//! ```rust
//! use neon_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::from_str("SEMICOLON"), Some(TokenKind::Semicolon));
//! assert_eq!(tokens::as_str(TokenKind::Semicolon), "SEMICOLON");
//! ```
//!
//! ## See also
//! - `neon tokens --format markdown` to render the registry as a reference table.

pub mod registry;
pub mod tokens;
