//! Provide the canonical lexical vocabulary for the Neon toolchain.
//!
//! This crate is intentionally small and dependency-light. It is the contract between a scanner (which assigns token
//! kinds to lexemes) and every downstream consumer (parser, diagnostics, golden-output tests) that must agree on how
//! token kinds are named.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no scanner/parser types.
//! - Current scope: the closed token-kind registry and its total name renderer.
//!
//! ## Examples
//! ```rust
//! use neon_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::as_str(TokenKind::LParen), "LPAREN");
//! assert_eq!(tokens::name(9999), "UNKNOWN TOKEN: 9999");
//! ```

#![forbid(unsafe_code)]

pub mod lang;

pub use lang::tokens::{TokenKind, UnknownTokenKind};
