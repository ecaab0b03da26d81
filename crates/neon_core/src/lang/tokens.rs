//! Define the lexical token-kind vocabulary for the Neon scanner.
//!
//! This module is the single source of truth for token kinds: a stable identifier ([`TokenKind`]) plus a const
//! metadata table ([`TOKEN_KINDS`]) that records canonical names, groups, fixed lexemes, and provenance.
//!
//! ## Notes
//! - The set of kinds is **closed**. Adding a kind is a breaking change for every consumer.
//! - [`as_str`] is an exhaustive `match`: a new variant without a name does not compile.
//! - [`name`] is the raw-integer boundary. It is total over `i32` and never fails; values that name no kind render
//!   as `"UNKNOWN TOKEN: <value>"`.
//! - Lookup via [`from_str`] and [`from_lexeme`] is **case-sensitive**.
//! - This registry does not scan source text. [`from_lexeme`] only resolves fixed spellings.
//!
//! ## Examples
//! ```rust
//! use neon_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::as_str(TokenKind::Newline), "NEWLINE");
//! assert_eq!(tokens::name(TokenKind::Num.ordinal()), "NUM");
//! assert_eq!(tokens::name(-1), "UNKNOWN TOKEN: -1");
//! ```

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

use super::registry::{SINCE_0_1, SinceVersion, Stability};

/// Prefix of the fallback rendering for raw values that name no token kind.
pub const FALLBACK_PREFIX: &str = "UNKNOWN TOKEN: ";

/// Stable identifier for every lexical token kind.
///
/// ## Notes
/// - Discriminants are the stable ordinals. They are never reused or renumbered.
/// - There is deliberately no `Ord`: relative ordinal order carries no meaning.
///
/// ## Examples
/// ```rust
/// use neon_core::lang::tokens::TokenKind;
///
/// assert_eq!(TokenKind::LParen.ordinal(), 8);
/// assert_eq!(TokenKind::from_ordinal(8), Some(TokenKind::LParen));
/// assert_eq!(TokenKind::LParen.to_string(), "LPAREN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TokenKind {
    // Special
    Eof = 0,
    Unknown = 1,
    Invalid = 2,

    // Trivia
    Whitespace = 3,
    Tab = 4,
    Newline = 5,

    // Keywords
    Var = 6,
    Fn = 7,

    // Delimiters
    LParen = 8,
    RParen = 9,
    LBrace = 10,
    RBrace = 11,

    // Separators
    Semicolon = 12,
    Dot = 13,
    Comma = 14,
    Colon = 15,
    Equals = 16,

    // Identifiers and literals
    Ident = 17,
    Num = 18,
}

impl TokenKind {
    /// Number of token kinds in the registry.
    pub const COUNT: usize = 19;

    /// Every token kind, in ordinal order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Eof,
        TokenKind::Unknown,
        TokenKind::Invalid,
        TokenKind::Whitespace,
        TokenKind::Tab,
        TokenKind::Newline,
        TokenKind::Var,
        TokenKind::Fn,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Semicolon,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Equals,
        TokenKind::Ident,
        TokenKind::Num,
    ];

    /// Return the raw ordinal for this kind.
    ///
    /// Only use this at system boundaries (logging raw values, foreign token streams). Inside the toolchain, compare
    /// `TokenKind` values directly.
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Resolve a raw ordinal to a token kind.
    ///
    /// ## Returns
    /// - `Some(kind)` for the 19 defined ordinals, `None` for every other `i32`.
    pub const fn from_ordinal(raw: i32) -> Option<TokenKind> {
        match raw {
            0 => Some(TokenKind::Eof),
            1 => Some(TokenKind::Unknown),
            2 => Some(TokenKind::Invalid),
            3 => Some(TokenKind::Whitespace),
            4 => Some(TokenKind::Tab),
            5 => Some(TokenKind::Newline),
            6 => Some(TokenKind::Var),
            7 => Some(TokenKind::Fn),
            8 => Some(TokenKind::LParen),
            9 => Some(TokenKind::RParen),
            10 => Some(TokenKind::LBrace),
            11 => Some(TokenKind::RBrace),
            12 => Some(TokenKind::Semicolon),
            13 => Some(TokenKind::Dot),
            14 => Some(TokenKind::Comma),
            15 => Some(TokenKind::Colon),
            16 => Some(TokenKind::Equals),
            17 => Some(TokenKind::Ident),
            18 => Some(TokenKind::Num),
            _ => None,
        }
    }

    /// Return the canonical name (see [`as_str`]).
    pub const fn as_str(self) -> &'static str {
        as_str(self)
    }

    /// Return the metadata group (see [`group`]).
    pub fn group(self) -> TokenGroup {
        group(self)
    }

    /// Whether this kind is whitespace-like trivia (`WHITESPACE`, `TAB`, `NEWLINE`).
    ///
    /// Whether trivia reaches the parser is scanner policy; this only classifies.
    pub fn is_trivia(self) -> bool {
        self.group() == TokenGroup::Trivia
    }

    /// Whether this kind is a reserved word (`VAR`, `FN`).
    pub fn is_keyword(self) -> bool {
        self.group() == TokenGroup::Keyword
    }

    /// Whether this kind is a parenthesis or brace.
    pub fn is_delimiter(self) -> bool {
        self.group() == TokenGroup::Delimiter
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TokenKind> for i32 {
    fn from(kind: TokenKind) -> Self {
        kind.ordinal()
    }
}

impl TryFrom<i32> for TokenKind {
    type Error = UnknownTokenKind;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        TokenKind::from_ordinal(raw).ok_or(UnknownTokenKind(raw))
    }
}

/// A raw ordinal that names no token kind.
///
/// The `Display` output is exactly the fallback rendering produced by [`name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}{}", FALLBACK_PREFIX, .0)]
pub struct UnknownTokenKind(pub i32);

/// Broad grouping for documentation and tooling.
///
/// ## Notes
/// - Groups are metadata only; they do not decide what a scanner emits or a parser skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenGroup {
    /// End of input and error markers.
    Special,
    /// Whitespace, tabs, and line breaks.
    Trivia,
    /// Reserved words.
    Keyword,
    /// Parentheses and braces.
    Delimiter,
    /// Single-character separators like `;` and `=`.
    Separator,
    /// Identifiers and numeric literals (variable text).
    Literal,
}

impl TokenGroup {
    /// Return the lowercase label used in generated reports.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenGroup::Special => "special",
            TokenGroup::Trivia => "trivia",
            TokenGroup::Keyword => "keyword",
            TokenGroup::Delimiter => "delimiter",
            TokenGroup::Separator => "separator",
            TokenGroup::Literal => "literal",
        }
    }
}

/// Metadata for a token kind.
///
/// ## Notes
/// - `canonical` is the diagnostic name; it always equals [`as_str`] for `id`.
/// - `lexeme` is the fixed source spelling, if the kind has one.
#[derive(Debug, Clone, Copy)]
pub struct TokenKindInfo {
    pub id: TokenKind,
    pub canonical: &'static str,
    pub group: TokenGroup,
    pub lexeme: Option<&'static str>,
    pub description: &'static str,
    pub since: SinceVersion,
    pub stability: Stability,
}

/// Registry of all token kinds.
///
/// ## Notes
/// - Entries are stored in ordinal order, so `TOKEN_KINDS[k.ordinal() as usize].id == k`.
pub const TOKEN_KINDS: &[TokenKindInfo] = &[
    // Special
    info(TokenKind::Eof, "EOF", TokenGroup::Special, None, "End of input."),
    info(
        TokenKind::Unknown,
        "UNKNOWN",
        TokenGroup::Special,
        None,
        "A character the scanner does not recognize.",
    ),
    info(
        TokenKind::Invalid,
        "INVALID",
        TokenGroup::Special,
        None,
        "A recognized but malformed lexeme.",
    ),
    // Trivia
    info(
        TokenKind::Whitespace,
        "WHITESPACE",
        TokenGroup::Trivia,
        Some(" "),
        "A run of spaces.",
    ),
    info(TokenKind::Tab, "TAB", TokenGroup::Trivia, Some("\t"), "A tab character."),
    info(
        TokenKind::Newline,
        "NEWLINE",
        TokenGroup::Trivia,
        Some("\n"),
        "A line break; also terminates statements.",
    ),
    // Keywords
    info(
        TokenKind::Var,
        "VAR",
        TokenGroup::Keyword,
        Some("var"),
        "Variable declaration keyword.",
    ),
    info(
        TokenKind::Fn,
        "FN",
        TokenGroup::Keyword,
        Some("fn"),
        "Function declaration keyword.",
    ),
    // Delimiters
    info(TokenKind::LParen, "LPAREN", TokenGroup::Delimiter, Some("("), "Opening parenthesis."),
    info(TokenKind::RParen, "RPAREN", TokenGroup::Delimiter, Some(")"), "Closing parenthesis."),
    info(TokenKind::LBrace, "LBRACE", TokenGroup::Delimiter, Some("{"), "Opening brace."),
    info(TokenKind::RBrace, "RBRACE", TokenGroup::Delimiter, Some("}"), "Closing brace."),
    // Separators
    info(
        TokenKind::Semicolon,
        "SEMICOLON",
        TokenGroup::Separator,
        Some(";"),
        "Statement terminator.",
    ),
    info(TokenKind::Dot, "DOT", TokenGroup::Separator, Some("."), "Member access."),
    info(TokenKind::Comma, "COMMA", TokenGroup::Separator, Some(","), "List separator."),
    info(TokenKind::Colon, "COLON", TokenGroup::Separator, Some(":"), "Type annotation marker."),
    info(TokenKind::Equals, "EQUALS", TokenGroup::Separator, Some("="), "Assignment."),
    // Identifiers and literals
    info(TokenKind::Ident, "IDENT", TokenGroup::Literal, None, "An identifier."),
    info(TokenKind::Num, "NUM", TokenGroup::Literal, None, "A numeric literal."),
];

/// Return the canonical diagnostic name for a token kind.
///
/// ## Notes
/// - No wildcard arm: a new kind without a name fails to compile.
pub const fn as_str(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Eof => "EOF",
        TokenKind::Unknown => "UNKNOWN",
        TokenKind::Invalid => "INVALID",
        TokenKind::Whitespace => "WHITESPACE",
        TokenKind::Tab => "TAB",
        TokenKind::Newline => "NEWLINE",
        TokenKind::Var => "VAR",
        TokenKind::Fn => "FN",
        TokenKind::LParen => "LPAREN",
        TokenKind::RParen => "RPAREN",
        TokenKind::LBrace => "LBRACE",
        TokenKind::RBrace => "RBRACE",
        TokenKind::Semicolon => "SEMICOLON",
        TokenKind::Dot => "DOT",
        TokenKind::Comma => "COMMA",
        TokenKind::Colon => "COLON",
        TokenKind::Equals => "EQUALS",
        TokenKind::Ident => "IDENT",
        TokenKind::Num => "NUM",
    }
}

/// Render any raw token-kind value to its diagnostic name.
///
/// ## Parameters
/// - `raw`: any `i32`, typically a kind ordinal read from a foreign token stream or debug dump.
///
/// ## Returns
/// - The canonical name (borrowed) when `raw` is a defined ordinal.
/// - `"UNKNOWN TOKEN: <raw>"` (owned, decimal) otherwise.
///
/// ## Notes
/// - Total and pure: never panics, and the output is never empty and at most 26 bytes.
/// - The fallback is ordinary output, not an error. Whether to log it is the caller's decision.
///
/// ## Examples
/// ```rust
/// use neon_core::lang::tokens;
///
/// assert_eq!(tokens::name(0), "EOF");
/// assert_eq!(tokens::name(19), "UNKNOWN TOKEN: 19");
/// assert_eq!(tokens::name(i32::MIN), "UNKNOWN TOKEN: -2147483648");
/// ```
pub fn name(raw: i32) -> Cow<'static, str> {
    match TokenKind::from_ordinal(raw) {
        Some(kind) => Cow::Borrowed(kind.as_str()),
        None => Cow::Owned(UnknownTokenKind(raw).to_string()),
    }
}

/// Return the full metadata entry for a token kind.
pub fn info_for(kind: TokenKind) -> &'static TokenKindInfo {
    // Table order is pinned by the registry guardrail tests.
    &TOKEN_KINDS[kind.ordinal() as usize]
}

/// Return the metadata group for a token kind.
pub fn group(kind: TokenKind) -> TokenGroup {
    info_for(kind).group
}

/// Return the fixed source spelling for a token kind, if it has one.
///
/// `IDENT`, `NUM`, and the special kinds have no fixed spelling.
pub fn lexeme(kind: TokenKind) -> Option<&'static str> {
    info_for(kind).lexeme
}

/// Resolve a canonical name (e.g. `"LPAREN"`) to its token kind.
///
/// ## Notes
/// - Matching is **case-sensitive**; `"lparen"` does not resolve.
pub fn from_str(s: &str) -> Option<TokenKind> {
    TOKEN_KINDS.iter().find(|t| t.canonical == s).map(|t| t.id)
}

/// Resolve a fixed source spelling (e.g. `"fn"`, `"("`) to its token kind.
///
/// ## Notes
/// - This is a vocabulary lookup, not a scanner: arbitrary identifiers and numbers return `None`.
pub fn from_lexeme(s: &str) -> Option<TokenKind> {
    TOKEN_KINDS.iter().find(|t| t.lexeme == Some(s)).map(|t| t.id)
}

const fn info(
    id: TokenKind,
    canonical: &'static str,
    group: TokenGroup,
    lexeme: Option<&'static str>,
    description: &'static str,
) -> TokenKindInfo {
    TokenKindInfo {
        id,
        canonical,
        group,
        lexeme,
        description,
        since: SINCE_0_1,
        stability: Stability::Stable,
    }
}
