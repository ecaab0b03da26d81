//! Golden snapshot tests for token-kind names
//!
//! These pin the rendered name of every existing ordinal. Adding a token kind must not change any line
//! already present here; a rename shows up as a snapshot diff.
//!
//! Run with: `cargo test --test golden_snapshot_tests`
//! Review changes: `cargo insta review`

use neon::report::{ReportConfig, render_registry};
use neon::tokens;

/// Render every raw value in `range` through the total renderer, one per line.
fn name_transcript(range: std::ops::RangeInclusive<i32>) -> String {
    let mut out = String::new();
    for raw in range {
        out.push_str(&format!("{raw} => {}\n", tokens::name(raw)));
    }
    out
}

#[test]
fn test_name_transcript_around_registry() {
    insta::assert_snapshot!(name_transcript(-2..=20), @r"
-2 => UNKNOWN TOKEN: -2
-1 => UNKNOWN TOKEN: -1
0 => EOF
1 => UNKNOWN
2 => INVALID
3 => WHITESPACE
4 => TAB
5 => NEWLINE
6 => VAR
7 => FN
8 => LPAREN
9 => RPAREN
10 => LBRACE
11 => RBRACE
12 => SEMICOLON
13 => DOT
14 => COMMA
15 => COLON
16 => EQUALS
17 => IDENT
18 => NUM
19 => UNKNOWN TOKEN: 19
20 => UNKNOWN TOKEN: 20
");
}

#[test]
fn test_plain_registry_transcript() {
    let text = render_registry(&ReportConfig::default()).expect("render failed");
    insta::assert_snapshot!(text, @r#"
ORDINAL  NAME        GROUP      LEXEME
0        EOF         special
1        UNKNOWN     special
2        INVALID     special
3        WHITESPACE  trivia     " "
4        TAB         trivia     "\t"
5        NEWLINE     trivia     "\n"
6        VAR         keyword    "var"
7        FN          keyword    "fn"
8        LPAREN      delimiter  "("
9        RPAREN      delimiter  ")"
10       LBRACE      delimiter  "{"
11       RBRACE      delimiter  "}"
12       SEMICOLON   separator  ";"
13       DOT         separator  "."
14       COMMA       separator  ","
15       COLON       separator  ":"
16       EQUALS      separator  "="
17       IDENT       literal
18       NUM         literal
"#);
}

#[test]
fn test_boundary_values() {
    insta::assert_snapshot!(name_transcript(i32::MAX..=i32::MAX), @"2147483647 => UNKNOWN TOKEN: 2147483647");
    insta::assert_snapshot!(name_transcript(i32::MIN..=i32::MIN), @"-2147483648 => UNKNOWN TOKEN: -2147483648");
}
