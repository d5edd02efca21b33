//! Tests for `Lexer`.
//!
//! These tests verify token classification, ignored tokens, position
//! tracking, string cooking and lexical errors.

use crate::GraphQLParseErrorKind;
use crate::Lexer;
use crate::tests::utils::lex_err;
use crate::tests::utils::token_kinds;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;
use std::path::Path;

/// Lexes `source` and returns the single token before `Eof`.
fn single_token(source: &str) -> GraphQLToken<'_> {
    let mut tokens = Lexer::new(source)
        .collect::<Result<Vec<_>, _>>()
        .expect("lexing should succeed");
    assert_eq!(tokens.len(), 2, "expected one token plus Eof: {tokens:?}");
    tokens.remove(0)
}

fn string_value(source: &str) -> String {
    let token = single_token(source);
    assert_eq!(token.kind, GraphQLTokenKind::StringValue);
    token.value.into_owned()
}

// =============================================================================
// Lexer state
// =============================================================================

/// A new lexer starts at `Sof`; the first advance scans the first real
/// token.
#[test]
fn new_lexer_starts_at_sof() {
    let mut lexer = Lexer::new("query");
    assert_eq!(lexer.token().kind, GraphQLTokenKind::Sof);

    lexer.advance().unwrap();
    assert_eq!(lexer.token().kind, GraphQLTokenKind::Name);
    assert_eq!(lexer.token().value, "query");

    lexer.advance().unwrap();
    assert_eq!(lexer.token().kind, GraphQLTokenKind::Eof);
}

/// Advancing past the end keeps yielding `Eof`.
#[test]
fn advance_after_eof_stays_at_eof() {
    let mut lexer = Lexer::new("");
    lexer.advance().unwrap();
    assert_eq!(lexer.token().kind, GraphQLTokenKind::Eof);
    lexer.advance().unwrap();
    assert_eq!(lexer.token().kind, GraphQLTokenKind::Eof);
}

/// The iterator stops after the first error.
#[test]
fn iterator_is_fused_after_error() {
    let mut lexer = Lexer::new("a & b");
    assert!(matches!(lexer.next(), Some(Ok(_))));
    assert!(matches!(lexer.next(), Some(Err(_))));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

// =============================================================================
// Token classification
// =============================================================================

#[test]
fn lexes_all_punctuators() {
    assert_eq!(
        token_kinds("! $ ( ) ... : = @ [ ] { | }"),
        vec![
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Keywords are ordinary names at the lexical level.
#[test]
fn keywords_are_names() {
    for keyword in ["query", "fragment", "on", "true", "false", "null", "type"] {
        let token = single_token(keyword);
        assert_eq!(token.kind, GraphQLTokenKind::Name);
        assert_eq!(token.value, keyword);
    }
}

#[test]
fn names_borrow_from_source() {
    let token = single_token("_user_2");
    assert_eq!(token.kind, GraphQLTokenKind::Name);
    assert!(matches!(token.value, Cow::Borrowed("_user_2")));
}

#[test]
fn lexes_ints() {
    for source in ["0", "-0", "7", "-42", "1234567890"] {
        let token = single_token(source);
        assert_eq!(token.kind, GraphQLTokenKind::IntValue, "{source}");
        assert_eq!(token.value, source);
    }
}

#[test]
fn lexes_floats() {
    for source in ["0.0", "-1.5", "1e10", "1E10", "6.0221e+23", "1.5e-3", "-0.1"] {
        let token = single_token(source);
        assert_eq!(token.kind, GraphQLTokenKind::FloatValue, "{source}");
        assert_eq!(token.value, source);
    }
}

/// `-` directly before a digit belongs to the number.
#[test]
fn negative_number_is_one_token() {
    assert_eq!(
        token_kinds("[-1, 2]"),
        vec![
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::IntValue,
            GraphQLTokenKind::IntValue,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

// =============================================================================
// Ignored tokens
// =============================================================================

#[test]
fn skips_whitespace_commas_bom_and_comments() {
    let source = "\u{FEFF}{ a,\tb # comment, with { braces }\r\n , c }";
    assert_eq!(
        token_kinds(source),
        vec![
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Name,
            GraphQLTokenKind::Name,
            GraphQLTokenKind::Name,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn comment_at_end_of_input() {
    assert_eq!(
        token_kinds("a # trailing"),
        vec![GraphQLTokenKind::Name, GraphQLTokenKind::Eof],
    );
}

// =============================================================================
// Positions
// =============================================================================

/// `\n`, `\r` and `\r\n` each end exactly one line.
#[test]
fn token_spans_report_line_column_and_offset() {
    let tokens = Lexer::new("a\nb\r\nc\rd")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let positions: Vec<(usize, usize, usize)> = tokens
        .iter()
        .map(|t| {
            let start = &t.span.start_inclusive;
            (start.line(), start.column(), start.byte_offset())
        })
        .collect();
    assert_eq!(positions, vec![(0, 0, 0), (1, 0, 2), (2, 0, 5), (3, 0, 7), (3, 1, 8)]);
}

#[test]
fn columns_count_characters() {
    let tokens = Lexer::new("\"é\" x")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let name = &tokens[1];
    assert_eq!(name.value, "x");
    assert_eq!(name.span.start_inclusive.column(), 4);
    assert_eq!(name.span.start_inclusive.byte_offset(), 5);
}

#[test]
fn file_path_is_attached_to_spans() {
    let path = Path::new("queries/hero.graphql");
    let token = Lexer::with_file_path("hero", path).next().unwrap().unwrap();
    assert_eq!(token.span.file_path.as_deref(), Some(path));
    assert_eq!(token.span.file_display_name(), "queries/hero.graphql");
}

// =============================================================================
// Strings
// =============================================================================

/// Strings without escapes borrow their content from the source.
#[test]
fn plain_string_is_borrowed() {
    let token = single_token("\"hello world\"");
    assert_eq!(token.kind, GraphQLTokenKind::StringValue);
    assert!(matches!(token.value, Cow::Borrowed("hello world")));
}

#[test]
fn empty_string() {
    assert_eq!(string_value("\"\""), "");
}

#[test]
fn cooks_simple_escapes() {
    assert_eq!(
        string_value(r#""a\"b\\c\/d\be\ff\ng\rh\ti""#),
        "a\"b\\c/d\u{0008}e\u{000C}f\ng\rh\ti",
    );
}

#[test]
fn cooks_unicode_escapes() {
    assert_eq!(string_value(r#""\u0041\u00e9""#), "A\u{e9}");
    assert_eq!(string_value(r#""\u{1F600}""#), "\u{1F600}");
    assert_eq!(string_value(r#""\uD83D\uDE00""#), "\u{1F600}");
}

#[test]
fn rejects_invalid_escapes() {
    for source in [r#""\q""#, r#""\u12""#, r#""\u{}""#, r#""\u{110000}""#, r#""\uD83D""#] {
        let err = lex_err(source);
        assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError, "{source}");
    }
}

#[test]
fn escape_error_points_at_escape() {
    let err = lex_err(r#"  "ab\qc""#);
    assert_eq!(err.message(), "Invalid escape sequence: `\\q`");
    assert_eq!(err.span().start_inclusive.column(), 5);
}

#[test]
fn unterminated_string_is_an_error() {
    let err = lex_err("\"abc");
    assert_eq!(err.message(), "Unterminated string literal");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
    assert!(
        err.notes()
            .iter()
            .any(|note| note.message == "String started here" && note.span.is_some())
    );
}

#[test]
fn newline_in_string_is_an_error() {
    let err = lex_err("\"abc\ndef\"");
    assert_eq!(err.message(), "Unterminated string literal");
}

#[test]
fn control_character_in_string_is_an_error() {
    let err = lex_err("\"a\u{0007}b\"");
    assert!(err.message().starts_with("Invalid character within string"), "{}", err.message());
}

// =============================================================================
// Block strings
// =============================================================================

#[test]
fn block_string_strips_common_indent_and_blank_lines() {
    let source = "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  \"\"\"";
    assert_eq!(
        string_value(source),
        "Hello,\n  World!\n\nYours,\n  GraphQL.",
    );
}

#[test]
fn block_string_keeps_first_line_indent() {
    assert_eq!(string_value("\"\"\"  first\n    second\"\"\""), "  first\nsecond");
}

#[test]
fn block_string_does_not_cook_escapes() {
    assert_eq!(string_value(r#""""a\nb \u0041""""#), r"a\nb \u0041");
}

#[test]
fn block_string_escaped_triple_quote() {
    assert_eq!(string_value(r#""""say \""" please""""#), r#"say """ please"#);
}

#[test]
fn block_string_normalizes_line_endings() {
    assert_eq!(string_value("\"\"\"a\r\nb\rc\"\"\""), "a\nb\nc");
}

#[test]
fn block_string_tracks_lines() {
    let tokens = Lexer::new("\"\"\"a\nb\n\"\"\" x")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(tokens[1].span.start_inclusive.line(), 2);
    assert_eq!(tokens[1].span.start_inclusive.column(), 4);
}

#[test]
fn unterminated_block_string_is_an_error() {
    let err = lex_err("\"\"\"abc\n  def");
    assert_eq!(err.message(), "Unterminated block string");
}

// =============================================================================
// Lexical errors
// =============================================================================

/// `&` is not a token in executable documents.
#[test]
fn ampersand_is_an_error() {
    let err = lex_err("a & b");
    assert_eq!(err.message(), "Unexpected character `&`");
    assert_eq!(err.span().start_inclusive.column(), 2);
    assert_eq!(err.span().end_exclusive.column(), 3);
}

#[test]
fn invisible_character_is_described() {
    let err = lex_err("a \u{200B}b");
    assert_eq!(
        err.message(),
        "Unexpected character `\\u{200b}` (U+200B: ZERO WIDTH SPACE)",
    );
}

#[test]
fn rejects_malformed_numbers() {
    let cases = [
        ("01", "leading zeros"),
        ("-", "Unexpected `-`"),
        ("1e", "exponent must have at least one digit"),
        ("1.5e+", "exponent must have at least one digit"),
        ("123abc", "unexpected `a` after number"),
        ("1.", "unexpected `.` after number"),
        ("1.5.3", "unexpected `.` after number"),
        ("0x1F", "unexpected `x` after number"),
    ];
    for (source, expected) in cases {
        let err = lex_err(source);
        assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError, "{source}");
        assert!(
            err.message().contains(expected),
            "`{source}`: `{}` should mention `{expected}`",
            err.message(),
        );
    }
}

#[test]
fn number_error_span_covers_whole_literal() {
    let err = lex_err("123abc rest");
    assert_eq!(err.span().start_inclusive.byte_offset(), 0);
    assert_eq!(err.span().end_exclusive.byte_offset(), 6);
}

#[test]
fn partial_ellipsis_is_an_error() {
    let err = lex_err("{ ..Frag }");
    assert_eq!(err.message(), "Unexpected `..` (use `...` for spread operator)");
    assert!(!err.notes().is_empty());

    let err = lex_err("a.b");
    assert_eq!(err.message(), "Unexpected `.`");
}
