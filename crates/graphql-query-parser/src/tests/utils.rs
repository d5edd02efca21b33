//! Various test utils.

use crate::GraphQLParseError;
use crate::Lexer;
use crate::ast;
use crate::token::GraphQLTokenKind;

/// Parses `source`, panicking with a rendered diagnostic on failure.
pub fn parse_ok(source: &str) -> ast::Document {
    match crate::parse(source) {
        Ok(doc) => doc,
        Err(err) => panic!(
            "expected `{source}` to parse:\n{}",
            err.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source`, panicking if it succeeds.
pub fn parse_err(source: &str) -> GraphQLParseError {
    match crate::parse(source) {
        Ok(doc) => panic!("expected `{source}` to fail, got: {doc:#?}"),
        Err(err) => err,
    }
}

/// Returns the first operation of a successfully parsed document.
pub fn first_operation(source: &str) -> ast::OperationDefinition {
    parse_ok(source)
        .operations()
        .next()
        .cloned()
        .expect("document should contain an operation")
}

/// Returns the selections of the first operation.
pub fn selections(source: &str) -> Vec<ast::Selection> {
    first_operation(source).selection_set
}

/// Returns the first selection of a set, which must be a field.
pub fn first_field(selection_set: &[ast::Selection]) -> &ast::Field {
    match selection_set.first() {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("expected a field, got: {other:?}"),
    }
}

/// Parses `{ f(arg: <value>) }` and returns the argument value.
pub fn parse_arg_value(value: &str) -> ast::Value {
    let source = format!("{{ f(arg: {value}) }}");
    let selections = selections(&source);
    first_field(&selections).arguments[0].value.clone()
}

/// Lexes `source` to completion and returns the token kinds, including
/// `Eof`.
pub fn token_kinds(source: &str) -> Vec<GraphQLTokenKind> {
    Lexer::new(source)
        .map(|token| token.expect("lexing should succeed").kind)
        .collect()
}

/// Lexes `source` and returns the first error.
pub fn lex_err(source: &str) -> GraphQLParseError {
    Lexer::new(source)
        .find_map(Result::err)
        .unwrap_or_else(|| panic!("expected `{source}` to fail lexing"))
}
