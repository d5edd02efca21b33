//! Tests for `GraphQLTokenKind` classification and display.

use crate::token::GraphQLTokenKind;

const ALL_KINDS: [GraphQLTokenKind; 19] = [
    GraphQLTokenKind::Sof,
    GraphQLTokenKind::Eof,
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
    GraphQLTokenKind::Name,
    GraphQLTokenKind::IntValue,
    GraphQLTokenKind::FloatValue,
    GraphQLTokenKind::StringValue,
];

// =============================================================================
// Classification
// =============================================================================

/// Exactly the thirteen punctuators report a punctuator string, and no kind
/// is both a punctuator and a text-carrying lexeme.
#[test]
fn punctuators_and_lexemes_are_disjoint() {
    let punctuators = ALL_KINDS.iter().filter(|k| k.is_punctuator()).count();
    let lexemes = ALL_KINDS.iter().filter(|k| k.has_value()).count();
    assert_eq!(punctuators, 13);
    assert_eq!(lexemes, 4);
    assert!(
        ALL_KINDS
            .iter()
            .all(|k| !(k.is_punctuator() && k.has_value()))
    );
}

#[test]
fn punctuator_strings() {
    assert_eq!(GraphQLTokenKind::Ellipsis.as_punctuator_str(), Some("..."));
    assert_eq!(GraphQLTokenKind::Pipe.as_punctuator_str(), Some("|"));
    assert_eq!(GraphQLTokenKind::CurlyBraceClose.as_punctuator_str(), Some("}"));
    assert_eq!(GraphQLTokenKind::Name.as_punctuator_str(), None);
    assert_eq!(GraphQLTokenKind::Eof.as_punctuator_str(), None);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_names_kinds_for_error_messages() {
    assert_eq!(GraphQLTokenKind::Colon.to_string(), "`:`");
    assert_eq!(GraphQLTokenKind::Ellipsis.to_string(), "`...`");
    assert_eq!(GraphQLTokenKind::Name.to_string(), "Name");
    assert_eq!(GraphQLTokenKind::IntValue.to_string(), "Int");
    assert_eq!(GraphQLTokenKind::FloatValue.to_string(), "Float");
    assert_eq!(GraphQLTokenKind::StringValue.to_string(), "String");
    assert_eq!(GraphQLTokenKind::Sof.to_string(), "<SOF>");
    assert_eq!(GraphQLTokenKind::Eof.to_string(), "<EOF>");
}
