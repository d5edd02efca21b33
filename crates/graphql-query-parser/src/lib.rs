//! A lexer and recursive descent parser for GraphQL executable documents.
//!
//! Converts query text into an [`ast::Document`] of operations (query,
//! mutation, subscription) and fragments. Type-system definitions and
//! extensions are recognized and rejected with
//! [`GraphQLParseErrorKind::UnsupportedDefinition`].
//!
//! Parsing stops at the first lexical or syntactic error.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_parser::ast::Selection;
//!
//! let doc = graphql_query_parser::parse("{ user(id: 4) { name } }").unwrap();
//! let op = doc.operations().next().unwrap();
//! let Selection::Field(user) = &op.selection_set[0] else { unreachable!() };
//! assert_eq!(user.name, "user");
//! assert_eq!(user.arguments[0].name, "id");
//!
//! let err = graphql_query_parser::parse("type User { id: ID }").unwrap_err();
//! assert_eq!(err.format_oneline(), "<input>:1:1: error: type system definitions are not implemented: `type`");
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod lexer;
mod source_position;
pub mod token;
mod value_parsing_error;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser::parse;
pub use graphql_parser::parse_with_file_path;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use lexer::Lexer;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source_position::SourcePosition;
pub use value_parsing_error::ValueParsingError;

#[cfg(test)]
mod tests;
