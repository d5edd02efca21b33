//! Core token types produced by the [`Lexer`](crate::Lexer) and consumed by
//! the parser.

mod graphql_token;
mod graphql_token_kind;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;

#[cfg(test)]
mod tests;
