/// Error returned when cooking a GraphQL string literal into its value
/// fails.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// An invalid Unicode escape sequence was encountered (e.g. `\u{ZZZZ}`).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}
