/// Errors that occur when converting numeric token text to a value.
///
/// The lexer only produces INT/FLOAT tokens whose text matches the GraphQL
/// lexical grammar, so these surface for out-of-range literals such as
/// `9999999999999` (which overflows the 32-bit GraphQL `Int`).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueParsingError {
    /// Invalid integer literal (overflow, invalid format).
    ///
    /// GraphQL integers must fit in a signed 32-bit integer (i32).
    #[error("Invalid GraphQL integer: {0}")]
    Int(String),

    /// Invalid float literal (infinity, NaN, invalid format).
    ///
    /// GraphQL floats must be finite f64 values.
    #[error("Invalid GraphQL float: {0}")]
    Float(String),
}
