use crate::ValueParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `message` and `notes` fields of
/// `GraphQLParseError`.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLParseError.message`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// The lexer could not produce a token.
    ///
    /// Covers unrecognized characters, malformed numeric literals,
    /// unterminated strings and invalid escape sequences.
    ///
    /// # Example
    /// ```text
    /// { name(arg: "unterminated }
    ///             ^ unterminated string literal
    /// ```
    #[error("lexer error")]
    LexerError,

    /// `expect` or `expect_keyword` found a token other than the one the
    /// grammar requires at this position.
    ///
    /// # Example
    /// ```text
    /// { user(id 4) }
    ///           ^ expected `:`, found Int "4"
    /// ```
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        /// What the grammar required (e.g. `` `:` `` or `` `on` ``).
        expected: String,
        /// Description of what was found (e.g. `Int "4"`).
        found: String,
    },

    /// A dispatch point found a token it cannot route.
    ///
    /// Also used for variables in const contexts and for the reserved
    /// fragment name `on`.
    ///
    /// # Example
    /// ```text
    /// { field(arg: ) }
    ///              ^ unexpected `)`
    /// ```
    #[error("unexpected {found}")]
    UnexpectedToken {
        /// Description of what was found.
        found: String,
    },

    /// A type-system definition or extension keyword introduced a
    /// definition. Only executable definitions are supported.
    ///
    /// # Example
    /// ```text
    /// type User { id: ID }
    /// ^^^^ type system definitions are not implemented
    /// ```
    #[error("unsupported definition: `{keyword}`")]
    UnsupportedDefinition {
        /// The keyword that introduced the definition (e.g. `"type"`).
        keyword: String,
    },

    /// A numeric literal could not be converted to its value.
    ///
    /// # Example
    /// ```text
    /// { field(limit: 99999999999999999999) }
    ///                ^^^^^^^^^^^^^^^^^^^^ integer overflow
    /// ```
    #[error("invalid value")]
    InvalidValue(ValueParsingError),

    /// Values, selection sets or type references were nested deeper than
    /// the parser's recursion limit.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,
}
