use std::fmt;

/// The kind of a GraphQL token.
///
/// This is a closed enumeration. Keywords (`query`, `on`, `true`, `null`,
/// ...) are not distinct kinds: they are lexed as [`Name`] tokens and
/// recognized by the parser by comparing the token's text.
///
/// Characters outside this set (e.g. `&`) are lexer errors.
///
/// [`Name`]: GraphQLTokenKind::Name
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Document bounds
    // =========================================================================
    /// Start of input. Only ever the lexer's initial current token.
    Sof,
    /// End of input.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Ellipsis,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `|`
    Pipe,
    /// `}`
    CurlyBraceClose,

    // =========================================================================
    // Lexemes carrying text
    // =========================================================================
    /// A name matching `[_A-Za-z][_0-9A-Za-z]*`.
    Name,
    /// An integer literal, including an optional leading `-`.
    IntValue,
    /// A float literal, including an optional leading `-`.
    FloatValue,
    /// A string or block string literal. The token's value is the cooked
    /// (unescaped) content.
    StringValue,
}

impl GraphQLTokenKind {
    /// Returns the source text of this kind if it is a punctuator.
    pub fn as_punctuator_str(self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),

            GraphQLTokenKind::Sof
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::IntValue
            | GraphQLTokenKind::FloatValue
            | GraphQLTokenKind::StringValue => None,
        }
    }

    /// Returns `true` if this kind is a punctuator.
    pub fn is_punctuator(self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` if tokens of this kind carry source text.
    pub fn has_value(self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::Name
                | GraphQLTokenKind::IntValue
                | GraphQLTokenKind::FloatValue
                | GraphQLTokenKind::StringValue,
        )
    }
}

impl fmt::Display for GraphQLTokenKind {
    /// Renders the kind the way error messages name it: punctuators in
    /// backticks, lexemes by name, and the document bounds in angle brackets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphQLTokenKind::Sof => f.write_str("<SOF>"),
            GraphQLTokenKind::Eof => f.write_str("<EOF>"),
            GraphQLTokenKind::Name => f.write_str("Name"),
            GraphQLTokenKind::IntValue => f.write_str("Int"),
            GraphQLTokenKind::FloatValue => f.write_str("Float"),
            GraphQLTokenKind::StringValue => f.write_str("String"),
            punct => write!(f, "`{}`", punct.as_punctuator_str().unwrap_or_default()),
        }
    }
}
