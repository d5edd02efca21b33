use crate::GraphQLSourceSpan;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;
use std::fmt;

/// A GraphQL token with its text and source location.
///
/// `value` is empty for punctuators and the document bounds. For `Name`,
/// `IntValue` and `FloatValue` it borrows the lexeme from the source; for
/// `StringValue` it holds the cooked content, which only allocates when the
/// literal contains escapes or is a block string.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind,
    pub value: Cow<'src, str>,
    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(
        kind: GraphQLTokenKind,
        value: Cow<'src, str>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self { kind, value, span }
    }

    /// A token with no text (punctuators, `Sof`, `Eof`).
    pub fn punctuator(kind: GraphQLTokenKind, span: GraphQLSourceSpan) -> Self {
        Self::new(kind, Cow::Borrowed(""), span)
    }

    /// Returns `true` if this is a `Name` token whose text is `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == GraphQLTokenKind::Name && self.value == keyword
    }

    /// Converts into a token that no longer borrows from the source.
    pub fn into_owned(self) -> GraphQLToken<'static> {
        GraphQLToken {
            kind: self.kind,
            value: Cow::Owned(self.value.into_owned()),
            span: self.span,
        }
    }
}

impl fmt::Display for GraphQLToken<'_> {
    /// Describes the token for error messages, e.g. `Name "foo"`, `` `{` ``
    /// or `<EOF>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_value() {
            write!(f, "{} {:?}", self.kind, self.value.as_ref())
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
