use crate::ast::AstNode;
use inherent::inherent;
use std::fmt;

/// A type reference in a variable definition.
///
/// `[Int!]!` is `NonNull(List(NonNull(Named("Int"))))`. `NonNull` never
/// directly wraps another `NonNull`.
///
/// See
/// [Type References](https://spec.graphql.org/October2021/#sec-Type-References).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub enum TypeReference {
    Named(String),
    List(Box<TypeReference>),
    NonNull(Box<TypeReference>),
}

impl TypeReference {
    /// Whether the outermost type is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeReference::NonNull(_))
    }

    /// The innermost named type, with all list and non-null wrappers
    /// removed.
    pub fn named_type(&self) -> &str {
        match self {
            TypeReference::Named(name) => name,
            TypeReference::List(inner) | TypeReference::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Named(name) => f.write_str(name),
            TypeReference::List(inner) => write!(f, "[{inner}]"),
            TypeReference::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[inherent]
impl AstNode for TypeReference {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&self.to_string());
    }

    pub fn to_source(&self) -> String;
}
