use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use inherent::inherent;

/// A top-level definition in an executable document.
///
/// Type-system definitions and extensions are rejected by the parser and
/// have no variant here.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[inherent]
impl AstNode for Definition {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Definition::Operation(op) => op.append_source(sink),
            Definition::Fragment(frag) => frag.append_source(sink),
        }
    }

    pub fn to_source(&self) -> String;
}
