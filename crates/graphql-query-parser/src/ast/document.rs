use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use inherent::inherent;

/// Root AST node: the ordered, non-empty list of definitions in an
/// executable document.
///
/// See
/// [Document](https://spec.graphql.org/October2021/#sec-Document).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Iterate over the operation definitions, in source order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            Definition::Fragment(_) => None,
        })
    }

    /// Iterate over the fragment definitions, in source order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            Definition::Operation(_) => None,
        })
    }

    /// Look up a fragment definition by name.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments().find(|frag| frag.name == name)
    }
}

#[inherent]
impl AstNode for Document {
    /// Definitions are separated by a blank line.
    pub fn append_source(&self, sink: &mut String) {
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                sink.push_str("\n\n");
            }
            definition.append_source(sink);
        }
    }

    pub fn to_source(&self) -> String;
}
