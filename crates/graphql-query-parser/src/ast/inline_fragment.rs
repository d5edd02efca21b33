use crate::ast::ast_node::append_directives;
use crate::ast::ast_node::append_selection_set;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use inherent::inherent;

/// An inline fragment: `... on Type @directives { ... }`.
///
/// The type condition is optional: `... @include(if: $x) { ... }` selects
/// on the enclosing type.
///
/// See
/// [Inline Fragments](https://spec.graphql.org/October2021/#sec-Inline-Fragments).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push_str(" on ");
            sink.push_str(type_condition);
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        append_selection_set(&self.selection_set, sink);
    }

    pub fn to_source(&self) -> String;
}
