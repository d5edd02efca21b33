use crate::ast::ast_node::append_directives;
use crate::ast::ast_node::append_selection_set;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use inherent::inherent;

/// A named fragment definition:
/// `fragment Name on Type @directives { ... }`.
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" on ");
        sink.push_str(&self.type_condition);
        append_directives(&self.directives, sink);
        sink.push(' ');
        append_selection_set(&self.selection_set, sink);
    }

    pub fn to_source(&self) -> String;
}
