use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::Directive;
use inherent::inherent;

/// A named fragment spread: `...FragmentName @directives`.
///
/// The name is never `on`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<Directive>,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("...");
        sink.push_str(&self.name);
        append_directives(&self.directives, sink);
    }

    pub fn to_source(&self) -> String;
}
