use crate::ast::ast_node::append_arguments;
use crate::ast::ast_node::append_directives;
use crate::ast::ast_node::append_selection_set;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use inherent::inherent;

/// A field selection within a selection set, optionally
/// aliased, with arguments, directives, and a nested
/// selection set.
///
/// An empty `selection_set` means a leaf field.
///
/// See
/// [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

impl Field {
    /// The key this field's result is stored under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[inherent]
impl AstNode for Field {
    pub fn append_source(&self, sink: &mut String) {
        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
        append_directives(&self.directives, sink);
        if !self.selection_set.is_empty() {
            sink.push(' ');
            append_selection_set(&self.selection_set, sink);
        }
    }

    pub fn to_source(&self) -> String;
}
