use crate::ast::ast_node::append_directives;
use crate::ast::ast_node::append_selection_set;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::VariableDefinition;
use inherent::inherent;

/// An operation definition (query, mutation, or subscription).
///
/// The shorthand form `{ ... }` produces an anonymous `Query` with no
/// variable definitions and no directives.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

impl OperationDefinition {
    /// Whether this operation could have been written in the shorthand
    /// `{ ... }` form.
    pub fn is_shorthand(&self) -> bool {
        self.operation_type == OperationType::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn append_source(&self, sink: &mut String) {
        if self.is_shorthand() {
            append_selection_set(&self.selection_set, sink);
            return;
        }

        sink.push_str(self.operation_type.as_str());
        if let Some(name) = &self.name {
            sink.push(' ');
            sink.push_str(name);
        }
        if !self.variable_definitions.is_empty() {
            if self.name.is_none() {
                sink.push(' ');
            }
            sink.push('(');
            for (i, var_def) in self.variable_definitions.iter().enumerate() {
                if i > 0 {
                    sink.push_str(", ");
                }
                var_def.append_source(sink);
            }
            sink.push(')');
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        append_selection_set(&self.selection_set, sink);
    }

    pub fn to_source(&self) -> String;
}
