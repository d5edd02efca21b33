use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::TypeReference;
use crate::ast::Value;
use inherent::inherent;

/// A variable definition: `$name: Type = default @directives`.
///
/// `variable` holds the name without the leading `$`. The default value,
/// when present, is always constant.
///
/// See
/// [Variables](https://spec.graphql.org/October2021/#sec-Language.Variables).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDefinition {
    pub variable: String,
    pub type_reference: TypeReference,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('$');
        sink.push_str(&self.variable);
        sink.push_str(": ");
        self.type_reference.append_source(sink);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_source(sink);
        }
        append_directives(&self.directives, sink);
    }

    pub fn to_source(&self) -> String;
}
