use crate::ast::ast_node::append_arguments;
use crate::ast::Argument;
use crate::ast::AstNode;
use inherent::inherent;

/// A directive annotation: `@name(arguments)`.
///
/// See
/// [Directives](https://spec.graphql.org/October2021/#sec-Language.Directives).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}

#[inherent]
impl AstNode for Directive {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('@');
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
    }

    pub fn to_source(&self) -> String;
}
