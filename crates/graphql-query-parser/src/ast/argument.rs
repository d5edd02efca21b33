use crate::ast::AstNode;
use crate::ast::Value;
use inherent::inherent;

/// A `name: value` argument to a field or directive.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value.append_source(sink);
    }

    pub fn to_source(&self) -> String;
}
