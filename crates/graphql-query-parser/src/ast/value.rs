use crate::ast::ast_node::append_string_literal;
use crate::ast::AstNode;
use indexmap::IndexMap;
use inherent::inherent;

/// An input value literal.
///
/// `Object` maps field names to values; when a literal repeats a field name
/// the last occurrence wins.
///
/// See
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Value {
    /// A variable reference; holds the name without the leading `$`.
    Variable(String),
    Int(i32),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Whether this value contains no variable references at any depth.
    pub fn is_const(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(items) => items.iter().all(Value::is_const),
            Value::Object(fields) => fields.values().all(Value::is_const),
            Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Boolean(_)
            | Value::Null
            | Value::Enum(_) => true,
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Value::Variable(name) => {
                sink.push('$');
                sink.push_str(name);
            }
            Value::Int(value) => sink.push_str(&value.to_string()),
            // `Debug` keeps a fractional part or exponent, so the text
            // re-lexes as a Float.
            Value::Float(value) => sink.push_str(&format!("{value:?}")),
            Value::String(value) => append_string_literal(value, sink),
            Value::Boolean(value) => sink.push_str(if *value { "true" } else { "false" }),
            Value::Null => sink.push_str("null"),
            Value::Enum(name) => sink.push_str(name),
            Value::List(items) => {
                sink.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        sink.push_str(", ");
                    }
                    item.append_source(sink);
                }
                sink.push(']');
            }
            Value::Object(fields) => {
                sink.push('{');
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        sink.push_str(", ");
                    }
                    sink.push_str(name);
                    sink.push_str(": ");
                    value.append_source(sink);
                }
                sink.push('}');
            }
        }
    }

    pub fn to_source(&self) -> String;
}
