//! AST types for parsed GraphQL executable documents.
//!
//! Nodes are plain owned data, built bottom-up by the parser and never
//! mutated afterwards. Sum-shaped grammar productions ([`Definition`],
//! [`Selection`], [`TypeReference`], [`Value`]) are enums, so consumers get
//! exhaustive matching.
//!
//! Nodes carry no source positions: two documents that differ only in
//! formatting compare equal.
//!
//! Every node implements [`AstNode`], which renders it back to GraphQL
//! source text.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_parser::ast::Selection;
//!
//! let doc = graphql_query_parser::parse("{ hero { name } }").unwrap();
//! let op = doc.operations().next().unwrap();
//! assert!(matches!(&op.selection_set[0], Selection::Field(f) if f.name == "hero"));
//! ```

mod argument;
mod ast_node;
mod definition;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod operation_definition;
mod operation_type;
mod selection;
mod type_reference;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use definition::Definition;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use selection::Selection;
pub use type_reference::TypeReference;
pub use value::Value;
pub use variable_definition::VariableDefinition;
