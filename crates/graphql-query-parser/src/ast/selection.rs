use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use inherent::inherent;

/// A single selection within a selection set.
///
/// See
/// [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl AstNode for Selection {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Selection::Field(field) => field.append_source(sink),
            Selection::FragmentSpread(spread) => spread.append_source(sink),
            Selection::InlineFragment(inline) => inline.append_source(sink),
        }
    }

    pub fn to_source(&self) -> String;
}
