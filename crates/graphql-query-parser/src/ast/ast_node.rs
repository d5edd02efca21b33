use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Selection;

/// Trait implemented by all AST node types.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
///
/// Rendering walks the AST and emits keywords, names, values and
/// punctuation with standard spacing. The output is semantically equivalent
/// to the parsed source, not formatting-identical: parsing it again yields
/// an equal AST.
pub trait AstNode {
    /// Append this node's GraphQL source representation to `sink`.
    fn append_source(&self, sink: &mut String);

    /// Return this node's GraphQL source representation as a `String`.
    fn to_source(&self) -> String {
        let mut sink = String::new();
        self.append_source(&mut sink);
        sink
    }
}

/// Appends `(a: 1, b: 2)`, or nothing when `arguments` is empty.
pub(crate) fn append_arguments(arguments: &[Argument], sink: &mut String) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            sink.push_str(", ");
        }
        argument.append_source(sink);
    }
    sink.push(')');
}

/// Appends ` @a @b(x: 1)`, each directive preceded by a space.
pub(crate) fn append_directives(directives: &[Directive], sink: &mut String) {
    for directive in directives {
        sink.push(' ');
        directive.append_source(sink);
    }
}

/// Appends `{ a b }`, or nothing when `selections` is empty.
pub(crate) fn append_selection_set(selections: &[Selection], sink: &mut String) {
    if selections.is_empty() {
        return;
    }
    sink.push('{');
    for selection in selections {
        sink.push(' ');
        selection.append_source(sink);
    }
    sink.push_str(" }");
}

/// Appends `value` as a quoted GraphQL string literal.
pub(crate) fn append_string_literal(value: &str, sink: &mut String) {
    sink.push('"');
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{0008}' => sink.push_str("\\b"),
            '\u{000C}' => sink.push_str("\\f"),
            c if (c as u32) < 0x20 => sink.push_str(&format!("\\u{:04X}", c as u32)),
            c => sink.push(c),
        }
    }
    sink.push('"');
}
