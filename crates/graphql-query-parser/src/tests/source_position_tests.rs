//! Tests for `SourcePosition` and `GraphQLSourceSpan`.

use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::path::PathBuf;

#[test]
fn accessors() {
    let pos = SourcePosition::new(3, 7, 42);
    assert_eq!(pos.line(), 3);
    assert_eq!(pos.column(), 7);
    assert_eq!(pos.byte_offset(), 42);
}

#[test]
fn start_of_document_is_zero() {
    assert_eq!(SourcePosition::start_of_document(), SourcePosition::new(0, 0, 0));
}

#[test]
fn span_byte_len() {
    let span = GraphQLSourceSpan::new(SourcePosition::new(0, 2, 2), SourcePosition::new(0, 6, 9));
    assert_eq!(span.byte_len(), 7);
    assert_eq!(span.file_display_name(), "<input>");
}

#[test]
fn span_with_file() {
    let span = GraphQLSourceSpan::with_file(
        SourcePosition::start_of_document(),
        SourcePosition::new(0, 1, 1),
        PathBuf::from("ops/hero.graphql"),
    );
    assert_eq!(span.file_display_name(), "ops/hero.graphql");
}
