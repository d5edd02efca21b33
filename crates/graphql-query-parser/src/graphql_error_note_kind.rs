/// The kind of an error note (determines how the note is rendered).
///
/// Notes provide additional context beyond the primary error message.
/// Different kinds are rendered with different prefixes in CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    /// Example: "String started here" (with span pointing to the opening `"`)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    /// Example: "Add one more `.` to form the spread operator `...`"
    Help,

    /// Reference to the GraphQL specification.
    ///
    /// Rendered as `= spec: ...` in CLI output.
    Spec,
}

impl GraphQLErrorNoteKind {
    /// The prefix used when rendering a note of this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
            GraphQLErrorNoteKind::Spec => "spec",
        }
    }
}
