use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::lexer::split_lines;

/// A parse error with location information and contextual notes.
///
/// Parsing stops at the first error, so a failed parse produces exactly one
/// of these.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: ``expected `:`, found Int "4"``, ``unexpected `)` ``
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For lexer errors: the offending characters
    /// - For "expected"/"unexpected" errors: the token actually found
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,

    /// Additional notes providing context, suggestions, and related locations.
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a new parse error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes,
        }
    }

    /// Creates a lexer error.
    pub fn lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self::with_notes(message, span, GraphQLParseErrorKind::LexerError, notes)
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found Int "4"
    ///   --> query.graphql:5:12
    ///    |
    ///  5 |     user(id 4) {
    ///    |             ^
    ///    |
    ///    = help: Arguments are written as `name: value`
    /// ```
    ///
    /// # Arguments
    /// - `source`: Optional source text for snippet extraction. If `None`,
    ///   snippets are omitted but line/column info is still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let file_name = self.span.file_display_name();
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.column() + 1;
        output.push_str(&format!("  --> {file_name}:{line}:{column}\n"));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind.prefix(), note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// query.graphql:5:12: error: expected `:`, found Int "4"
    /// ```
    pub fn format_oneline(&self) -> String {
        let file_name = self.span.file_display_name();
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.column() + 1;

        format!("{file_name}:{line}:{column}: error: {}", self.message)
    }

    /// Formats the source snippet for the primary error span.
    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.span.start_inclusive.line();
        let line_content = split_lines(source).into_iter().nth(line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();

        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        // Multi-line spans are underlined to the end of their first line.
        let col_start = self.span.start_inclusive.column();
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.column()
        } else {
            line_content.chars().count()
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }

    /// Formats a source snippet for a note's span.
    fn format_note_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
        let line_num = span.start_inclusive.line();
        let line_content = split_lines(source).into_iter().nth(line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();

        output.push_str(&format!(
            "     {display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = span.start_inclusive.column();
        output.push_str(&format!(
            "     {:>width$} | {:>padding$}-\n",
            "",
            "",
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }
}
