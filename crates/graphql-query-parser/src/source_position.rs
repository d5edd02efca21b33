/// A position within GraphQL source text.
///
/// This is a pure data struct with no mutation methods. The [`Lexer`] is
/// responsible for computing position values as it scans input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `column`: character count (not bytes) within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// Display-oriented helpers (e.g. [`GraphQLParseError::format_oneline`])
/// add 1 to line and column.
///
/// [`Lexer`]: crate::Lexer
/// [`GraphQLParseError::format_oneline`]: crate::GraphQLParseError::format_oneline
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// Character count within current line (0-based). A multi-byte
    /// character such as `é` advances this by 1.
    column: usize,

    /// Byte offset from start of document (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition from 0-based components.
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// The position of the first byte of a document.
    pub fn start_of_document() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the current line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
