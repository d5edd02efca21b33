use crate::SourcePosition;
use std::path::PathBuf;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
///
/// Optionally includes a file path for the referenced source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
    /// The file path to the source text this span refers to, if available.
    pub file_path: Option<PathBuf>,
}

impl GraphQLSourceSpan {
    /// Creates a span without file path information.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: None,
        }
    }

    /// Creates a span with file path information.
    pub fn with_file(
        start: SourcePosition,
        end: SourcePosition,
        file_path: PathBuf,
    ) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
            file_path: Some(file_path),
        }
    }

    /// Number of bytes covered by this span.
    pub fn byte_len(&self) -> usize {
        self.end_exclusive
            .byte_offset()
            .saturating_sub(self.start_inclusive.byte_offset())
    }

    /// Returns the display name of the file this span points into, or
    /// `<input>` when the source was not read from a file.
    pub fn file_display_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }
}
