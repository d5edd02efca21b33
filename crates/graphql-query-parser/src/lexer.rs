//! A pull-based GraphQL lexer over a `&str` input.
//!
//! The lexer holds exactly one token of lookahead: [`Lexer::token`] is the
//! current token and [`Lexer::advance`] replaces it with the next one.
//! Whitespace, commas, the byte order mark and `#` comments are skipped and
//! never surface as tokens.
//!
//! `Name`, `IntValue` and `FloatValue` tokens borrow their text from the
//! source. `StringValue` tokens carry the cooked (unescaped) string content,
//! which is borrowed too unless the literal contains escapes or is a block
//! string.
//!
//! Every lexical error is fatal: `advance` returns it and the lexer's state
//! is left unspecified.
//!
//! # Usage
//!
//! ```rust
//! use graphql_query_parser::Lexer;
//! use graphql_query_parser::token::GraphQLTokenKind;
//!
//! let kinds = Lexer::new("{ name }")
//!     .map(|token| token.map(|t| t.kind))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseError;
use crate::GraphQLSourceSpan;
use crate::GraphQLStringParsingError;
use crate::SourcePosition;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;
use std::path::Path;

type LexResult<T> = Result<T, GraphQLParseError>;

/// Stateful token source over a GraphQL document.
///
/// A freshly constructed lexer's current token is [`GraphQLTokenKind::Sof`];
/// the first call to [`advance`](Lexer::advance) scans the first real token.
pub struct Lexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Byte offset of the next unscanned character.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current 0-based column, counted in characters.
    curr_col: usize,

    /// Whether the previous character was `\r`, so that a following `\n`
    /// does not start another line.
    last_char_was_cr: bool,

    /// The current (lookahead) token.
    token: GraphQLToken<'src>,

    /// Set once the iterator has yielded `Eof` or an error.
    finished: bool,

    /// Optional file path stamped into every span.
    file_path: Option<&'src Path>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned before the first token of `source`.
    pub fn new(source: &'src str) -> Self {
        Self::new_impl(source, None)
    }

    /// Creates a lexer whose spans (and therefore errors) name `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self::new_impl(source, Some(path))
    }

    fn new_impl(source: &'src str, file_path: Option<&'src Path>) -> Self {
        let start = SourcePosition::start_of_document();
        let span = match file_path {
            Some(path) => GraphQLSourceSpan::with_file(
                start.clone(),
                start,
                path.to_path_buf(),
            ),
            None => GraphQLSourceSpan::new(start.clone(), start),
        };
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
            token: GraphQLToken::punctuator(GraphQLTokenKind::Sof, span),
            finished: false,
            file_path,
        }
    }

    /// The current token.
    pub fn token(&self) -> &GraphQLToken<'src> {
        &self.token
    }

    /// The full source text this lexer reads from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Discards the current token and scans the next one.
    ///
    /// Once the end of input is reached, every further call leaves an `Eof`
    /// token current.
    pub fn advance(&mut self) -> LexResult<()> {
        self.token = self.next_token()?;
        Ok(())
    }

    /// Advances and returns the token that was current before the call.
    pub fn bump(&mut self) -> LexResult<GraphQLToken<'src>> {
        let next = self.next_token()?;
        Ok(std::mem::replace(&mut self.token, next))
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col, self.curr_byte_offset)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `byte_len` bytes known to contain no line terminators.
    fn consume_within_line(&mut self, byte_len: usize) {
        let text = &self.remaining()[..byte_len];
        self.curr_col += text.chars().count();
        self.curr_byte_offset += byte_len;
        if byte_len > 0 {
            self.last_char_was_cr = false;
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        let end = self.curr_position();
        match self.file_path {
            Some(path) => GraphQLSourceSpan::with_file(start, end, path.to_path_buf()),
            None => GraphQLSourceSpan::new(start, end),
        }
    }

    fn error(
        &self,
        message: impl Into<String>,
        start: SourcePosition,
        notes: GraphQLErrorNotes,
    ) -> GraphQLParseError {
        GraphQLParseError::lexer_error(message, self.make_span(start), notes)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn punctuator(
        &mut self,
        kind: GraphQLTokenKind,
        start: SourcePosition,
    ) -> LexResult<GraphQLToken<'src>> {
        self.consume();
        Ok(GraphQLToken::punctuator(kind, self.make_span(start)))
    }

    fn next_token(&mut self) -> LexResult<GraphQLToken<'src>> {
        self.skip_ignored();

        let start = self.curr_position();
        let Some(ch) = self.peek_char() else {
            return Ok(GraphQLToken::punctuator(
                GraphQLTokenKind::Eof,
                self.make_span(start),
            ));
        };

        match ch {
            '!' => self.punctuator(GraphQLTokenKind::Bang, start),
            '$' => self.punctuator(GraphQLTokenKind::Dollar, start),
            '(' => self.punctuator(GraphQLTokenKind::ParenOpen, start),
            ')' => self.punctuator(GraphQLTokenKind::ParenClose, start),
            ':' => self.punctuator(GraphQLTokenKind::Colon, start),
            '=' => self.punctuator(GraphQLTokenKind::Equals, start),
            '@' => self.punctuator(GraphQLTokenKind::At, start),
            '[' => self.punctuator(GraphQLTokenKind::SquareBracketOpen, start),
            ']' => self.punctuator(GraphQLTokenKind::SquareBracketClose, start),
            '{' => self.punctuator(GraphQLTokenKind::CurlyBraceOpen, start),
            '|' => self.punctuator(GraphQLTokenKind::Pipe, start),
            '}' => self.punctuator(GraphQLTokenKind::CurlyBraceClose, start),
            '.' => self.lex_ellipsis(start),
            '"' => self.lex_string(start),
            c if is_name_start(c) => Ok(self.lex_name(start)),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            c => Err(self.lex_invalid_character(start, c)),
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, line terminators, commas, the BOM and comments.
    ///
    /// See: <https://spec.graphql.org/October2021/#sec-Language.Source-Text.Ignored-Tokens>
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                }
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (not including) the end of its line.
    fn skip_comment(&mut self) {
        let bytes = self.remaining().as_bytes();
        let len = memchr::memchr2(b'\n', b'\r', bytes).unwrap_or(bytes.len());
        self.consume_within_line(len);
    }

    // =========================================================================
    // Ellipsis
    // =========================================================================

    fn lex_ellipsis(&mut self, start: SourcePosition) -> LexResult<GraphQLToken<'src>> {
        if self.remaining().starts_with("...") {
            self.consume_within_line(3);
            return Ok(GraphQLToken::punctuator(
                GraphQLTokenKind::Ellipsis,
                self.make_span(start),
            ));
        }

        if self.remaining().starts_with("..") {
            self.consume_within_line(2);
            return Err(self.error(
                "Unexpected `..` (use `...` for spread operator)",
                start,
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`"
                )],
            ));
        }

        self.consume_within_line(1);
        Err(self.error("Unexpected `.`", start, smallvec![]))
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes a name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// Keywords are not distinguished here; the parser compares name text.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let rest = self.remaining();
        let len = rest
            .bytes()
            .position(|b| !is_name_continue(b as char))
            .unwrap_or(rest.len());
        self.consume_within_line(len);
        GraphQLToken::new(
            GraphQLTokenKind::Name,
            Cow::Borrowed(&rest[..len]),
            self.make_span(start),
        )
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// A number may not be directly followed by a `.` or a name start.
    fn lex_number(&mut self, start: SourcePosition) -> LexResult<GraphQLToken<'src>> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return Err(self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        "https://spec.graphql.org/October2021/#sec-Int-Value",
                    ));
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
            _ => return Err(self.error("Unexpected `-`", start, smallvec![])),
        }

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some('e' | 'E') = self.peek_char() {
            is_float = true;
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    "https://spec.graphql.org/October2021/#sec-Float-Value",
                ));
            }
            self.consume_digits();
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch))
        {
            return Err(self.lex_number_error(
                start,
                num_start,
                &format!("Invalid number: unexpected {} after number", describe_char(ch)),
                "https://spec.graphql.org/October2021/#sec-Int-Value",
            ));
        }

        let text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::FloatValue
        } else {
            GraphQLTokenKind::IntValue
        };
        Ok(GraphQLToken::new(kind, Cow::Borrowed(text), self.make_span(start)))
    }

    fn consume_digits(&mut self) {
        let len = self
            .remaining()
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(self.remaining().len());
        self.consume_within_line(len);
    }

    /// Builds an error for an invalid number, first consuming the rest of the
    /// number-like run so the span covers all of it.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> GraphQLParseError {
        let len = self
            .remaining()
            .bytes()
            .position(|b| !(b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-' | b'_')))
            .unwrap_or(self.remaining().len());
        self.consume_within_line(len);

        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.error(
            format!("{message}: `{invalid_text}`"),
            start,
            smallvec![GraphQLErrorNote::spec(spec_url)],
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a single-line string, cooking escape sequences as it goes.
    fn lex_string(&mut self, start: SourcePosition) -> LexResult<GraphQLToken<'src>> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume();
        let content_start = self.curr_byte_offset;
        // Allocated on the first escape sequence; until then the content is
        // a plain slice of the source.
        let mut cooked: Option<String> = None;

        loop {
            let chunk_start = self.curr_byte_offset;
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return Err(self.unterminated_string_error(start));
                }
                Some('"') => {
                    let value = match cooked {
                        Some(s) => Cow::Owned(s),
                        None => Cow::Borrowed(&self.source[content_start..chunk_start]),
                    };
                    self.consume();
                    return Ok(GraphQLToken::new(
                        GraphQLTokenKind::StringValue,
                        value,
                        self.make_span(start),
                    ));
                }
                Some('\\') => {
                    let buf = cooked.get_or_insert_with(|| {
                        self.source[content_start..chunk_start].to_string()
                    });
                    let escape_start = self.curr_position();
                    self.consume();
                    let ch = cook_escape(self).map_err(|err| {
                        GraphQLParseError::lexer_error(
                            err.to_string(),
                            self.make_span(escape_start),
                            smallvec![GraphQLErrorNote::spec(
                                "https://spec.graphql.org/October2021/#EscapedCharacter"
                            )],
                        )
                    })?;
                    buf.push(ch);
                }
                Some(ch) if ch != '\t' && (ch as u32) < 0x20 => {
                    let char_start = self.curr_position();
                    self.consume();
                    return Err(self.error(
                        format!("Invalid character within string: {}", describe_char(ch)),
                        char_start,
                        smallvec![GraphQLErrorNote::help(
                            "Escape control characters with `\\u`"
                        )],
                    ));
                }
                Some(ch) => {
                    self.consume();
                    if let Some(buf) = cooked.as_mut() {
                        buf.push(ch);
                    }
                }
            }
        }
    }

    fn unterminated_string_error(&self, start: SourcePosition) -> GraphQLParseError {
        let started_here = GraphQLSourceSpan {
            end_exclusive: SourcePosition::new(
                start.line(),
                start.column() + 1,
                start.byte_offset() + 1,
            ),
            ..self.make_span(start.clone())
        };
        let mut notes: GraphQLErrorNotes = smallvec![
            GraphQLErrorNote::general_with_span("String started here", started_here),
            GraphQLErrorNote::help("Add closing `\"`"),
        ];
        if self.peek_char().is_some() {
            notes.push(GraphQLErrorNote::help(
                "Use a block string (triple quotes) for multi-line strings, or \
                 escape the newline with `\\n`",
            ));
        }
        self.error("Unterminated string literal", start, notes)
    }

    /// Lexes a block string and applies the common-indentation algorithm.
    ///
    /// See: <https://spec.graphql.org/October2021/#BlockStringValue()>
    fn lex_block_string(&mut self, start: SourcePosition) -> LexResult<GraphQLToken<'src>> {
        self.consume_within_line(3);
        let mut raw = String::new();

        loop {
            let rest = self.remaining();
            if rest.starts_with("\"\"\"") {
                self.consume_within_line(3);
                return Ok(GraphQLToken::new(
                    GraphQLTokenKind::StringValue,
                    Cow::Owned(block_string_value(&raw)),
                    self.make_span(start),
                ));
            }
            if rest.starts_with("\\\"\"\"") {
                self.consume_within_line(4);
                raw.push_str("\"\"\"");
                continue;
            }
            match self.consume() {
                None => {
                    let started_here = GraphQLSourceSpan {
                        end_exclusive: SourcePosition::new(
                            start.line(),
                            start.column() + 3,
                            start.byte_offset() + 3,
                        ),
                        ..self.make_span(start.clone())
                    };
                    return Err(self.error(
                        "Unterminated block string",
                        start,
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "Block string started here",
                                started_here,
                            ),
                            GraphQLErrorNote::help("Add closing `\"\"\"`"),
                        ],
                    ));
                }
                Some(ch) if (ch as u32) < 0x20 && !matches!(ch, '\t' | '\n' | '\r') => {
                    return Err(self.error(
                        format!("Invalid character within block string: {}", describe_char(ch)),
                        start,
                        smallvec![],
                    ));
                }
                Some(ch) => raw.push(ch),
            }
        }
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition, ch: char) -> GraphQLParseError {
        self.consume();
        self.error(
            format!("Unexpected character {}", describe_char(ch)),
            start,
            smallvec![],
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

/// Yields every token after `Sof` up to and including `Eof`.
///
/// Iteration stops after `Eof` or after the first error.
impl<'src> Iterator for Lexer<'src> {
    type Item = LexResult<GraphQLToken<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.advance() {
            Ok(()) => {
                if self.token.kind == GraphQLTokenKind::Eof {
                    self.finished = true;
                }
                Some(Ok(self.token.clone()))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

// =============================================================================
// String cooking
// =============================================================================

/// Cooks one escape sequence. The lexer is positioned just after the `\`.
fn cook_escape(lexer: &mut Lexer<'_>) -> Result<char, GraphQLStringParsingError> {
    match lexer.consume() {
        Some('"') => Ok('"'),
        Some('\\') => Ok('\\'),
        Some('/') => Ok('/'),
        Some('b') => Ok('\u{0008}'),
        Some('f') => Ok('\u{000C}'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('t') => Ok('\t'),
        Some('u') => cook_unicode_escape(lexer),
        Some(other) => Err(GraphQLStringParsingError::InvalidEscapeSequence(format!(
            "\\{other}"
        ))),
        None => Err(GraphQLStringParsingError::InvalidEscapeSequence(
            "\\".to_string(),
        )),
    }
}

/// Cooks the rest of a `\uXXXX` or `\u{X...}` escape.
///
/// A fixed-width high surrogate must be followed by a fixed-width low
/// surrogate; the pair encodes one supplementary-plane character.
fn cook_unicode_escape(lexer: &mut Lexer<'_>) -> Result<char, GraphQLStringParsingError> {
    if lexer.peek_char() == Some('{') {
        lexer.consume();
        let mut hex = String::new();
        loop {
            match lexer.peek_char() {
                Some('}') => {
                    lexer.consume();
                    break;
                }
                Some(c) if c.is_ascii_hexdigit() && hex.len() < 8 => {
                    lexer.consume();
                    hex.push(c);
                }
                _ => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                }
            }
        }
        return u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| {
                GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"))
            });
    }

    let code_unit = fixed_width_hex(lexer)?;
    if let Some(ch) = char::from_u32(code_unit) {
        return Ok(ch);
    }

    // `code_unit` is a surrogate.
    let invalid = || GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{code_unit:04X}"));
    if !(0xD800..0xDC00).contains(&code_unit) || !lexer.remaining().starts_with("\\u") {
        return Err(invalid());
    }
    lexer.consume_within_line(2);
    let low = fixed_width_hex(lexer)?;
    if !(0xDC00..0xE000).contains(&low) {
        return Err(invalid());
    }
    let combined = 0x10000 + ((code_unit - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(combined).ok_or_else(invalid)
}

fn fixed_width_hex(lexer: &mut Lexer<'_>) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match lexer.peek_char() {
            Some(c) if c.is_ascii_hexdigit() => {
                lexer.consume();
                hex.push(c);
            }
            _ => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            }
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Computes the value of a block string from its raw content (between the
/// quotes, with `\"""` already unescaped).
///
/// - Common indentation is computed over every line but the first, ignoring
///   lines made only of whitespace, and removed from those lines.
/// - Leading and trailing blank lines are dropped.
/// - Lines are joined with `\n`.
pub(crate) fn block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = split_lines(raw);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace_len(line);
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let mut lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line
            } else {
                &line[common_indent.min(line.len())..]
            }
        })
        .collect();

    while lines.first().is_some_and(|l| is_blank(l)) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| is_blank(l)) {
        lines.pop();
    }

    lines.join("\n")
}

/// Splits on `\r\n`, `\n` and `\r`, the line terminators the lexer
/// counts.
pub(crate) fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = raw.as_bytes();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&raw[line_start..i]);
                line_start = i + 1;
            }
            b'\r' => {
                lines.push(&raw[line_start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                line_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&raw[line_start..]);
    lines
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace_len(line) == line.len()
}

// =============================================================================
// Character helpers
// =============================================================================

/// See: <https://spec.graphql.org/October2021/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// See: <https://spec.graphql.org/October2021/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks; invisible and control
/// characters also get their code point and, when known, their name.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || ch == '\u{200B}' {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch.escape_default(), ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Names of the invisible characters most likely to sneak into a document.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{2002}' => Some("EN SPACE"),
        '\u{2003}' => Some("EM SPACE"),
        '\u{2009}' => Some("THIN SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        _ => None,
    }
}
