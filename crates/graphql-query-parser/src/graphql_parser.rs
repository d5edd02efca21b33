//! Recursive descent parser for GraphQL executable documents.
//!
//! This module provides [`GraphQLParser`] and the [`parse`] entry point.
//!
//! # Architecture
//!
//! The parser reads from a [`Lexer`] with one token of lookahead and never
//! backtracks. Each grammar rule has a corresponding `parse_*` method
//! returning `Result<AstNode, GraphQLParseError>`. Every grammar violation is
//! fatal: the first error unwinds the whole parse through `?`.
//!
//! List-shaped productions are built from two combinators:
//!
//! - [`any`](GraphQLParser::any): zero or more items between delimiters
//!   (list values, object values).
//! - [`many`](GraphQLParser::many): one or more items between delimiters
//!   (selection sets, arguments, variable definitions, the document itself).

use crate::GraphQLErrorNote;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::Lexer;
use crate::ValueParsingError;
use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use indexmap::IndexMap;
use std::path::Path;

type ParseResult<T> = Result<T, GraphQLParseError>;

/// Keywords that introduce type-system definitions and extensions. These
/// are recognized so they can be rejected with a dedicated error.
const TYPE_SYSTEM_KEYWORDS: [&str; 9] = [
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "directive",
    "extend",
];

/// Parses a GraphQL executable document.
///
/// # Example
///
/// ```
/// use graphql_query_parser::ast::OperationType;
///
/// let doc = graphql_query_parser::parse("query Hero { hero { name } }").unwrap();
/// let op = doc.operations().next().unwrap();
/// assert_eq!(op.operation_type, OperationType::Query);
/// assert_eq!(op.name.as_deref(), Some("Hero"));
/// ```
pub fn parse(source: &str) -> Result<Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

/// Parses a GraphQL executable document read from `path`.
///
/// The path is attached to every span, so errors name the file.
pub fn parse_with_file_path(
    source: &str,
    path: &Path,
) -> Result<Document, GraphQLParseError> {
    GraphQLParser::with_file_path(source, path).parse_document()
}

// =============================================================================
// Const contexts
// =============================================================================

/// Context for parsing values, determining whether variables are allowed.
///
/// This is the `isConst` flag of the value grammar, carrying enough context
/// for a useful error message when a variable appears where it may not.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ConstContext {
    /// Variables are allowed (field arguments, operation directives).
    AllowVariables,
    /// Parsing a default value for a variable definition.
    VariableDefaultValue,
    /// Parsing a directive argument on a variable definition.
    DirectiveArgument,
}

impl ConstContext {
    pub(crate) fn is_const(self) -> bool {
        !matches!(self, ConstContext::AllowVariables)
    }

    fn description(self) -> &'static str {
        match self {
            ConstContext::AllowVariables => "this position",
            ConstContext::VariableDefaultValue => "variable default values",
            ConstContext::DirectiveArgument => "variable definition directives",
        }
    }
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL executable documents.
///
/// A parser owns its [`Lexer`] and is consumed by
/// [`parse_document`](Self::parse_document), so each instance serves exactly
/// one parse.
///
/// # Usage
///
/// ```
/// use graphql_query_parser::GraphQLParser;
///
/// let doc = GraphQLParser::new("{ a }").parse_document().unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub struct GraphQLParser<'src> {
    lexer: Lexer<'src>,

    /// Shared nesting depth of values, selection sets and type references.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src> {
    /// Maximum nesting depth for recursive parsing (values, selection
    /// sets, and type references).
    ///
    /// Prevents stack overflow from adversarial inputs like `[[[[[...`.
    /// 64 levels is far beyond any realistic GraphQL document.
    pub const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a new parser over `source`.
    pub fn new(source: &'src str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Creates a new parser whose spans name `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self::from_lexer(Lexer::with_file_path(source, path))
    }

    /// Creates a parser from a lexer that has not been advanced yet.
    pub fn from_lexer(lexer: Lexer<'src>) -> Self {
        Self {
            lexer,
            recursion_depth: 0,
        }
    }

    /// Parses the whole input as an executable document.
    ///
    /// A document holds one or more definitions; empty input is an error.
    pub fn parse_document(mut self) -> ParseResult<Document> {
        log::trace!(
            "parsing executable document ({} bytes)",
            self.lexer.source().len(),
        );
        let result = self
            .many(GraphQLTokenKind::Sof, Self::parse_definition, GraphQLTokenKind::Eof)
            .map(|definitions| Document { definitions });
        if let Err(err) = &result {
            log::debug!("parse failed: {}", err.format_oneline());
        }
        result
    }

    // =========================================================================
    // Token primitives
    // =========================================================================

    /// Returns `true` if the current token is of `kind`. Never consumes.
    pub(crate) fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.lexer.token().kind == kind
    }

    /// Returns `true` if the current token is the name `keyword`.
    pub(crate) fn peek_keyword(&self, keyword: &str) -> bool {
        self.lexer.token().is_keyword(keyword)
    }

    /// Consumes and returns the current token if it is of `kind`, otherwise
    /// fails naming the expected kind and the token found.
    pub(crate) fn expect(&mut self, kind: GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        if self.peek(kind) {
            return self.lexer.bump();
        }
        Err(self.expected(&kind.to_string()))
    }

    /// Consumes the current token and returns `true` if it is of `kind`;
    /// otherwise leaves it in place and returns `false`.
    pub(crate) fn skip(&mut self, kind: GraphQLTokenKind) -> ParseResult<bool> {
        if self.peek(kind) {
            self.lexer.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Like [`skip`](Self::skip), but matches a name token with the text
    /// `keyword`.
    pub(crate) fn skip_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        if self.peek_keyword(keyword) {
            self.lexer.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Like [`expect`](Self::expect), but matches a name token with the text
    /// `keyword`.
    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.skip_keyword(keyword)? {
            return Ok(());
        }
        Err(self.expected(&format!("`{keyword}`")))
    }

    /// Builds the error for a token that cannot be routed at this point.
    ///
    /// Describes `token`, or the current token when `None`.
    pub(crate) fn unexpected(&self, token: Option<&GraphQLToken<'src>>) -> GraphQLParseError {
        let token = token.unwrap_or_else(|| self.lexer.token());
        let found = token.to_string();
        GraphQLParseError::new(
            format!("unexpected {found}"),
            token.span.clone(),
            GraphQLParseErrorKind::UnexpectedToken { found },
        )
    }

    fn expected(&self, expected: &str) -> GraphQLParseError {
        let token = self.lexer.token();
        let found = token.to_string();
        GraphQLParseError::new(
            format!("expected {expected}, found {found}"),
            token.span.clone(),
            GraphQLParseErrorKind::ExpectedToken {
                expected: expected.to_string(),
                found,
            },
        )
    }

    /// Consumes a name token and returns its text.
    fn expect_name(&mut self) -> ParseResult<String> {
        Ok(self.expect(GraphQLTokenKind::Name)?.value.into_owned())
    }

    // =========================================================================
    // Repetition combinators
    // =========================================================================

    /// Parses `open item* close`: zero or more items in source order.
    pub(crate) fn any<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
        close: GraphQLTokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect(open)?;
        let mut items = Vec::new();
        while !self.skip(close)? {
            items.push(parse_one(self)?);
        }
        Ok(items)
    }

    /// Parses `open item+ close`: one or more items in source order.
    ///
    /// The first item is parsed before `close` is checked, so `open close`
    /// fails inside `parse_one`.
    pub(crate) fn many<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
        close: GraphQLTokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect(open)?;
        let mut items = vec![parse_one(self)?];
        while !self.skip(close)? {
            items.push(parse_one(self)?);
        }
        Ok(items)
    }

    // =========================================================================
    // Recursion limit
    // =========================================================================

    /// Checks recursion depth and returns an error if the limit is
    /// exceeded. On success, increments the depth counter; the caller
    /// must call `exit_recursion()` when done (use the wrapper pattern
    /// to guarantee this).
    fn enter_recursion(&mut self) -> ParseResult<()> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let token = self.lexer.token();
            return Err(GraphQLParseError::with_notes(
                "maximum nesting depth exceeded",
                token.span.clone(),
                GraphQLParseErrorKind::NestingTooDeep,
                smallvec![GraphQLErrorNote::general(format!(
                    "values, selection sets and type references may nest at most {} levels deep",
                    Self::MAX_RECURSION_DEPTH,
                ))],
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal or variable reference.
    ///
    /// `context` is threaded through every nested list and object value.
    pub(crate) fn parse_value(&mut self, context: ConstContext) -> ParseResult<Value> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(context);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, context: ConstContext) -> ParseResult<Value> {
        match self.lexer.token().kind {
            GraphQLTokenKind::Dollar => {
                if context.is_const() {
                    let mut err = self.unexpected(None);
                    err.add_note(format!(
                        "variables are not allowed in {}",
                        context.description(),
                    ));
                    return Err(err);
                }
                Ok(Value::Variable(self.parse_variable()?))
            }
            GraphQLTokenKind::SquareBracketOpen => Ok(Value::List(self.any(
                GraphQLTokenKind::SquareBracketOpen,
                |parser| parser.parse_value(context),
                GraphQLTokenKind::SquareBracketClose,
            )?)),
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(context),
            GraphQLTokenKind::IntValue => {
                let token = self.lexer.bump()?;
                token.value.parse::<i32>().map(Value::Int).map_err(|_| {
                    invalid_value(&token, ValueParsingError::Int(token.value.to_string()))
                })
            }
            GraphQLTokenKind::FloatValue => {
                let token = self.lexer.bump()?;
                match token.value.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(Value::Float(value)),
                    _ => Err(invalid_value(
                        &token,
                        ValueParsingError::Float(token.value.to_string()),
                    )),
                }
            }
            GraphQLTokenKind::StringValue => {
                Ok(Value::String(self.lexer.bump()?.value.into_owned()))
            }
            GraphQLTokenKind::Name => {
                let token = self.lexer.bump()?;
                Ok(match token.value.as_ref() {
                    "true" => Value::Boolean(true),
                    "false" => Value::Boolean(false),
                    "null" => Value::Null,
                    _ => Value::Enum(token.value.into_owned()),
                })
            }
            _ => Err(self.unexpected(None)),
        }
    }

    /// Parses `{ name: value ... }`. Later duplicates of a field name
    /// replace earlier ones.
    fn parse_object_value(&mut self, context: ConstContext) -> ParseResult<Value> {
        let fields = self.any(
            GraphQLTokenKind::CurlyBraceOpen,
            |parser| {
                let name = parser.expect_name()?;
                parser.expect(GraphQLTokenKind::Colon)?;
                Ok((name, parser.parse_value(context)?))
            },
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Value::Object(fields.into_iter().collect::<IndexMap<_, _>>()))
    }

    /// Parses `$name` and returns `name`.
    fn parse_variable(&mut self) -> ParseResult<String> {
        self.expect(GraphQLTokenKind::Dollar)?;
        self.expect_name()
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses a type reference. `!` applies to the fully parsed type on its
    /// left, so `[Int!]!` is `NonNull(List(NonNull(Named("Int"))))`.
    pub(crate) fn parse_type_reference(&mut self) -> ParseResult<TypeReference> {
        self.enter_recursion()?;
        let result = self.parse_type_reference_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_reference_impl(&mut self) -> ParseResult<TypeReference> {
        let inner = if self.skip(GraphQLTokenKind::SquareBracketOpen)? {
            let item_type = self.parse_type_reference()?;
            self.expect(GraphQLTokenKind::SquareBracketClose)?;
            TypeReference::List(Box::new(item_type))
        } else {
            TypeReference::Named(self.expect_name()?)
        };

        if self.skip(GraphQLTokenKind::Bang)? {
            Ok(TypeReference::NonNull(Box::new(inner)))
        } else {
            Ok(inner)
        }
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    /// Parses zero or more `@name(args)` directives.
    fn parse_directives(&mut self, context: ConstContext) -> ParseResult<Vec<Directive>> {
        let mut directives = Vec::new();
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive(context)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, context: ConstContext) -> ParseResult<Directive> {
        self.expect(GraphQLTokenKind::At)?;
        let name = self.expect_name()?;
        let arguments = self.parse_arguments(context)?;
        Ok(Directive { name, arguments })
    }

    /// Parses `(name: value ...)` if a `(` follows; the list may not be
    /// empty.
    fn parse_arguments(&mut self, context: ConstContext) -> ParseResult<Vec<Argument>> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.many(
            GraphQLTokenKind::ParenOpen,
            |parser| parser.parse_argument(context),
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_argument(&mut self, context: ConstContext) -> ParseResult<Argument> {
        let name = self.expect_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(Argument { name, value })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Parses a non-empty `{ selection+ }`.
    pub(crate) fn parse_selection_set(&mut self) -> ParseResult<Vec<Selection>> {
        self.enter_recursion()?;
        let result = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_selection,
            GraphQLTokenKind::CurlyBraceClose,
        );
        self.exit_recursion();
        result
    }

    fn parse_selection(&mut self) -> ParseResult<Selection> {
        if self.peek(GraphQLTokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// Parses `alias: name(args) @directives { ... }`.
    fn parse_field(&mut self) -> ParseResult<Field> {
        let name_or_alias = self.expect_name()?;
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.expect_name()?)
        } else {
            (None, name_or_alias)
        };

        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_selection_set()?
        } else {
            Vec::new()
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Parses a selection starting with `...`.
    ///
    /// - `... on Type @dirs { ... }` is an inline fragment.
    /// - `...Name @dirs` is a fragment spread.
    /// - `... @dirs { ... }` and `... { ... }` are inline fragments without
    ///   a type condition.
    fn parse_fragment(&mut self) -> ParseResult<Selection> {
        self.expect(GraphQLTokenKind::Ellipsis)?;

        if self.skip_keyword("on")? {
            let type_condition = self.expect_name()?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            let selection_set = self.parse_selection_set()?;
            return Ok(Selection::InlineFragment(InlineFragment {
                type_condition: Some(type_condition),
                directives,
                selection_set,
            }));
        }

        if self.peek(GraphQLTokenKind::Name) {
            let name = self.expect_name()?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            return Ok(Selection::FragmentSpread(FragmentSpread { name, directives }));
        }

        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition: None,
            directives,
            selection_set,
        }))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses an operation in named form or shorthand `{ ... }` form.
    fn parse_operation_definition(&mut self) -> ParseResult<OperationDefinition> {
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(OperationDefinition {
                operation_type: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set: self.parse_selection_set()?,
            });
        }

        let operation_type = self.parse_operation_type()?;
        let name = if self.peek(GraphQLTokenKind::Name) {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation_type,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn parse_operation_type(&mut self) -> ParseResult<OperationType> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        OperationType::from_keyword(&token.value).ok_or_else(|| self.unexpected(Some(&token)))
    }

    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<VariableDefinition>> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_variable_definition,
            GraphQLTokenKind::ParenClose,
        )
    }

    /// Parses `$name: Type = default @directives`. The default value and
    /// directive arguments are constant.
    fn parse_variable_definition(&mut self) -> ParseResult<VariableDefinition> {
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_reference = self.parse_type_reference()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;

        Ok(VariableDefinition {
            variable,
            type_reference,
            default_value,
            directives,
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Parses `fragment Name on Type @directives { ... }`.
    fn parse_fragment_definition(&mut self) -> ParseResult<FragmentDefinition> {
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.expect_name()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    /// Parses a fragment name: any name except `on`.
    fn parse_fragment_name(&mut self) -> ParseResult<String> {
        if self.peek_keyword("on") {
            let mut err = self.unexpected(None);
            err.add_note("`on` is reserved and cannot be used as a fragment name");
            return Err(err);
        }
        self.expect_name()
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    /// Parses one top-level definition, rejecting type-system definitions
    /// and extensions.
    fn parse_definition(&mut self) -> ParseResult<Definition> {
        let token = self.lexer.token();
        if token.kind == GraphQLTokenKind::Name
            && TYPE_SYSTEM_KEYWORDS.contains(&token.value.as_ref())
        {
            return Err(self.unsupported_definition());
        }
        self.parse_executable_definition()
    }

    fn parse_executable_definition(&mut self) -> ParseResult<Definition> {
        let token = self.lexer.token();
        match token.kind {
            GraphQLTokenKind::CurlyBraceOpen => {
                Ok(Definition::Operation(self.parse_operation_definition()?))
            }
            GraphQLTokenKind::Name => match token.value.as_ref() {
                "query" | "mutation" | "subscription" => {
                    Ok(Definition::Operation(self.parse_operation_definition()?))
                }
                "fragment" => Ok(Definition::Fragment(self.parse_fragment_definition()?)),
                _ => Err(self.unexpected(None)),
            },
            _ => Err(self.unexpected(None)),
        }
    }

    fn unsupported_definition(&self) -> GraphQLParseError {
        let token = self.lexer.token();
        let keyword = token.value.to_string();
        let what = if keyword == "extend" {
            "type system extensions"
        } else {
            "type system definitions"
        };
        GraphQLParseError::with_notes(
            format!("{what} are not implemented: `{keyword}`"),
            token.span.clone(),
            GraphQLParseErrorKind::UnsupportedDefinition { keyword },
            smallvec![GraphQLErrorNote::help(
                "only operations and fragments may appear in an executable document"
            )],
        )
    }
}

fn invalid_value(token: &GraphQLToken<'_>, err: ValueParsingError) -> GraphQLParseError {
    GraphQLParseError::new(
        err.to_string(),
        token.span.clone(),
        GraphQLParseErrorKind::InvalidValue(err),
    )
}
