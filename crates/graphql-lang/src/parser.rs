//! Recursive descent parser for GraphQL documents.
//!
//! [`Parser`] is an LL(1) recursive descent parser over the token
//! stream produced by [`next_token`]. It holds the single cursor into
//! the source: the current lookahead token plus the end offset of the
//! previously consumed token, which supplies the `end` of every node
//! [`Location`].
//!
//! Parsing is fail-fast. Every production returns
//! `Result<_, SyntaxError>` and the first error propagates out through
//! `?`; there is no recovery and no multi-error collection. A document
//! either parses completely or not at all.
//!
//! The grammar covers executable documents (operations and fragments)
//! and type system definitions (`schema`, `scalar`, `type`,
//! `interface`, `union`, `enum`, `input`, `extend`, `directive`) in a
//! single entry point, [`Parser::parse_document`].

use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValue;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::IntValue;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::NullableType;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::next_token;
use crate::Location;
use crate::Source;
use crate::SyntaxError;
use crate::Token;
use crate::TokenKind;
use std::borrow::Cow;

// =============================================================================
// Parser
// =============================================================================

/// Parses one GraphQL document per instance.
///
/// Construction primes the one-token lookahead, so it is fallible;
/// [`parse_document`](Parser::parse_document) then consumes the parser.
/// For the common case there is the crate-level [`parse`](crate::parse)
/// shorthand.
///
/// ```
/// use graphql_lang::Parser;
///
/// let document = Parser::new("{ hero { name } }")?.parse_document()?;
/// assert_eq!(document.definitions.len(), 1);
/// # Ok::<(), graphql_lang::SyntaxError>(())
/// ```
pub struct Parser<'src> {
    source: Source<'src>,
    /// One-token lookahead.
    token: Token<'src>,
    /// End offset of the most recently consumed token. Node locations
    /// close here, so trailing ignored text never lands in a span.
    prev_end: usize,
    recursion_depth: usize,
}

impl<'src> Parser<'src> {
    /// Depth limit shared by values, types, and selection sets.
    /// Pathologically nested input fails cleanly instead of
    /// overflowing the stack.
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a parser over `text`, lexing the first token.
    pub fn new<S>(text: &'src S) -> Result<Self, SyntaxError>
    where
        S: AsRef<str> + ?Sized,
    {
        Self::from_source(Source::new(text))
    }

    /// Creates a parser over an existing [`Source`], lexing the first
    /// token.
    pub fn from_source(source: Source<'src>) -> Result<Self, SyntaxError> {
        let token = next_token(&source, 0)?;
        Ok(Parser {
            source,
            token,
            prev_end: 0,
            recursion_depth: 0,
        })
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Parses the whole document: one or more definitions up to end of
    /// input. Empty (or all-ignored) documents fail with
    /// `Unexpected EOF`.
    pub fn parse_document(mut self) -> Result<Document<'src>, SyntaxError> {
        let start = self.token.start;
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.skip(TokenKind::Eof)? {
                break;
            }
        }
        Ok(Document {
            location: self.loc(start),
            definitions,
        })
    }

    fn parse_definition(&mut self) -> Result<Definition<'src>, SyntaxError> {
        if self.peek_is(TokenKind::BraceL) {
            return Ok(Definition::Operation(self.parse_operation_definition()?));
        }
        match self.name_value() {
            Some("query" | "mutation" | "subscription") => {
                Ok(Definition::Operation(self.parse_operation_definition()?))
            }
            Some("fragment") => Ok(Definition::Fragment(self.parse_fragment_definition()?)),
            Some("schema") => Ok(Definition::Schema(self.parse_schema_definition()?)),
            Some("scalar") => Ok(Definition::ScalarType(self.parse_scalar_type_definition()?)),
            Some("type") => Ok(Definition::ObjectType(self.parse_object_type_definition()?)),
            Some("interface") => Ok(Definition::InterfaceType(
                self.parse_interface_type_definition()?,
            )),
            Some("union") => Ok(Definition::UnionType(self.parse_union_type_definition()?)),
            Some("enum") => Ok(Definition::EnumType(self.parse_enum_type_definition()?)),
            Some("input") => Ok(Definition::InputObjectType(
                self.parse_input_object_type_definition()?,
            )),
            Some("extend") => Ok(Definition::TypeExtension(
                self.parse_type_extension_definition()?,
            )),
            Some("directive") => Ok(Definition::Directive(self.parse_directive_definition()?)),
            _ => Err(self.unexpected_token(&self.token)),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses an operation definition, either the full form
    /// (`query Name($var: Type) @dir { ... }`) or the shorthand query
    /// that is nothing but a selection set.
    fn parse_operation_definition(&mut self) -> Result<OperationDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        if self.peek_is(TokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                location: self.loc(start),
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            });
        }
        let operation = self.parse_operation_type()?;
        let name = if self.peek_is(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            location: self.loc(start),
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }

    fn parse_operation_type(&mut self) -> Result<OperationType, SyntaxError> {
        let token = self.expect(TokenKind::Name)?;
        let operation = match token.value.as_deref() {
            Some("query") => Some(OperationType::Query),
            Some("mutation") => Some(OperationType::Mutation),
            Some("subscription") => Some(OperationType::Subscription),
            _ => None,
        };
        operation.ok_or_else(|| self.unexpected_token(&token))
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition<'src>>, SyntaxError> {
        if self.peek_is(TokenKind::ParenL) {
            self.many(
                TokenKind::ParenL,
                Self::parse_variable_definition,
                TokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_variable_definition(&mut self) -> Result<VariableDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        let variable = self.parse_variable()?;
        self.expect(TokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        Ok(VariableDefinition {
            location: self.loc(start),
            variable,
            var_type,
            default_value,
        })
    }

    fn parse_variable(&mut self) -> Result<Variable<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            location: self.loc(start),
            name,
        })
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<SelectionSet<'src>, SyntaxError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    /// `{ Selection+ }`; an empty pair of braces fails on the closing
    /// brace with `Expected Name, found }`.
    fn parse_selection_set_impl(&mut self) -> Result<SelectionSet<'src>, SyntaxError> {
        let start = self.token.start;
        let selections = self.many(TokenKind::BraceL, Self::parse_selection, TokenKind::BraceR)?;
        Ok(SelectionSet {
            location: self.loc(start),
            selections,
        })
    }

    fn parse_selection(&mut self) -> Result<Selection<'src>, SyntaxError> {
        if self.peek_is(TokenKind::Spread) {
            self.parse_fragment()
        } else {
            self.parse_field()
        }
    }

    /// Parses a field, with `alias: name` resolved by one token of
    /// lookahead after the first name.
    fn parse_field(&mut self) -> Result<Selection<'src>, SyntaxError> {
        let start = self.token.start;
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek_is(TokenKind::BraceL) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Selection::Field(Field {
            location: self.loc(start),
            alias,
            name,
            arguments,
            directives,
            selection_set,
        }))
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument<'src>>, SyntaxError> {
        if self.peek_is(TokenKind::ParenL) {
            self.many(TokenKind::ParenL, Self::parse_argument, TokenKind::ParenR)
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_argument(&mut self) -> Result<Argument<'src>, SyntaxError> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(false)?;
        Ok(Argument {
            location: self.loc(start),
            name,
            value,
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Parses the selection forms that begin with `...`: an inline
    /// fragment with a type condition (`... on Type`), a fragment
    /// spread (`... name`), or an inline fragment without a condition
    /// (`... @dir { ... }` or `... { ... }`).
    fn parse_fragment(&mut self) -> Result<Selection<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect(TokenKind::Spread)?;
        if self.peek_is_keyword("on") {
            self.consume_token()?;
            let type_condition = self.parse_named_type()?;
            let directives = self.parse_directives()?;
            let selection_set = self.parse_selection_set()?;
            return Ok(Selection::InlineFragment(InlineFragment {
                location: self.loc(start),
                type_condition: Some(type_condition),
                directives,
                selection_set,
            }));
        }
        if self.peek_is(TokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives()?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                location: self.loc(start),
                name,
                directives,
            }));
        }
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            location: self.loc(start),
            type_condition: None,
            directives,
            selection_set,
        }))
    }

    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            location: self.loc(start),
            name,
            type_condition,
            directives,
            selection_set,
        })
    }

    /// A fragment name is any name except `on`, which would be
    /// ambiguous with a type condition at the spread site.
    fn parse_fragment_name(&mut self) -> Result<Name<'src>, SyntaxError> {
        if self.peek_is_keyword("on") {
            return Err(self.unexpected_token(&self.token));
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, is_const: bool) -> Result<Value<'src>, SyntaxError> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(is_const);
        self.exit_recursion();
        result
    }

    /// Parses a value literal. With `is_const` set (variable and input
    /// value defaults) a `$` variable fails with `Unexpected $`.
    fn parse_value_impl(&mut self, is_const: bool) -> Result<Value<'src>, SyntaxError> {
        match self.token.kind {
            TokenKind::BracketL => self.parse_list_value(is_const),
            TokenKind::BraceL => self.parse_object_value(is_const),
            TokenKind::Int => {
                let token = self.consume_token()?;
                Ok(Value::Int(IntValue {
                    location: Location::new(token.start, token.end),
                    value: token.value.unwrap_or_default(),
                }))
            }
            TokenKind::Float => {
                let token = self.consume_token()?;
                Ok(Value::Float(FloatValue {
                    location: Location::new(token.start, token.end),
                    value: token.value.unwrap_or_default(),
                }))
            }
            TokenKind::String | TokenKind::BlockString => {
                let token = self.consume_token()?;
                Ok(Value::String(StringValue {
                    location: Location::new(token.start, token.end),
                    value: token.value.unwrap_or_default(),
                    block: token.kind == TokenKind::BlockString,
                }))
            }
            TokenKind::Name => {
                let token = self.consume_token()?;
                let location = Location::new(token.start, token.end);
                let value = token.value.unwrap_or_default();
                Ok(if value == "true" || value == "false" {
                    Value::Boolean(BooleanValue {
                        location,
                        value: value == "true",
                    })
                } else if value == "null" {
                    Value::Null(NullValue { location })
                } else {
                    Value::Enum(EnumValue { location, value })
                })
            }
            TokenKind::Dollar if !is_const => Ok(Value::Variable(self.parse_variable()?)),
            _ => Err(self.unexpected_token(&self.token)),
        }
    }

    fn parse_list_value(&mut self, is_const: bool) -> Result<Value<'src>, SyntaxError> {
        let start = self.token.start;
        let values = self.any(
            TokenKind::BracketL,
            |parser| parser.parse_value(is_const),
            TokenKind::BracketR,
        )?;
        Ok(Value::List(ListValue {
            location: self.loc(start),
            values,
        }))
    }

    fn parse_object_value(&mut self, is_const: bool) -> Result<Value<'src>, SyntaxError> {
        let start = self.token.start;
        let fields = self.any(
            TokenKind::BraceL,
            |parser| parser.parse_object_field(is_const),
            TokenKind::BraceR,
        )?;
        Ok(Value::Object(ObjectValue {
            location: self.loc(start),
            fields,
        }))
    }

    /// `name: value` inside an object literal. Duplicate field names
    /// are legal here; flagging them is a validation concern.
    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectField<'src>, SyntaxError> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value(is_const)?;
        Ok(ObjectField {
            location: self.loc(start),
            name,
            value,
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self) -> Result<Vec<Directive<'src>>, SyntaxError> {
        let mut directives = Vec::new();
        while self.peek_is(TokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self) -> Result<Directive<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(Directive {
            location: self.loc(start),
            name,
            arguments,
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> Result<Type<'src>, SyntaxError> {
        self.enter_recursion()?;
        let result = self.parse_type_impl();
        self.exit_recursion();
        result
    }

    /// `Name`, `[Type]`, or either followed by a single `!`. A second
    /// `!` is not part of any type, so `Int!!` fails wherever the
    /// caller next looks, for instance `Expected ], found !` inside a
    /// list type.
    fn parse_type_impl(&mut self) -> Result<Type<'src>, SyntaxError> {
        let start = self.token.start;
        let nullable = if self.skip(TokenKind::BracketL)? {
            let wrapped = Box::new(self.parse_type()?);
            self.expect(TokenKind::BracketR)?;
            NullableType::List(ListType {
                location: self.loc(start),
                wrapped,
            })
        } else {
            NullableType::Named(self.parse_named_type()?)
        };
        if self.skip(TokenKind::Bang)? {
            return Ok(Type::NonNull(NonNullType {
                location: self.loc(start),
                wrapped: nullable,
            }));
        }
        Ok(nullable.into())
    }

    fn parse_named_type(&mut self) -> Result<NamedType<'src>, SyntaxError> {
        let start = self.token.start;
        let name = self.parse_name()?;
        Ok(NamedType {
            location: self.loc(start),
            name,
        })
    }

    fn parse_name(&mut self) -> Result<Name<'src>, SyntaxError> {
        let token = self.expect(TokenKind::Name)?;
        Ok(Name {
            location: Location::new(token.start, token.end),
            value: token.value.unwrap_or_default(),
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_schema_definition(&mut self) -> Result<SchemaDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives()?;
        let operation_types = self.many(
            TokenKind::BraceL,
            Self::parse_operation_type_definition,
            TokenKind::BraceR,
        )?;
        Ok(SchemaDefinition {
            location: self.loc(start),
            directives,
            operation_types,
        })
    }

    fn parse_operation_type_definition(
        &mut self,
    ) -> Result<OperationTypeDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        let operation = self.parse_operation_type()?;
        self.expect(TokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(OperationTypeDefinition {
            location: self.loc(start),
            operation,
            named_type,
        })
    }

    fn parse_scalar_type_definition(&mut self) -> Result<ScalarTypeDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(ScalarTypeDefinition {
            location: self.loc(start),
            name,
            directives,
        })
    }

    fn parse_object_type_definition(&mut self) -> Result<ObjectTypeDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )?;
        Ok(ObjectTypeDefinition {
            location: self.loc(start),
            name,
            interfaces,
            directives,
            fields,
        })
    }

    /// `implements A B C`, whitespace separated, consumed for as long
    /// as the lookahead is a name.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<NamedType<'src>>, SyntaxError> {
        let mut interfaces = Vec::new();
        if self.peek_is_keyword("implements") {
            self.consume_token()?;
            loop {
                interfaces.push(self.parse_named_type()?);
                if !self.peek_is(TokenKind::Name) {
                    break;
                }
            }
        }
        Ok(interfaces)
    }

    fn parse_field_definition(&mut self) -> Result<FieldDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect(TokenKind::Colon)?;
        let field_type = self.parse_type()?;
        let directives = self.parse_directives()?;
        Ok(FieldDefinition {
            location: self.loc(start),
            name,
            arguments,
            field_type,
            directives,
        })
    }

    fn parse_arguments_definition(&mut self) -> Result<Vec<InputValueDefinition<'src>>, SyntaxError> {
        if self.peek_is(TokenKind::ParenL) {
            self.many(
                TokenKind::ParenL,
                Self::parse_input_value_definition,
                TokenKind::ParenR,
            )
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_input_value_definition(&mut self) -> Result<InputValueDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let value_type = self.parse_type()?;
        let default_value = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value(true)?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        Ok(InputValueDefinition {
            location: self.loc(start),
            name,
            value_type,
            default_value,
            directives,
        })
    }

    fn parse_interface_type_definition(
        &mut self,
    ) -> Result<InterfaceTypeDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )?;
        Ok(InterfaceTypeDefinition {
            location: self.loc(start),
            name,
            directives,
            fields,
        })
    }

    fn parse_union_type_definition(&mut self) -> Result<UnionTypeDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        self.expect(TokenKind::Equals)?;
        let types = self.parse_union_members()?;
        Ok(UnionTypeDefinition {
            location: self.loc(start),
            name,
            directives,
            types,
        })
    }

    /// `A | B | C` with no leading pipe.
    fn parse_union_members(&mut self) -> Result<Vec<NamedType<'src>>, SyntaxError> {
        let mut members = Vec::new();
        loop {
            members.push(self.parse_named_type()?);
            if !self.skip(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(members)
    }

    fn parse_enum_type_definition(&mut self) -> Result<EnumTypeDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let values = self.many(
            TokenKind::BraceL,
            Self::parse_enum_value_definition,
            TokenKind::BraceR,
        )?;
        Ok(EnumTypeDefinition {
            location: self.loc(start),
            name,
            directives,
            values,
        })
    }

    fn parse_enum_value_definition(&mut self) -> Result<EnumValueDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(EnumValueDefinition {
            location: self.loc(start),
            name,
            directives,
        })
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> Result<InputObjectTypeDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            TokenKind::BraceL,
            Self::parse_input_value_definition,
            TokenKind::BraceR,
        )?;
        Ok(InputObjectTypeDefinition {
            location: self.loc(start),
            name,
            directives,
            fields,
        })
    }

    /// `extend` applies to object type definitions only, so anything
    /// but `type` after it fails with `Expected "type", found ...`.
    fn parse_type_extension_definition(
        &mut self,
    ) -> Result<TypeExtensionDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("extend")?;
        let definition = self.parse_object_type_definition()?;
        Ok(TypeExtensionDefinition {
            location: self.loc(start),
            definition,
        })
    }

    fn parse_directive_definition(&mut self) -> Result<DirectiveDefinition<'src>, SyntaxError> {
        let start = self.token.start;
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments_definition()?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition {
            location: self.loc(start),
            name,
            arguments,
            locations,
        })
    }

    /// `NAME | NAME | ...` with no leading pipe; locations stay plain
    /// names here.
    fn parse_directive_locations(&mut self) -> Result<Vec<Name<'src>>, SyntaxError> {
        let mut locations = Vec::new();
        loop {
            locations.push(self.parse_name()?);
            if !self.skip(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(locations)
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    /// Consumes and returns the current token, lexing the next one
    /// from its end offset.
    fn consume_token(&mut self) -> Result<Token<'src>, SyntaxError> {
        let next = next_token(&self.source, self.token.end)?;
        self.prev_end = self.token.end;
        Ok(std::mem::replace(&mut self.token, next))
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    fn peek_is_keyword(&self, keyword: &str) -> bool {
        self.token.kind == TokenKind::Name && self.token.value.as_deref() == Some(keyword)
    }

    /// The current token's text when it is a name. Name tokens always
    /// borrow from the source, so the returned slice lives for `'src`
    /// and keyword dispatch stays free to call `&mut self` methods.
    fn name_value(&self) -> Option<&'src str> {
        match (self.token.kind, &self.token.value) {
            (TokenKind::Name, Some(Cow::Borrowed(value))) => Some(value),
            _ => None,
        }
    }

    /// Consumes the current token if it has the given kind.
    fn skip(&mut self, kind: TokenKind) -> Result<bool, SyntaxError> {
        if self.token.kind == kind {
            self.consume_token()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes and returns the current token, failing with
    /// `Expected <kind>, found <token>` if it has a different kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, SyntaxError> {
        if self.token.kind == kind {
            self.consume_token()
        } else {
            Err(SyntaxError::new(
                &self.source,
                self.token.start,
                format!("Expected {kind}, found {}", self.token),
            ))
        }
    }

    /// Consumes and returns the current token, failing with
    /// `Expected "<keyword>", found <token>` unless it is a name with
    /// exactly the given text.
    fn expect_keyword(&mut self, keyword: &str) -> Result<Token<'src>, SyntaxError> {
        if self.peek_is_keyword(keyword) {
            self.consume_token()
        } else {
            Err(SyntaxError::new(
                &self.source,
                self.token.start,
                format!("Expected \"{keyword}\", found {}", self.token),
            ))
        }
    }

    /// `open (item)+ close`.
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut parse: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: TokenKind,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect(open)?;
        let mut items = vec![parse(self)?];
        while !self.skip(close)? {
            items.push(parse(self)?);
        }
        Ok(items)
    }

    /// `open (item)* close`.
    fn any<T>(
        &mut self,
        open: TokenKind,
        mut parse: impl FnMut(&mut Self) -> Result<T, SyntaxError>,
        close: TokenKind,
    ) -> Result<Vec<T>, SyntaxError> {
        self.expect(open)?;
        let mut items = Vec::new();
        while !self.skip(close)? {
            items.push(parse(self)?);
        }
        Ok(items)
    }

    /// Span from `start` to the end of the last consumed token.
    fn loc(&self, start: usize) -> Location {
        Location::new(start, self.prev_end)
    }

    fn enter_recursion(&mut self) -> Result<(), SyntaxError> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            return Err(SyntaxError::new(
                &self.source,
                self.token.start,
                "Maximum nesting depth exceeded",
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    fn unexpected_token(&self, token: &Token<'src>) -> SyntaxError {
        SyntaxError::new(&self.source, token.start, format!("Unexpected {token}"))
    }
}
