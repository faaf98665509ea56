//! Shared helpers for the crate's test modules.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::Source;
use crate::SyntaxError;
use crate::Token;
use crate::TokenKind;

/// Parses `source`, panicking with the formatted error on failure.
pub(super) fn parse_document(source: &str) -> Document<'_> {
    match crate::parse(source) {
        Ok(document) => document,
        Err(error) => panic!("expected {source:?} to parse, got:\n{error}"),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub(super) fn parse_error(source: &str) -> SyntaxError {
    match crate::parse(source) {
        Ok(document) => panic!("expected {source:?} to fail, got: {document:?}"),
        Err(error) => error,
    }
}

/// Parses `source` expecting failure and checks the reported line,
/// column, and description, plus the standard message header built
/// from them.
pub(super) fn assert_syntax_error(source: &str, line: usize, column: usize, description: &str) {
    let error = parse_error(source);
    assert_eq!(error.line(), line, "line for {source:?}");
    assert_eq!(error.column(), column, "column for {source:?}");
    assert_eq!(error.description(), description, "description for {source:?}");
    let header = format!("Syntax Error GraphQL ({line}:{column}) {description}\n");
    assert!(
        error.message().starts_with(&header),
        "message for {source:?} should start with {header:?}, got:\n{}",
        error.message(),
    );
}

/// Parses `source` and returns the first definition as an operation.
///
/// # Panics
/// Panics if parsing fails or the first definition is not an
/// operation.
pub(super) fn extract_operation(source: &str) -> OperationDefinition<'_> {
    let document = parse_document(source);
    match document.definitions.into_iter().next() {
        Some(Definition::Operation(operation)) => operation,
        other => panic!("Expected operation definition, got: {other:?}"),
    }
}

/// Parses `source` and returns the first definition as a fragment
/// definition.
///
/// # Panics
/// Panics if parsing fails or the first definition is not a fragment.
pub(super) fn extract_fragment(source: &str) -> FragmentDefinition<'_> {
    let document = parse_document(source);
    match document.definitions.into_iter().next() {
        Some(Definition::Fragment(fragment)) => fragment,
        other => panic!("Expected fragment definition, got: {other:?}"),
    }
}

/// The first selection of `selection_set`, which must be a field.
pub(super) fn first_field<'a, 'src>(selection_set: &'a SelectionSet<'src>) -> &'a Field<'src> {
    match selection_set.selections.first() {
        Some(Selection::Field(field)) => field,
        other => panic!("Expected field selection, got: {other:?}"),
    }
}

/// The value of the first argument of `field`.
pub(super) fn first_arg_value<'a, 'src>(field: &'a Field<'src>) -> &'a Value<'src> {
    match field.arguments.first() {
        Some(argument) => &argument.value,
        None => panic!("Expected an argument on field {:?}", field.name.value),
    }
}

/// Parses `source` and returns the value of the first argument of the
/// first field, as in `{ f(arg: <value>) }`.
pub(super) fn extract_value(source: &str) -> Value<'_> {
    let operation = extract_operation(source);
    let field = first_field(&operation.selection_set);
    first_arg_value(field).clone()
}

/// Lexes all of `source` from offset zero, returning every token up to
/// and including `Eof`.
///
/// # Panics
/// Panics if any token fails to lex.
pub(super) fn lex_all(source: &str) -> Vec<Token<'_>> {
    let source = Source::new(source);
    let mut tokens = Vec::new();
    let mut position = 0;
    loop {
        let token = match crate::next_token(&source, position) {
            Ok(token) => token,
            Err(error) => panic!("expected {:?} to lex, got:\n{error}", source.text()),
        };
        position = token.end;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Kinds of [`lex_all`]'s tokens, without the trailing `Eof`.
pub(super) fn lex_kinds(source: &str) -> Vec<TokenKind> {
    let mut kinds: Vec<TokenKind> = lex_all(source).iter().map(|token| token.kind).collect();
    assert_eq!(kinds.pop(), Some(TokenKind::Eof));
    kinds
}

/// Removes every `"location"` key, recursively, from a serialized AST.
/// Lets tests compare structure across inputs that differ only in
/// ignored characters.
pub(super) fn strip_locations(json: &mut serde_json::Value) {
    match json {
        serde_json::Value::Object(map) => {
            map.remove("location");
            for value in map.values_mut() {
                strip_locations(value);
            }
        }
        serde_json::Value::Array(values) => {
            for value in values {
                strip_locations(value);
            }
        }
        _ => {}
    }
}
