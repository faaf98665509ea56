//! Lexing and parsing for the GraphQL query language.
//!
//! This crate turns GraphQL source text into a typed, location-carrying
//! AST: executable documents (operations and fragments), type system
//! documents (`schema`, `type`, `directive`, ...), and documents mixing
//! both. It is a front end only; validation and execution live with the
//! embedding application.
//!
//! The pieces compose bottom-up and each is usable on its own:
//!
//! - [`Source`] wraps the input text and maps byte offsets to 1-based
//!   line and UTF-16 column pairs.
//! - [`next_token`] is a stateless lexer: `(source, offset)` to the
//!   next [`Token`], resumable from any token boundary.
//! - [`Parser`] builds the [`ast`] tree, failing fast on the first
//!   error.
//! - [`SyntaxError`] carries the offending offset and formats the
//!   classic `Syntax Error GraphQL (line:column)` message with a
//!   caret-annotated excerpt of the source.
//!
//! ```
//! use graphql_lang::ast::Definition;
//!
//! let document = graphql_lang::parse("{ hero { name } }")?;
//! assert!(matches!(document.definitions[0], Definition::Operation(_)));
//! # Ok::<(), graphql_lang::SyntaxError>(())
//! ```
//!
//! Errors point at the exact offset, line, and column:
//!
//! ```
//! let error = graphql_lang::parse("{ hero { name }").unwrap_err();
//! assert_eq!((error.line(), error.column()), (1, 16));
//! assert!(error.message().starts_with(
//!     "Syntax Error GraphQL (1:16) Expected Name, found EOF",
//! ));
//! ```

pub mod ast;
mod lexer;
mod location;
mod parser;
mod source;
mod syntax_error;
mod token;

pub use lexer::next_token;
pub use location::Location;
pub use parser::Parser;
pub use source::Source;
pub use syntax_error::highlight_source_at;
pub use syntax_error::SyntaxError;
pub use token::Token;
pub use token::TokenKind;

use ast::Document;

/// Parses a complete GraphQL document.
///
/// Shorthand for [`Parser::new`] followed by
/// [`parse_document`](Parser::parse_document).
pub fn parse<'src, S>(text: &'src S) -> Result<Document<'src>, SyntaxError>
where
    S: AsRef<str> + ?Sized,
{
    Parser::new(text)?.parse_document()
}

#[cfg(test)]
mod tests;
