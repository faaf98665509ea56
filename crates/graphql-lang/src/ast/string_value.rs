use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;
use std::borrow::Cow;

/// A string literal with escapes decoded.
///
/// `block` is `true` for triple-quoted strings, whose value has
/// additionally been through indent stripping and blank-edge
/// trimming. The location always covers the quotes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StringValue<'src> {
    pub location: Location,
    pub value: Cow<'src, str>,
    pub block: bool,
}

#[inherent]
impl AstNode for StringValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::StringValue
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
