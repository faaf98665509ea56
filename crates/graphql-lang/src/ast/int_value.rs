use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;
use std::borrow::Cow;

/// An integer literal, kept as its raw source text (`"42"`,
/// `"-7"`). Numeric range and conversion are the consumer's
/// concern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntValue<'src> {
    pub location: Location,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for IntValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::IntValue
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
