use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;
use std::borrow::Cow;

/// A float literal, kept as its raw source text (`"1.5"`,
/// `"6.02e23"`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloatValue<'src> {
    pub location: Location,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for FloatValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FloatValue
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
