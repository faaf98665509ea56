use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A `true` or `false` literal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BooleanValue {
    pub location: Location,
    pub value: bool,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::BooleanValue
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
