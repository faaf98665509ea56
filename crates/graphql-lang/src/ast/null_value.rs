use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A `null` literal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NullValue {
    pub location: Location,
}

#[inherent]
impl AstNode for NullValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NullValue
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
