use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Value;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// One `name: value` entry of an [`ObjectValue`](crate::ast::ObjectValue).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectField<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for ObjectField<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectField
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
