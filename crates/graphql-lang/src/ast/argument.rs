use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Value;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A `name: value` argument of a field or directive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Argument<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub value: Value<'src>,
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Argument
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
