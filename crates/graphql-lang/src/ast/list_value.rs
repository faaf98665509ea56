use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::ast::Value;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A bracketed list of values. May be empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListValue<'src> {
    pub location: Location,
    pub values: Vec<Value<'src>>,
}

#[inherent]
impl AstNode for ListValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ListValue
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
