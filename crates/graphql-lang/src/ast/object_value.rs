use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::ast::ObjectField;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A braced input object literal. May be empty, unlike a selection
/// set; duplicate field names are legal at parse time and left for
/// validation to flag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectValue<'src> {
    pub location: Location,
    pub fields: Vec<ObjectField<'src>>,
}

#[inherent]
impl AstNode for ObjectValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectValue
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
