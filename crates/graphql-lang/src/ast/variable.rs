use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A variable reference: `$name`. The location covers the dollar
/// sign and the name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Variable<'src> {
    pub location: Location,
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for Variable<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Variable
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
