use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A `scalar Name` type definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalarTypeDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

#[inherent]
impl AstNode for ScalarTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ScalarTypeDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
