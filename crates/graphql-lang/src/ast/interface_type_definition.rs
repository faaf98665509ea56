use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// An `interface Name { fields }` definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InterfaceTypeDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

#[inherent]
impl AstNode for InterfaceTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InterfaceTypeDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
