use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// An `input Name { fields }` definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputObjectTypeDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}

#[inherent]
impl AstNode for InputObjectTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputObjectTypeDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
