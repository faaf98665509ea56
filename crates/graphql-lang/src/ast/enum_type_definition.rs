use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// An `enum Name { VALUES }` definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumTypeDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

#[inherent]
impl AstNode for EnumTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
