use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// One value declared inside an enum type definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumValueDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

#[inherent]
impl AstNode for EnumValueDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
