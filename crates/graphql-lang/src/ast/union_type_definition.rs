use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A `union Name = A | B | C` definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionTypeDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub types: Vec<NamedType<'src>>,
}

#[inherent]
impl AstNode for UnionTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::UnionTypeDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
