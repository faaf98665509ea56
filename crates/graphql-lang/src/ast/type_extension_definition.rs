use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::ast::ObjectTypeDefinition;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// An `extend type Name { ... }` definition. The extension wraps a
/// complete object type definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeExtensionDefinition<'src> {
    pub location: Location,
    pub definition: ObjectTypeDefinition<'src>,
}

#[inherent]
impl AstNode for TypeExtensionDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::TypeExtensionDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
