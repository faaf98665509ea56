use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A `type Name implements ... { fields }` definition.
///
/// ```graphql
/// type Human implements Character {
///   id: String!
///   friends: [Character]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectTypeDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}

#[inherent]
impl AstNode for ObjectTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectTypeDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
