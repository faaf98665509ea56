use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Type;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// One field declared by an object or interface type, like
/// `friends(first: Int): [Character]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: Type<'src>,
    pub directives: Vec<Directive<'src>>,
}

#[inherent]
impl AstNode for FieldDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
