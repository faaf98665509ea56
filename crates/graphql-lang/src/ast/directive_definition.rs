use crate::ast::AstNode;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A `directive @name(args) on LOCATIONS` definition.
///
/// Locations are kept as plain names; validating them against the
/// known set of directive locations is a later concern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectiveDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub locations: Vec<Name<'src>>,
}

#[inherent]
impl AstNode for DirectiveDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::DirectiveDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
