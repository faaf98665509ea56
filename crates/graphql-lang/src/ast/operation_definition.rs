use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// An operation definition: a query, mutation, or subscription.
///
/// Anonymous operations (`query { ... }` and the shorthand
/// `{ ... }`) have `name: None`; the shorthand additionally has
/// neither variable definitions nor directives by grammar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationDefinition<'src> {
    pub location: Location,
    pub operation: OperationType,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

#[inherent]
impl AstNode for OperationDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
