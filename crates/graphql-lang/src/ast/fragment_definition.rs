use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A named fragment definition:
/// `fragment Name on Type @directives { ... }`.
///
/// The name is never the keyword `on` (the parser rejects it), and
/// the type condition is mandatory here, unlike on inline fragments.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub type_condition: NamedType<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
