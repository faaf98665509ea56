use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// An inline fragment: `... on Type @directives { ... }`. The type
/// condition may be absent (`... @directives { ... }`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InlineFragment<'src> {
    pub location: Location,
    pub type_condition: Option<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
}

#[inherent]
impl AstNode for InlineFragment<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InlineFragment
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
