use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A fragment spread: `...FragmentName @directives`. The name is
/// never the keyword `on`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentSpread<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentSpread
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
