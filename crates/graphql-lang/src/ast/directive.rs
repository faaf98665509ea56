use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A directive annotation: `@name(args)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Directive<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Directive
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
