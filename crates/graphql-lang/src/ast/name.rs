use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;
use std::borrow::Cow;

/// A GraphQL name (identifier): `[_A-Za-z][_0-9A-Za-z]*`.
///
/// Used for operation, field, argument, fragment, directive, and
/// type names, and for enum values. The value always borrows from
/// the source text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Name<'src> {
    pub location: Location,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for Name<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Name
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
