use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;
use std::borrow::Cow;

/// An enum value literal: any name that is not `true`, `false`, or
/// `null`. Whether it names a real enum member is a validation
/// concern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumValue<'src> {
    pub location: Location,
    pub value: Cow<'src, str>,
}

#[inherent]
impl AstNode for EnumValue<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValue
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
