use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::Type;
use crate::ast::Value;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// An input value declaration, used both for field arguments and for
/// the fields of input object types: `name: Type = default`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputValueDefinition<'src> {
    pub location: Location,
    pub name: Name<'src>,
    pub value_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
}

#[inherent]
impl AstNode for InputValueDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
