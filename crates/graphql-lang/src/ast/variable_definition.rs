use crate::ast::AstNode;
use crate::ast::NodeKind;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A variable definition in an operation's parenthesized list:
/// `$name: Type` with an optional `= default`. Default values are
/// const values (no variable references inside).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableDefinition<'src> {
    pub location: Location,
    pub variable: Variable<'src>,
    pub var_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
}

#[inherent]
impl AstNode for VariableDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::VariableDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
