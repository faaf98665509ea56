use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::NodeKind;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Variable;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// An input value literal or variable reference.
///
/// Numbers keep their raw literal text (no numeric conversion is
/// done at parse time); strings carry decoded contents. In const
/// positions (variable-definition defaults) the `Variable` variant
/// cannot occur; the parser rejects `$` there.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Variable(v) => v.kind(),
            Value::Int(v) => v.kind(),
            Value::Float(v) => v.kind(),
            Value::String(v) => v.kind(),
            Value::Boolean(v) => v.kind(),
            Value::Null(v) => v.kind(),
            Value::Enum(v) => v.kind(),
            Value::List(v) => v.kind(),
            Value::Object(v) => v.kind(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Value::Variable(v) => v.location(),
            Value::Int(v) => v.location(),
            Value::Float(v) => v.location(),
            Value::String(v) => v.location(),
            Value::Boolean(v) => v.location(),
            Value::Null(v) => v.location(),
            Value::Enum(v) => v.location(),
            Value::List(v) => v.location(),
            Value::Object(v) => v.location(),
        }
    }
}
