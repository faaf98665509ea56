use serde::Serialize;

/// Kind tag carried by every AST node, one variant per concrete node
/// type.
///
/// Enum nodes ([`Value`](crate::ast::Value),
/// [`Definition`](crate::ast::Definition), ...) report the kind of
/// the variant they hold; there is no tag for the enums themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum NodeKind {
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    Name,
    NamedType,
    ListType,
    NonNullType,
    Directive,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    TypeExtensionDefinition,
    DirectiveDefinition,
}
