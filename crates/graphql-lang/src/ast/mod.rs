//! AST node types for parsed GraphQL documents.
//!
//! All node types are plain value types parameterized over a `'src`
//! lifetime, borrowing string data from the source text via
//! `Cow<'src, str>` wherever the text did not need decoding. A
//! [`Document`] exclusively owns its subtree; no node outlives it.
//!
//! Every node carries a [`Location`](crate::Location) byte span and a
//! [`NodeKind`] tag, exposed uniformly through the [`AstNode`] trait
//! (implemented with `#[inherent]`, so the methods are callable
//! without importing the trait). Spans stay valid against the
//! original [`Source`](crate::Source) for later diagnostics by
//! validators and executors.
//!
//! Type-system definitions (`schema`, `type`, `directive`, ...) are
//! represented structurally only; nothing here interprets them
//! semantically.

mod argument;
mod ast_node;
mod boolean_value;
mod directive;
mod directive_definition;
mod document;
mod enum_type_definition;
mod enum_value;
mod enum_value_definition;
mod field;
mod field_definition;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_object_type_definition;
mod input_value_definition;
mod int_value;
mod interface_type_definition;
mod list_value;
mod name;
mod node_kind;
mod null_value;
mod object_field;
mod object_type_definition;
mod object_value;
mod operation_definition;
mod operation_type;
mod scalar_type_definition;
mod schema_definition;
mod selection_set;
mod string_value;
mod type_extension_definition;
mod type_reference;
mod union_type_definition;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use boolean_value::BooleanValue;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use document::Definition;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_value::EnumValue;
pub use enum_value_definition::EnumValueDefinition;
pub use field::Field;
pub use field_definition::FieldDefinition;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use int_value::IntValue;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use list_value::ListValue;
pub use name::Name;
pub use node_kind::NodeKind;
pub use null_value::NullValue;
pub use object_field::ObjectField;
pub use object_type_definition::ObjectTypeDefinition;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use schema_definition::OperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_extension_definition::TypeExtensionDefinition;
pub use type_reference::ListType;
pub use type_reference::NamedType;
pub use type_reference::NonNullType;
pub use type_reference::NullableType;
pub use type_reference::Type;
pub use union_type_definition::UnionTypeDefinition;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;
