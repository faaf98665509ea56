use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::NodeKind;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

// =============================================================================
// Document
// =============================================================================

/// Root AST node of a parsed document.
///
/// A document is one or more [`Definition`]s; executable definitions
/// (operations and fragments) and type-system definitions may mix
/// freely at the syntax level. Which mixtures are *meaningful* is a
/// validation concern and none of this crate's business.
///
/// The document exclusively owns its entire subtree: dropping it
/// drops every node, and no node can outlive it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document<'src> {
    pub location: Location,
    pub definitions: Vec<Definition<'src>>,
}

impl<'src> Document<'src> {
    /// Iterates over only the executable definitions (operations and
    /// fragments).
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions
            .iter()
            .filter(|d| matches!(d, Definition::Operation(_) | Definition::Fragment(_)))
    }

    /// Iterates over only the type-system definitions.
    pub fn type_system_definitions(&self) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions
            .iter()
            .filter(|d| !matches!(d, Definition::Operation(_) | Definition::Fragment(_)))
    }
}

#[inherent]
impl AstNode for Document<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Document
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

// =============================================================================
// Definition
// =============================================================================

/// A top-level definition in a [`Document`].
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
    Schema(SchemaDefinition<'src>),
    ScalarType(ScalarTypeDefinition<'src>),
    ObjectType(ObjectTypeDefinition<'src>),
    InterfaceType(InterfaceTypeDefinition<'src>),
    UnionType(UnionTypeDefinition<'src>),
    EnumType(EnumTypeDefinition<'src>),
    InputObjectType(InputObjectTypeDefinition<'src>),
    TypeExtension(TypeExtensionDefinition<'src>),
    Directive(DirectiveDefinition<'src>),
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Definition::Operation(d) => d.kind(),
            Definition::Fragment(d) => d.kind(),
            Definition::Schema(d) => d.kind(),
            Definition::ScalarType(d) => d.kind(),
            Definition::ObjectType(d) => d.kind(),
            Definition::InterfaceType(d) => d.kind(),
            Definition::UnionType(d) => d.kind(),
            Definition::EnumType(d) => d.kind(),
            Definition::InputObjectType(d) => d.kind(),
            Definition::TypeExtension(d) => d.kind(),
            Definition::Directive(d) => d.kind(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Definition::Operation(d) => d.location(),
            Definition::Fragment(d) => d.location(),
            Definition::Schema(d) => d.location(),
            Definition::ScalarType(d) => d.location(),
            Definition::ObjectType(d) => d.location(),
            Definition::InterfaceType(d) => d.location(),
            Definition::UnionType(d) => d.location(),
            Definition::EnumType(d) => d.location(),
            Definition::InputObjectType(d) => d.location(),
            Definition::TypeExtension(d) => d.location(),
            Definition::Directive(d) => d.location(),
        }
    }
}
