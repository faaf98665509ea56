use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A `schema { ... }` definition naming the root operation types.
///
/// ```graphql
/// schema {
///   query: QueryRoot
///   mutation: MutationRoot
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaDefinition<'src> {
    pub location: Location,
    pub directives: Vec<Directive<'src>>,
    pub operation_types: Vec<OperationTypeDefinition<'src>>,
}

#[inherent]
impl AstNode for SchemaDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SchemaDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

/// One `query: QueryRoot` entry inside a schema definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationTypeDefinition<'src> {
    pub location: Location,
    pub operation: OperationType,
    pub named_type: NamedType<'src>,
}

#[inherent]
impl AstNode for OperationTypeDefinition<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationTypeDefinition
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
