use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

// =============================================================================
// Type
// =============================================================================

/// A type reference, as written after a colon in variable and field
/// definitions: `Foo`, `[Foo]`, `Foo!`, `[Foo!]!`, and so on.
///
/// Non-null wraps a [`NullableType`], never another non-null, so
/// `Int!!` is unrepresentable here and rejected by the grammar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
    NonNull(NonNullType<'src>),
}

#[inherent]
impl AstNode for Type<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Type::Named(t) => t.kind(),
            Type::List(t) => t.kind(),
            Type::NonNull(t) => t.kind(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Type::Named(t) => t.location(),
            Type::List(t) => t.location(),
            Type::NonNull(t) => t.location(),
        }
    }
}

impl<'src> From<NullableType<'src>> for Type<'src> {
    fn from(nullable: NullableType<'src>) -> Self {
        match nullable {
            NullableType::Named(t) => Type::Named(t),
            NullableType::List(t) => Type::List(t),
        }
    }
}

// =============================================================================
// NamedType
// =============================================================================

/// A plain type name, also used on its own where the grammar allows
/// only names (type conditions, implements lists, union members).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedType<'src> {
    pub location: Location,
    pub name: Name<'src>,
}

#[inherent]
impl AstNode for NamedType<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NamedType
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

// =============================================================================
// ListType
// =============================================================================

/// A list wrapper: `[Type]`. The location covers the brackets.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListType<'src> {
    pub location: Location,
    pub wrapped: Box<Type<'src>>,
}

#[inherent]
impl AstNode for ListType<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ListType
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

// =============================================================================
// NonNullType
// =============================================================================

/// A non-null wrapper: `Type!`. The location covers the wrapped
/// type and the bang.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NonNullType<'src> {
    pub location: Location,
    pub wrapped: NullableType<'src>,
}

#[inherent]
impl AstNode for NonNullType<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NonNullType
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

/// What a [`NonNullType`] may wrap: a named or list type, by
/// construction never another non-null.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum NullableType<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
}

#[inherent]
impl AstNode for NullableType<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NullableType::Named(t) => t.kind(),
            NullableType::List(t) => t.kind(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            NullableType::Named(t) => t.location(),
            NullableType::List(t) => t.location(),
        }
    }
}
