use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::NodeKind;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A braced selection set: `{ Selection+ }`.
///
/// Non-empty by grammar; `{}` is a parse error. The location covers
/// both braces.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionSet<'src> {
    pub location: Location,
    pub selections: Vec<Selection<'src>>,
}

#[inherent]
impl AstNode for SelectionSet<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SelectionSet
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

/// One entry of a [`SelectionSet`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Selection::Field(s) => s.kind(),
            Selection::FragmentSpread(s) => s.kind(),
            Selection::InlineFragment(s) => s.kind(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Selection::Field(s) => s.location(),
            Selection::FragmentSpread(s) => s.location(),
            Selection::InlineFragment(s) => s.location(),
        }
    }
}
