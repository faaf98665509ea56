use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;
use crate::Location;
use inherent::inherent;
use serde::Serialize;

/// A field selection: `alias: name(args) @directives { ... }`, where
/// everything but the name is optional.
///
/// `response_key` is the name a response object would use for this
/// field: the alias when present, the field name otherwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field<'src> {
    pub location: Location,
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
}

impl<'src> Field<'src> {
    pub fn response_key(&self) -> &Name<'src> {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Field
    }

    pub fn location(&self) -> Location {
        self.location
    }
}
