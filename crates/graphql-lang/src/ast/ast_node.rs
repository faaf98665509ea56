use crate::ast::NodeKind;
use crate::Location;

/// Trait implemented by every AST node type.
///
/// All node types implement this via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed)
/// and a trait bound for generic utilities (diagnostic renderers,
/// AST walkers, and the like).
pub trait AstNode {
    /// The kind tag of this node.
    fn kind(&self) -> NodeKind;

    /// The byte span this node covers in the source text, from its
    /// first token's start to its last token's end.
    fn location(&self) -> Location;
}
