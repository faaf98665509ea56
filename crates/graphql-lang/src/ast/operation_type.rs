use serde::Serialize;

/// The three operation types of the query language.
///
/// Shorthand documents (`{ field }`) parse as
/// [`Query`](OperationType::Query) with no name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// The source keyword for this operation type.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}
