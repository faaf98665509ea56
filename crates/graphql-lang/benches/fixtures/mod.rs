pub const SIMPLE_QUERY: &str = include_str!("simple_query.graphql");
pub const KITCHEN_SINK: &str = include_str!("kitchen_sink.graphql");
pub const STARWARS_SCHEMA: &str = include_str!("starwars_schema.graphql");

pub mod operations;
