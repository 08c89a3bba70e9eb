pub mod entity_graph;
pub mod excerpts;
pub mod type_filter;
