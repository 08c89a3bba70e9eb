use std::collections::BTreeSet;

use crate::data::{EntityTable, EntityType, Position};

#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
	pub id: String,
	pub entity_type: EntityType,
	pub position: Position,
	pub relevance: usize,
}

/// Directed co-occurrence edge. A→B and B→A are both emitted when each side
/// lists the other; emphasis is keyed on `source`.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeView {
	pub source: String,
	pub destination: String,
	pub strength: f64,
}

/// Nodes and edges visible under the current type filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
	pub nodes: Vec<NodeView>,
	pub edges: Vec<EdgeView>,
}

impl Projection {
	pub fn project(table: &EntityTable, types: &BTreeSet<EntityType>) -> Self {
		Self {
			nodes: visible_nodes(table, types),
			edges: visible_edges(table, types),
		}
	}
}

pub fn visible_nodes(table: &EntityTable, types: &BTreeSet<EntityType>) -> Vec<NodeView> {
	table
		.iter()
		.filter(|(_, record)| types.contains(&record.entity_type))
		.map(|(id, record)| NodeView {
			id: id.clone(),
			entity_type: record.entity_type,
			position: record.position,
			relevance: record.relevance(),
		})
		.collect()
}

/// Edges whose related entity is missing from the table are dropped.
pub fn visible_edges(table: &EntityTable, types: &BTreeSet<EntityType>) -> Vec<EdgeView> {
	let is_visible = &|id: &str| {
		table
			.get(id)
			.is_some_and(|record| types.contains(&record.entity_type))
	};

	table
		.iter()
		.filter(|(id, _)| is_visible(id))
		.flat_map(|(id, record)| {
			record
				.co_occurrence
				.iter()
				.filter(move |(related, _)| is_visible(related))
				.map(move |(related, &strength)| EdgeView {
					source: id.clone(),
					destination: related.clone(),
					strength,
				})
		})
		.collect()
}
