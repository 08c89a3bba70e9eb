use std::collections::BTreeMap;

use super::types::{EntityRecord, EntityTable, EntityType, Position};

pub(crate) fn record(
	ty: EntityType,
	docs: &[&str],
	related: &[(&str, f64)],
	x: f64,
	y: f64,
) -> EntityRecord {
	EntityRecord {
		entity_type: ty,
		documents: docs.iter().map(|d| d.to_string()).collect(),
		co_occurrence: related
			.iter()
			.map(|(id, s)| (id.to_string(), *s))
			.collect::<BTreeMap<_, _>>(),
		position: Position { x, y },
	}
}

/// `A` (person) and `B` (org) co-occur in doc1; B also appears in doc2.
pub(crate) fn two_entity_table() -> EntityTable {
	let mut table = EntityTable::new();
	table.insert(
		"A".into(),
		record(EntityType::Person, &["doc1"], &[("B", 3.0)], 0.0, 0.0),
	);
	table.insert(
		"B".into(),
		record(EntityType::Org, &["doc1", "doc2"], &[("A", 3.0)], 1.0, 1.0),
	);
	table
}
