use std::collections::BTreeSet;

use crate::data::{EntityTable, EntityType};

/// What the user has picked: enabled entity types, clicked nodes, and the
/// documents those nodes pull into the excerpt panel.
///
/// Invariants held after every operation:
/// - every selected node exists in the table and has an enabled type;
/// - `displayed_documents` is the union of the selected nodes' documents,
///   in selection order then document order, without duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
	selected_types: BTreeSet<EntityType>,
	selected_nodes: Vec<String>,
	displayed_documents: Vec<String>,
}

impl Default for SelectionState {
	fn default() -> Self {
		Self {
			selected_types: EntityType::ALL.into_iter().collect(),
			selected_nodes: Vec::new(),
			displayed_documents: Vec::new(),
		}
	}
}

impl SelectionState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn selected_types(&self) -> &BTreeSet<EntityType> {
		&self.selected_types
	}

	pub fn is_type_enabled(&self, ty: EntityType) -> bool {
		self.selected_types.contains(&ty)
	}

	pub fn selected_nodes(&self) -> &[String] {
		&self.selected_nodes
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected_nodes.iter().any(|n| n == id)
	}

	pub fn displayed_documents(&self) -> &[String] {
		&self.displayed_documents
	}

	pub fn toggle_type(&mut self, ty: EntityType, table: &EntityTable) {
		let enabled = !self.is_type_enabled(ty);
		self.set_type_enabled(ty, enabled, table);
	}

	/// Returns whether anything changed.
	pub fn set_type_enabled(&mut self, ty: EntityType, enabled: bool, table: &EntityTable) -> bool {
		let changed = if enabled {
			self.selected_types.insert(ty)
		} else {
			self.selected_types.remove(&ty)
		};
		if changed && !enabled {
			self.reconcile(table);
		}
		changed
	}

	/// Selects or deselects `id`. Ids that are not currently rendered (unknown
	/// or of a disabled type) are ignored. Returns whether anything changed.
	pub fn toggle_node(&mut self, id: &str, table: &EntityTable) -> bool {
		if let Some(pos) = self.selected_nodes.iter().position(|n| n == id) {
			self.selected_nodes.remove(pos);
			self.recompute_documents(table);
			return true;
		}
		let Some(record) = table.get(id) else {
			return false;
		};
		if !self.is_type_enabled(record.entity_type) {
			return false;
		}
		self.selected_nodes.push(id.to_string());
		extend_unique(&mut self.displayed_documents, &record.documents);
		true
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Drops selected nodes that are absent from `table` or whose type is
	/// disabled, then recomputes the displayed documents.
	pub fn reconcile(&mut self, table: &EntityTable) {
		let types = &self.selected_types;
		self.selected_nodes.retain(|id| {
			table
				.get(id)
				.is_some_and(|record| types.contains(&record.entity_type))
		});
		self.recompute_documents(table);
	}

	fn recompute_documents(&mut self, table: &EntityTable) {
		self.displayed_documents.clear();
		for record in self.selected_nodes.iter().filter_map(|id| table.get(id)) {
			extend_unique(&mut self.displayed_documents, &record.documents);
		}
	}
}

fn extend_unique(into: &mut Vec<String>, items: &[String]) {
	for item in items {
		if !into.contains(item) {
			into.push(item.clone());
		}
	}
}
