use std::collections::HashMap;

use super::projection::{NodeView, Projection};
use super::scale::{LinearScale, extent, type_color};
use super::state::SelectionState;
use crate::config::ViewerConfig;
use crate::data::{EntityTable, Position};

pub const EDGE_COLOR: &str = "#DDDDDD";
pub const SELECTED_EDGE_COLOR: &str = "#119999";
pub const DIMMED_NODE_COLOR: &str = "#AAAAAA";

/// Data-to-canvas transform. Fitted over the whole table so positions stay
/// put when type filters change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
	pub x: LinearScale,
	pub y: LinearScale,
}

impl CanvasLayout {
	pub fn fit(table: &EntityTable, config: &ViewerConfig) -> Self {
		let xs = extent(table.values().map(|r| r.position.x));
		let ys = extent(table.values().map(|r| r.position.y));
		Self {
			x: LinearScale::new(xs, (1.0, config.width - config.padding * 2.0)),
			y: LinearScale::new(ys, (config.height - config.padding * 2.0, 1.0)),
		}
	}

	pub fn place(&self, p: Position) -> (f64, f64) {
		(self.x.apply(p.x), self.y.apply(p.y))
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeMark {
	pub id: String,
	pub cx: f64,
	pub cy: f64,
	pub r: f64,
	pub fill: String,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeMark {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub stroke: &'static str,
	pub width: f64,
}

/// While a node is hovered every other unselected node is greyed out.
pub fn node_mark(
	node: &NodeView,
	layout: &CanvasLayout,
	selection: &SelectionState,
	hovered: Option<&str>,
	config: &ViewerConfig,
) -> NodeMark {
	let (cx, cy) = layout.place(node.position);
	let selected = selection.is_selected(&node.id);
	let dimmed = hovered.is_some_and(|h| h != node.id) && !selected;
	NodeMark {
		id: node.id.clone(),
		cx,
		cy,
		r: (node.relevance as f64 / config.radius_divisor).max(config.min_node_radius),
		fill: if dimmed {
			DIMMED_NODE_COLOR.to_string()
		} else {
			type_color(node.entity_type)
		},
		selected,
	}
}

#[cfg(test)]
fn node_marks(
	projection: &Projection,
	layout: &CanvasLayout,
	selection: &SelectionState,
	hovered: Option<&str>,
	config: &ViewerConfig,
) -> Vec<NodeMark> {
	projection
		.nodes
		.iter()
		.map(|node| node_mark(node, layout, selection, hovered, config))
		.collect()
}

/// Hover only survives while its node is still drawn.
pub fn retain_hover(hovered: Option<String>, projection: &Projection) -> Option<String> {
	hovered.filter(|id| projection.nodes.iter().any(|n| &n.id == id))
}

/// Edges leaving a selected node are tinted; edges leaving the hovered node
/// are widened.
pub fn edge_marks(
	projection: &Projection,
	layout: &CanvasLayout,
	selection: &SelectionState,
	hovered: Option<&str>,
	config: &ViewerConfig,
) -> Vec<EdgeMark> {
	let placed: HashMap<&str, (f64, f64)> = projection
		.nodes
		.iter()
		.map(|n| (n.id.as_str(), layout.place(n.position)))
		.collect();

	projection
		.edges
		.iter()
		.filter_map(|edge| {
			let &(x1, y1) = placed.get(edge.source.as_str())?;
			let &(x2, y2) = placed.get(edge.destination.as_str())?;
			let divisor = if hovered == Some(edge.source.as_str()) {
				config.hover_edge_width_divisor
			} else {
				config.edge_width_divisor
			};
			Some(EdgeMark {
				x1,
				y1,
				x2,
				y2,
				stroke: if selection.is_selected(&edge.source) {
					SELECTED_EDGE_COLOR
				} else {
					EDGE_COLOR
				},
				width: edge.strength / divisor,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::EntityType;
	use crate::data::fixtures::two_entity_table;

	fn setup() -> (EntityTable, Projection, CanvasLayout, ViewerConfig) {
		let table = two_entity_table();
		let config = ViewerConfig::default();
		let projection = Projection::project(&table, SelectionState::new().selected_types());
		let layout = CanvasLayout::fit(&table, &config);
		(table, projection, layout, config)
	}

	#[test]
	fn layout_spans_the_padded_canvas() {
		let (_, _, layout, _) = setup();
		assert_eq!(layout.place(Position { x: 0.0, y: 0.0 }), (1.0, 720.0));
		assert_eq!(layout.place(Position { x: 1.0, y: 1.0 }), (920.0, 1.0));
	}

	#[test]
	fn nodes_keep_type_colors_without_hover() {
		let (_, projection, layout, config) = setup();
		let marks = node_marks(&projection, &layout, &SelectionState::new(), None, &config);
		assert_eq!(marks.len(), 2);
		assert!(marks.iter().all(|m| m.fill != DIMMED_NODE_COLOR && !m.selected));
		assert_eq!(marks[0].r, config.min_node_radius);
	}

	#[test]
	fn hover_dims_other_unselected_nodes() {
		let (table, projection, layout, config) = setup();
		let mut selection = SelectionState::new();
		let marks = node_marks(&projection, &layout, &selection, Some("A"), &config);
		assert_ne!(marks[0].fill, DIMMED_NODE_COLOR);
		assert_eq!(marks[1].fill, DIMMED_NODE_COLOR);

		selection.toggle_node("B", &table);
		let marks = node_marks(&projection, &layout, &selection, Some("A"), &config);
		assert!(marks[1].selected);
		assert_ne!(marks[1].fill, DIMMED_NODE_COLOR);
	}

	#[test]
	fn hover_is_dropped_when_its_node_is_filtered_out() {
		let (table, _, _, _) = setup();
		let mut selection = SelectionState::new();
		let all = Projection::project(&table, selection.selected_types());
		assert_eq!(retain_hover(Some("B".into()), &all), Some("B".into()));

		selection.toggle_type(EntityType::Org, &table);
		let filtered = Projection::project(&table, selection.selected_types());
		assert_eq!(retain_hover(Some("B".into()), &filtered), None);
		assert_eq!(retain_hover(Some("A".into()), &filtered), Some("A".into()));
		assert_eq!(retain_hover(None, &filtered), None);
	}

	#[test]
	fn edges_follow_selection_and_hover() {
		let (table, projection, layout, config) = setup();
		let mut selection = SelectionState::new();
		selection.toggle_node("A", &table);

		let marks = edge_marks(&projection, &layout, &selection, Some("B"), &config);
		assert_eq!(marks.len(), 2);
		assert_eq!(marks[0].stroke, SELECTED_EDGE_COLOR);
		assert_eq!(marks[0].width, 3.0 / 7.0);
		assert_eq!(marks[1].stroke, EDGE_COLOR);
		assert_eq!(marks[1].width, 1.5);
		assert_eq!((marks[1].x1, marks[1].y1), (920.0, 1.0));
	}
}
