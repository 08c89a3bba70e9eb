use std::sync::Arc;

use leptos::prelude::*;

use super::projection::{NodeView, Projection};
use super::render::{CanvasLayout, EdgeMark, edge_marks, node_mark, retain_hover};
use super::state::SelectionState;
use crate::config::ViewerConfig;
use crate::data::Dataset;

fn draw_edge(mark: EdgeMark) -> impl IntoView {
	view! {
		<line
			x1=mark.x1.to_string()
			y1=mark.y1.to_string()
			x2=mark.x2.to_string()
			y2=mark.y2.to_string()
			stroke=mark.stroke
			stroke-width=mark.width.to_string()
		/>
	}
}

/// One circle per visible entity. The element lives as long as the entity
/// stays visible; only fill and class follow hover and selection.
fn draw_node(
	node: NodeView,
	layout: CanvasLayout,
	config: ViewerConfig,
	selection: Signal<SelectionState>,
	hovered: RwSignal<Option<String>>,
	on_node_click: Callback<String>,
) -> impl IntoView {
	let opacity = config.node_opacity;
	let mark = Memo::new(move |_| {
		let hovered = hovered.get();
		selection.with(|s| node_mark(&node, &layout, s, hovered.as_deref(), &config))
	});
	let (id, cx, cy, r) = mark.with_untracked(|m| (m.id.clone(), m.cx, m.cy, m.r));
	let (id_hover, id_click) = (id.clone(), id.clone());

	view! {
		<circle
			class=move || if mark.with(|m| m.selected) { "selected" } else { "" }
			cx=cx.to_string()
			cy=cy.to_string()
			r=r.to_string()
			fill=move || mark.with(|m| m.fill.clone())
			opacity=opacity.to_string()
			on:mouseenter=move |_| hovered.set(Some(id_hover.clone()))
			on:mouseleave=move |_| hovered.set(None)
			on:click=move |_| on_node_click.run(id_click.clone())
		>
			<title>{id}</title>
		</circle>
	}
}

/// Scatter-style entity graph at the table's precomputed coordinates.
///
/// The SVG container is built once per dataset. Edges are cleared and redrawn
/// on every change; node circles are keyed by entity id.
#[component]
pub fn EntityGraphSvg(
	dataset: Arc<Dataset>,
	#[prop(into)] selection: Signal<SelectionState>,
	on_node_click: Callback<String>,
) -> impl IntoView {
	let config = use_context::<ViewerConfig>().unwrap_or_default();
	let layout = CanvasLayout::fit(&dataset.entities, &config);
	let hovered = RwSignal::new(None::<String>);

	let projection = Memo::new(move |_| {
		selection.with(|s| Projection::project(&dataset.entities, s.selected_types()))
	});

	// A node filtered out from under the pointer never sees `mouseleave`.
	Effect::new(move |_| {
		projection.with(|p| {
			let current = hovered.get_untracked();
			if current.is_some() {
				let kept = retain_hover(current.clone(), p);
				if kept != current {
					hovered.set(kept);
				}
			}
		});
	});

	let edge_config = config.clone();
	let edges = move || {
		let hovered = hovered.get();
		let marks = projection.with(|p| {
			selection.with(|s| edge_marks(p, &layout, s, hovered.as_deref(), &edge_config))
		});
		marks.into_iter().map(draw_edge).collect_view()
	};

	let node_config = config.clone();

	view! {
		<svg
			id="plot-1"
			class="entity-graph"
			x="0"
			y="0"
			width=config.outer_width().to_string()
			height=config.outer_height().to_string()
		>
			<g transform=format!("translate({}, {})", config.padding, config.padding)>
				<g class="links">{edges}</g>
				<g class="nodes">
					<For
						each=move || projection.with(|p| p.nodes.clone())
						key=|node: &NodeView| node.id.clone()
						children=move |node: NodeView| {
							draw_node(
								node,
								layout,
								node_config.clone(),
								selection,
								hovered,
								on_node_click,
							)
						}
					/>
				</g>
			</g>
		</svg>
	}
}
