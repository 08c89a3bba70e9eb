use std::sync::Arc;

use leptos::prelude::*;

use super::highlight::{Excerpt, Segment, build_excerpts};
use crate::components::entity_graph::{SelectionState, type_color};
use crate::data::Dataset;

fn render_segment(segment: Segment) -> AnyView {
	match segment {
		Segment::Plain(text) => text.into_any(),
		Segment::Highlight { text, entity_type } => view! {
			<span class="highlight" style:background-color=type_color(entity_type)>
				{text}
			</span>
		}
		.into_any(),
	}
}

fn render_excerpt(excerpt: Excerpt) -> impl IntoView {
	let Excerpt { document, segments } = excerpt;
	let id = document.clone();
	view! {
		<div class="embed embedder flex-item">
			<h2 class="embed embedded" id=id>
				{document}
			</h2>
			<p class="embed embedded">
				{segments.into_iter().map(render_segment).collect_view()}
			</p>
		</div>
	}
}

/// Documents of the selected entities with those entities highlighted.
#[component]
pub fn ExcerptPanel(
	dataset: Arc<Dataset>,
	#[prop(into)] selection: Signal<SelectionState>,
) -> impl IntoView {
	let excerpts = Memo::new(move |_| {
		selection.with(|s| {
			build_excerpts(
				s.displayed_documents(),
				s.selected_nodes(),
				&dataset.entities,
				&dataset.documents,
			)
		})
	});

	view! {
		<div id="doc-view" class="doc-view">
			{move || {
				let excerpts = excerpts.get();
				if excerpts.is_empty() {
					view! { <p class="hint">"Click an entity to show the documents it appears in."</p> }
						.into_any()
				} else {
					excerpts.into_iter().map(render_excerpt).collect_view().into_any()
				}
			}}
		</div>
	}
}
