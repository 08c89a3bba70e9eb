use leptos::prelude::*;

use crate::components::entity_graph::SelectionState;
use crate::data::EntityType;

/// One checkbox per entity type plus the session controls.
#[component]
pub fn TypeFilter(
	#[prop(into)] selection: Signal<SelectionState>,
	on_change: Callback<(EntityType, bool)>,
	on_reset: Callback<()>,
	on_reload: Callback<()>,
) -> impl IntoView {
	let checkboxes = EntityType::ALL
		.into_iter()
		.map(|ty| {
			let input_id = format!("entity-type-{}", ty.as_str());
			view! {
				<div class="flex-item">
					<input
						type="checkbox"
						class="entities"
						id=input_id.clone()
						name="entity-type"
						value=ty.as_str()
						prop:checked=move || selection.with(|s| s.is_type_enabled(ty))
						on:change=move |ev| on_change.run((ty, event_target_checked(&ev)))
					/>
					<label for=input_id>{ty.label()}</label>
				</div>
			}
		})
		.collect_view();

	view! {
		<div id="select-type" class="type-filter">
			{checkboxes}
		</div>
		<div class="controls">
			<button id="clear" on:click=move |_| on_reset.run(())>
				"START OVER"
			</button>
			<button id="reload" on:click=move |_| on_reload.run(())>
				"Reload data"
			</button>
		</div>
	}
}
