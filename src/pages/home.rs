use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info, warn};

use crate::components::entity_graph::{EntityGraphSvg, SelectionState};
use crate::components::excerpts::ExcerptPanel;
use crate::components::type_filter::TypeFilter;
use crate::config::ViewerConfig;
use crate::data::{DataError, Dataset, EntityType, LoadGeneration, load_dataset};

#[derive(Clone, Debug)]
enum LoadState {
	Loading,
	Ready(Arc<Dataset>),
	Failed(DataError),
}

/// How a finished load changes the page.
#[derive(Debug)]
enum Settled {
	/// New dataset replaces whatever is shown.
	Loaded(Arc<Dataset>),
	/// Reload failed; the dataset on screen stays and the error is reported beside it.
	Kept(DataError),
	/// Nothing to fall back on.
	Failed(DataError),
}

impl LoadState {
	fn settle(&self, result: Result<Dataset, DataError>) -> Settled {
		match (result, self) {
			(Ok(dataset), _) => Settled::Loaded(Arc::new(dataset)),
			(Err(e), LoadState::Ready(_)) => Settled::Kept(e),
			(Err(e), _) => Settled::Failed(e),
		}
	}
}

/// Graph, type filter and excerpts over one loaded dataset.
#[component]
fn Explorer(
	dataset: Arc<Dataset>,
	selection: RwSignal<SelectionState>,
	#[prop(into)] last_error: Signal<Option<DataError>>,
	on_reload: Callback<()>,
) -> impl IntoView {
	let table = StoredValue::new(dataset.clone());

	let on_type_change = Callback::new(move |(ty, enabled): (EntityType, bool)| {
		table.with_value(|d| {
			selection.update(|s| {
				if s.set_type_enabled(ty, enabled, &d.entities) {
					debug!("type {} enabled={}, {} nodes selected", ty, enabled, s.selected_nodes().len());
				}
			});
		});
	});

	let on_node_click = Callback::new(move |id: String| {
		table.with_value(|d| {
			selection.update(|s| {
				if s.toggle_node(&id, &d.entities) {
					debug!("toggled {:?}, {} documents displayed", id, s.displayed_documents().len());
				}
			});
		});
	});

	let on_reset = Callback::new(move |_: ()| {
		debug!("selection reset");
		selection.update(SelectionState::reset);
	});

	view! {
		<div class="controls-panel">
			<TypeFilter selection on_change=on_type_change on_reset on_reload />
			{move || {
				last_error
					.get()
					.map(|e| view! { <p class="load-error">"Reload failed: " {e.to_string()}</p> })
			}}
		</div>
		<div id="container-vis-1" class="graph-panel">
			<EntityGraphSvg dataset=dataset.clone() selection on_node_click />
		</div>
		<ExcerptPanel dataset selection />
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<ViewerConfig>().unwrap_or_default();
	let load = RwSignal::new(LoadState::Loading);
	let selection = RwSignal::new(SelectionState::new());
	let last_error = RwSignal::new(None::<DataError>);
	let generation = StoredValue::new(LoadGeneration::default());

	let reload = Callback::new(move |_: ()| {
		let mut ticket = 0;
		generation.update_value(|g| ticket = g.begin());
		if matches!(load.get_untracked(), LoadState::Failed(_)) {
			load.set(LoadState::Loading);
		}
		let config = config.clone();

		spawn_local(async move {
			let result = load_dataset(&config).await;
			if !generation.with_value(|g| g.is_current(ticket)) {
				warn!("discarding stale load #{}", ticket);
				return;
			}
			match load.with_untracked(|l| l.settle(result)) {
				Settled::Loaded(dataset) => {
					info!(
						"loaded {} entities and {} documents",
						dataset.entities.len(),
						dataset.documents.len()
					);
					selection.update(|s| s.reconcile(&dataset.entities));
					last_error.set(None);
					load.set(LoadState::Ready(dataset));
				}
				Settled::Kept(e) => {
					error!("reload failed, keeping current data: {}", e);
					last_error.set(Some(e));
				}
				Settled::Failed(e) => {
					error!("{}", e);
					load.set(LoadState::Failed(e));
				}
			}
		});
	});
	reload.run(());

	view! {
		<ErrorBoundary fallback=move |errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
				<button id="retry" on:click=move |_| reload.run(())>
					"Retry"
				</button>
			}
		}>
			<div class="explorer">
				<h1>"Entity Network"</h1>
				{move || match load.get() {
					LoadState::Loading => Ok(view! { <p class="loading">"Loading entity data..."</p> }.into_any()),
					LoadState::Ready(dataset) => {
						Ok(view! { <Explorer dataset selection last_error on_reload=reload /> }.into_any())
					}
					LoadState::Failed(e) => Err(e),
				}}
			</div>
		</ErrorBoundary>
	}
}
