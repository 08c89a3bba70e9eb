//! Browser fetch of the two data tables.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::error::DataError;
use super::types::Dataset;
use crate::config::ViewerConfig;

fn describe(value: JsValue) -> String {
	match value.dyn_ref::<js_sys::Error>() {
		Some(err) => String::from(err.message()),
		None => format!("{:?}", value),
	}
}

async fn fetch_text(url: &str) -> Result<String, DataError> {
	let fetch_err = |reason: String| DataError::Fetch {
		url: url.to_string(),
		reason,
	};

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::SameOrigin);

	let request = Request::new_with_str_and_init(url, &opts).map_err(|e| fetch_err(describe(e)))?;
	let window = web_sys::window().ok_or_else(|| fetch_err("no window".into()))?;
	let resp: Response = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|e| fetch_err(describe(e)))?
		.dyn_into()
		.map_err(|_| fetch_err("response is not a Response".into()))?;

	if !resp.ok() {
		return Err(DataError::Status {
			url: url.to_string(),
			status: resp.status(),
		});
	}

	let text = JsFuture::from(resp.text().map_err(|e| fetch_err(describe(e)))?)
		.await
		.map_err(|e| fetch_err(describe(e)))?;
	text.as_string()
		.ok_or_else(|| fetch_err("response body is not text".into()))
}

/// Fetches and validates the entity and document tables.
pub async fn load_dataset(config: &ViewerConfig) -> Result<Dataset, DataError> {
	let entities = fetch_text(&config.entities_url).await?;
	let documents = fetch_text(&config.documents_url).await?;
	Dataset::from_json(&entities, &documents)
}
