use log::warn;
use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "viewer-config";

/// Data locations and canvas geometry, provided to components through context.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
	pub entities_url: String,
	pub documents_url: String,
	/// Inner (data area) width.
	pub width: f64,
	/// Inner (data area) height.
	pub height: f64,
	pub padding: f64,
	pub node_opacity: f64,
	pub radius_divisor: f64,
	pub min_node_radius: f64,
	pub edge_width_divisor: f64,
	pub hover_edge_width_divisor: f64,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			entities_url: "terms.json".into(),
			documents_url: "files.json".into(),
			width: 1000.0,
			height: 800.0,
			padding: 40.0,
			node_opacity: 0.7,
			radius_divisor: 6.0,
			min_node_radius: 2.0,
			edge_width_divisor: 7.0,
			hover_edge_width_divisor: 2.0,
		}
	}
}

impl ViewerConfig {
	/// Reads overrides from the `<script id="viewer-config" type="application/json">`
	/// element of the host page, if present.
	pub fn from_page() -> Self {
		let Some(text) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
			.and_then(|el| el.text_content())
		else {
			return Self::default();
		};
		Self::from_json(&text).unwrap_or_else(|e| {
			warn!("ignoring malformed viewer config: {}", e);
			Self::default()
		})
	}

	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		if text.trim().is_empty() {
			return Ok(Self::default());
		}
		serde_json::from_str(text)
	}

	pub fn outer_width(&self) -> f64 {
		self.width + self.padding * 2.0
	}

	pub fn outer_height(&self) -> f64 {
		self.height + self.padding * 2.0
	}
}
