use thiserror::Error;

/// Reasons a dataset load is rejected.
///
/// Variants carry owned strings so the error can be cloned into a signal and
/// shown by the page's error boundary.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataError {
	#[error("could not fetch {url}: {reason}")]
	Fetch { url: String, reason: String },

	#[error("{url} answered with HTTP {status}")]
	Status { url: String, status: u16 },

	#[error("{table} table is malformed: {reason}")]
	Json { table: &'static str, reason: String },

	#[error("entity {entity:?} has unknown type {found:?}")]
	UnknownType { entity: String, found: String },

	#[error("entity {entity:?} lists {related:?} with invalid strength {value}")]
	InvalidStrength {
		entity: String,
		related: String,
		value: f64,
	},

	#[error("entity {entity:?} has invalid coordinate {found:?}")]
	InvalidCoordinate { entity: String, found: String },
}
