use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::DataError;
use super::types::{Dataset, DocumentTable, EntityRecord, EntityTable, Position};

/// One row of the entity table: `[type, documents, co-occurrence, [x, y]]`.
#[derive(Deserialize)]
struct RawEntity(String, Vec<String>, BTreeMap<String, f64>, [RawCoord; 2]);

/// Coordinates are written either as numbers or as numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoord {
	Number(f64),
	Text(String),
}

impl RawCoord {
	fn resolve(self, entity: &str) -> Result<f64, DataError> {
		let (value, found) = match self {
			RawCoord::Number(v) => (Some(v), v.to_string()),
			RawCoord::Text(s) => (s.trim().parse::<f64>().ok(), s),
		};
		value
			.filter(|v| v.is_finite())
			.ok_or_else(|| DataError::InvalidCoordinate {
				entity: entity.to_string(),
				found,
			})
	}
}

pub fn parse_entities(json: &str) -> Result<EntityTable, DataError> {
	let raw: BTreeMap<String, RawEntity> =
		serde_json::from_str(json).map_err(|e| DataError::Json {
			table: "entity",
			reason: e.to_string(),
		})?;

	raw.into_iter()
		.map(|(id, RawEntity(ty, documents, co_occurrence, [x, y]))| {
			let entity_type = ty.parse().map_err(|found| DataError::UnknownType {
				entity: id.clone(),
				found,
			})?;
			if let Some((related, &value)) = co_occurrence
				.iter()
				.find(|(_, v)| !(v.is_finite() && **v > 0.0))
			{
				return Err(DataError::InvalidStrength {
					entity: id.clone(),
					related: related.clone(),
					value,
				});
			}
			let position = Position {
				x: x.resolve(&id)?,
				y: y.resolve(&id)?,
			};
			let record = EntityRecord {
				entity_type,
				documents,
				co_occurrence,
				position,
			};
			Ok((id, record))
		})
		.collect()
}

pub fn parse_documents(json: &str) -> Result<DocumentTable, DataError> {
	serde_json::from_str(json).map_err(|e| DataError::Json {
		table: "document",
		reason: e.to_string(),
	})
}

impl Dataset {
	/// Validates both tables; any malformed record rejects the whole load.
	pub fn from_json(entities: &str, documents: &str) -> Result<Self, DataError> {
		Ok(Self {
			entities: parse_entities(entities)?,
			documents: parse_documents(documents)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::types::EntityType;

	const ENTITIES: &str = r#"{
		"Alice": ["PERSON", ["doc1"], {"Acme": 3}, [0, 0]],
		"Acme": ["ORG", ["doc1", "doc2"], {"Alice": 3}, ["1.5", "-2"]]
	}"#;

	#[test]
	fn parses_entity_rows() {
		let table = parse_entities(ENTITIES).unwrap();
		assert_eq!(table.len(), 2);

		let acme = &table["Acme"];
		assert_eq!(acme.entity_type, EntityType::Org);
		assert_eq!(acme.documents, vec!["doc1", "doc2"]);
		assert_eq!(acme.co_occurrence["Alice"], 3.0);
		assert_eq!(acme.position, Position { x: 1.5, y: -2.0 });
		assert_eq!(table["Alice"].relevance(), 1);
	}

	#[test]
	fn rejects_unknown_type() {
		let err = parse_entities(r#"{"Zed": ["NORP", [], {}, [0, 0]]}"#).unwrap_err();
		assert_eq!(
			err,
			DataError::UnknownType {
				entity: "Zed".into(),
				found: "NORP".into(),
			}
		);
	}

	#[test]
	fn rejects_non_positive_strength() {
		let err = parse_entities(r#"{"A": ["DATE", [], {"B": 0}, [0, 0]]}"#).unwrap_err();
		assert!(matches!(err, DataError::InvalidStrength { ref related, .. } if related == "B"));
	}

	#[test]
	fn rejects_non_numeric_coordinate() {
		let err = parse_entities(r#"{"A": ["BANK", [], {}, ["north", 1]]}"#).unwrap_err();
		assert_eq!(
			err,
			DataError::InvalidCoordinate {
				entity: "A".into(),
				found: "north".into(),
			}
		);
	}

	#[test]
	fn rejects_wrong_row_shape() {
		let err = parse_entities(r#"{"A": ["PERSON", []]}"#).unwrap_err();
		assert!(matches!(err, DataError::Json { table: "entity", .. }));
		assert!(err.to_string().starts_with("entity table is malformed"));
	}

	#[test]
	fn loads_dataset() {
		let docs = r#"{"doc1": "Alice works at Acme.", "doc2": "Acme."}"#;
		let dataset = Dataset::from_json(ENTITIES, docs).unwrap();
		assert_eq!(dataset.documents["doc1"], "Alice works at Acme.");

		let err = Dataset::from_json(ENTITIES, "[1, 2]").unwrap_err();
		assert!(matches!(err, DataError::Json { table: "document", .. }));
	}

	#[test]
	fn bundled_sample_data_is_valid() {
		let dataset = Dataset::from_json(
			include_str!("../../terms.json"),
			include_str!("../../files.json"),
		)
		.unwrap();
		assert_eq!(dataset.entities.len(), 6);
		for record in dataset.entities.values() {
			for doc in &record.documents {
				assert!(dataset.documents.contains_key(doc), "missing {doc}");
			}
		}
	}
}
