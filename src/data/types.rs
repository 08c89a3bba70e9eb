use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Entity categories produced by the extraction step, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityType {
	Person,
	Org,
	Date,
	Gpe,
	Phone,
	Bank,
}

impl EntityType {
	pub const ALL: [EntityType; 6] = [
		EntityType::Person,
		EntityType::Org,
		EntityType::Date,
		EntityType::Gpe,
		EntityType::Phone,
		EntityType::Bank,
	];

	/// Position in [`EntityType::ALL`], used to pick the type color.
	pub fn index(self) -> usize {
		self as usize
	}

	/// Tag as it appears in the entity table.
	pub fn as_str(self) -> &'static str {
		match self {
			EntityType::Person => "PERSON",
			EntityType::Org => "ORG",
			EntityType::Date => "DATE",
			EntityType::Gpe => "GPE",
			EntityType::Phone => "PHONE",
			EntityType::Bank => "BANK",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			EntityType::Person => "Person",
			EntityType::Org => "Organization",
			EntityType::Date => "Date",
			EntityType::Gpe => "Location",
			EntityType::Phone => "Phone number",
			EntityType::Bank => "Bank account number",
		}
	}
}

impl fmt::Display for EntityType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EntityType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		EntityType::ALL
			.into_iter()
			.find(|ty| ty.as_str() == s)
			.ok_or_else(|| s.to_string())
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntityRecord {
	pub entity_type: EntityType,
	pub documents: Vec<String>,
	pub co_occurrence: BTreeMap<String, f64>,
	pub position: Position,
}

impl EntityRecord {
	/// Number of distinct related entities; drives node size.
	pub fn relevance(&self) -> usize {
		self.co_occurrence.len()
	}
}

pub type EntityTable = BTreeMap<String, EntityRecord>;
pub type DocumentTable = BTreeMap<String, String>;

/// Both tables of one successful load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
	pub entities: EntityTable,
	pub documents: DocumentTable,
}
