mod error;
mod fetch;
#[cfg(test)]
pub(crate) mod fixtures;
mod generation;
mod parse;
mod types;

pub use error::DataError;
pub use fetch::load_dataset;
pub use generation::LoadGeneration;
pub use types::{Dataset, DocumentTable, EntityTable, EntityType, Position};
