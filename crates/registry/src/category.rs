//! Harvest categories.

use arcana_primitives::display_name;

/// A grouping tag stamped on parameters, with curated display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
	key: String,
	pub name: String,
	pub description: Vec<String>,
}

impl Category {
	pub fn new(key: impl Into<String>) -> Self {
		let key = key.into();
		Self {
			name: display_name(&key),
			key,
			description: Vec::new(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}
}
