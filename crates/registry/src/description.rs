//! Described content classes.

use crate::collection::ParameterCollection;

/// One content class (an action or a visual effect) and the parameters it
/// overrides or adds relative to its family's base collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDescription {
	key: String,
	/// Implementing class name.
	pub class_name: String,
	/// Curated display name.
	pub name: String,
	/// Curated description lines.
	pub description: Vec<String>,
	pub category: Option<String>,
	pub parameters: ParameterCollection,
}

impl ContentDescription {
	/// Creates a description named after `class_name`, with no parameters.
	pub fn new(key: impl Into<String>, class_name: impl Into<String>) -> Self {
		let class_name = class_name.into();
		Self {
			key: key.into(),
			name: class_name.clone(),
			class_name,
			description: Vec::new(),
			category: None,
			parameters: ParameterCollection::new(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}
}
