//! Ordered collections of parameter references with default values.

use arcana_primitives::DefaultValue;
use indexmap::IndexMap;

use crate::error::UnresolvedReference;
use crate::key::ParameterKey;
use crate::parameters::ParameterRegistry;

/// Ordered `(parameter, default)` entries, unique by parameter key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterCollection {
	entries: IndexMap<ParameterKey, Option<DefaultValue>>,
	category: Option<String>,
}

impl ParameterCollection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_category(category: impl Into<String>) -> Self {
		Self {
			entries: IndexMap::new(),
			category: Some(category.into()),
		}
	}

	pub fn category(&self) -> Option<&str> {
		self.category.as_deref()
	}

	/// Adds `key`, replacing the default of an existing entry in place.
	pub fn add(&mut self, key: ParameterKey, default: Option<DefaultValue>) {
		self.entries.insert(key, default);
	}

	/// Removes `key`, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<Option<DefaultValue>> {
		self.entries.shift_remove(key)
	}

	/// Default recorded for `key`; `None` when the key is absent.
	pub fn get(&self, key: &str) -> Option<&Option<DefaultValue>> {
		self.entries.get(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &ParameterKey> {
		self.entries.keys()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&ParameterKey, Option<&DefaultValue>)> {
		self.entries.iter().map(|(key, default)| (key, default.as_ref()))
	}

	/// Merges `other` into this collection.
	///
	/// Existing keys take `other`'s default, new keys are appended in `other`'s
	/// order. Nothing is merged if any key of `other` is missing from `registry`.
	pub fn merge(&mut self, other: &ParameterCollection, registry: &ParameterRegistry) -> Result<(), UnresolvedReference> {
		other.validate("merged collection", registry)?;
		for (key, default) in &other.entries {
			self.entries.insert(key.clone(), default.clone());
		}
		Ok(())
	}

	/// Drops entries whose default matches `baseline`, keeping overridden and new ones.
	pub fn remove_defaults(&mut self, baseline: &ParameterCollection) {
		self.entries
			.retain(|key, default| baseline.entries.get(key).is_none_or(|base| *base != *default));
	}

	/// Tags every referenced parameter with `category`. Missing keys are skipped.
	pub fn stamp_category(&mut self, category: &str, registry: &mut ParameterRegistry) {
		self.category = Some(category.to_string());
		for key in self.entries.keys() {
			if let Some(parameter) = registry.get_mut(key.as_str()) {
				parameter.category = Some(category.to_string());
			}
		}
	}

	/// Checks that every key resolves in `registry`.
	pub fn validate(&self, owner: &str, registry: &ParameterRegistry) -> Result<(), UnresolvedReference> {
		match self.entries.keys().find(|key| !registry.contains(key.as_str())) {
			Some(missing) => Err(UnresolvedReference::to_parameter(owner, missing.as_str())),
			None => Ok(()),
		}
	}
}

impl FromIterator<(ParameterKey, Option<DefaultValue>)> for ParameterCollection {
	fn from_iter<I: IntoIterator<Item = (ParameterKey, Option<DefaultValue>)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
			category: None,
		}
	}
}

#[cfg(test)]
mod tests;
