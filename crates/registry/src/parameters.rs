//! Canonical parameter records.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use crate::key::{ParameterKey, TypeKey};

/// A canonical, named configurable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
	key: ParameterKey,
	field: String,
	type_key: TypeKey,
	/// Grouping tag from the last harvest that stamped this parameter.
	pub category: Option<String>,
	/// Curated display name.
	pub name: Option<String>,
	/// Curated description lines.
	pub description: Vec<String>,
}

impl Parameter {
	pub fn new(key: impl Into<ParameterKey>, field: impl Into<String>, type_key: TypeKey) -> Self {
		Self {
			key: key.into(),
			field: field.into(),
			type_key,
			category: None,
			name: None,
			description: Vec::new(),
		}
	}

	pub fn key(&self) -> &ParameterKey {
		&self.key
	}

	/// Underlying property name on the content object.
	pub fn field(&self) -> &str {
		&self.field
	}

	pub fn type_key(&self) -> &TypeKey {
		&self.type_key
	}
}

/// Deduplicated store of parameters keyed by [`ParameterKey`].
///
/// Collision handling lives in [`ParameterStore`](crate::ParameterStore),
/// which owns this registry alongside the type registry.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
	parameters: BTreeMap<ParameterKey, Parameter>,
	claimed: FxHashSet<ParameterKey>,
}

impl ParameterRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &str) -> Option<&Parameter> {
		self.parameters.get(key)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut Parameter> {
		self.parameters.get_mut(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.parameters.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.parameters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parameters.is_empty()
	}

	/// Iterates parameters in key order.
	pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
		self.parameters.values()
	}

	/// Parameters claimed during this run that share `field`, in key order.
	pub fn claimed_variants(&self, field: &str) -> impl Iterator<Item = &Parameter> {
		self.parameters
			.values()
			.filter(move |parameter| parameter.field == field && self.claimed.contains(&parameter.key))
	}

	pub(crate) fn is_claimed(&self, key: &str) -> bool {
		self.claimed.contains(key)
	}

	/// Registers `parameter` as claimed in this run, replacing any entry under the same key.
	pub(crate) fn insert_claimed(&mut self, parameter: Parameter) -> ParameterKey {
		let key = parameter.key.clone();
		self.claimed.insert(key.clone());
		self.parameters.insert(key.clone(), parameter);
		key
	}

	/// Claims a loaded entry, pointing it at `type_key` while keeping curated fields.
	pub(crate) fn claim_with_type(&mut self, key: &str, type_key: TypeKey) -> Option<ParameterKey> {
		let parameter = self.parameters.get_mut(key)?;
		parameter.type_key = type_key;
		self.claimed.insert(parameter.key.clone());
		Some(parameter.key.clone())
	}

	pub(crate) fn insert_loaded(&mut self, parameter: Parameter) {
		self.parameters.insert(parameter.key.clone(), parameter);
	}

	pub(crate) fn remove(&mut self, key: &str) -> Option<Parameter> {
		self.claimed.remove(key);
		self.parameters.remove(key)
	}
}
