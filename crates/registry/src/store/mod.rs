//! The registry handle harvesting drivers talk to.
//!
//! # Collisions
//!
//! The same field name recurs across many unrelated content classes. Most
//! recurrences are the same concept and collapse onto one parameter; the rest
//! reuse the name with an incompatible type and are split off under a
//! type-qualified key (`field_<type>`). String candidates and numeric pairs
//! are always compatible.
//!
//! # Reconciliation
//!
//! Parameters loaded from a snapshot start unclaimed. The first request for an
//! unclaimed parameter re-types it to the fresh classification, so an
//! incremental run reaches the same structure as a run from an empty store
//! while curated names and descriptions survive.

use arcana_primitives::ValueShape;
use tracing::debug;

use crate::classify::{self, TypeRule};
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result, UnresolvedReference};
use crate::key::{ParameterKey, TypeKey};
use crate::parameters::{Parameter, ParameterRegistry};
use crate::types::{ParameterType, TypeRegistry};

/// Owns the type and parameter registries for one regeneration run.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
	types: TypeRegistry,
	parameters: ParameterRegistry,
	config: RegistryConfig,
}

impl ParameterStore {
	pub fn new(config: RegistryConfig) -> Self {
		Self {
			types: TypeRegistry::new(),
			parameters: ParameterRegistry::new(),
			config,
		}
	}

	pub(crate) fn from_parts(types: TypeRegistry, parameters: ParameterRegistry, config: RegistryConfig) -> Self {
		Self { types, parameters, config }
	}

	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	pub fn types(&self) -> &TypeRegistry {
		&self.types
	}

	pub fn types_mut(&mut self) -> &mut TypeRegistry {
		&mut self.types
	}

	pub fn parameters(&self) -> &ParameterRegistry {
		&self.parameters
	}

	pub fn parameters_mut(&mut self) -> &mut ParameterRegistry {
		&mut self.parameters
	}

	pub fn get_type(&self, key: &str) -> Option<&ParameterType> {
		self.types.get(key)
	}

	pub fn get_parameter(&self, key: &str) -> Option<&Parameter> {
		self.parameters.get(key)
	}

	/// Classifies `field` without registering a parameter.
	pub fn classify(&mut self, field: &str, shape: &ValueShape) -> TypeKey {
		classify::classify(field, shape, &mut self.types)
	}

	/// Resolves an explicit type rule, registering its types.
	pub fn resolve_rule(&mut self, rule: &TypeRule) -> TypeKey {
		classify::resolve_rule(rule, &mut self.types)
	}

	/// Returns the canonical parameter for `field` holding a value of `shape`.
	///
	/// # Errors
	///
	/// [`RegistryError::ClassificationAmbiguity`] when the field would need more
	/// distinct parameters than [`RegistryConfig::max_field_types`] allows, and
	/// [`RegistryError::UnresolvableReference`] when an existing parameter
	/// points at a type that is not registered.
	pub fn get_or_create_parameter(&mut self, field: &str, shape: &ValueShape) -> Result<ParameterKey> {
		let candidate = self.classify(field, shape);
		self.get_or_create_typed(field, candidate)
	}

	/// Collision resolution for `field` with an already classified `candidate` type.
	pub fn get_or_create_typed(&mut self, field: &str, candidate: TypeKey) -> Result<ParameterKey> {
		let candidate_type = self
			.types
			.get(candidate.as_str())
			.ok_or_else(|| UnresolvedReference::to_type(format!("field {field:?}"), candidate.as_str()))?;

		let Some(existing) = self.parameters.get(field) else {
			return Ok(self.register(ParameterKey::from(field), field, candidate));
		};

		if !self.parameters.is_claimed(field) {
			if existing.type_key() != &candidate {
				debug!(field, from = %existing.type_key(), to = %candidate, "re-typing loaded parameter");
			}
			return Ok(self
				.parameters
				.claim_with_type(field, candidate)
				.unwrap_or_else(|| ParameterKey::from(field)));
		}

		let existing_type = self.types.get(existing.type_key().as_str()).ok_or_else(|| {
			UnresolvedReference::to_type(format!("parameter {field:?}"), existing.type_key().as_str())
		})?;

		let candidate_kind = candidate_type.kind();
		if candidate_kind.is_string_like()
			|| (candidate_kind.is_numeric() && existing_type.kind().is_numeric())
			|| existing_type.key() == &candidate
		{
			return Ok(existing.key().clone());
		}

		let qualified = ParameterKey::new(format!("{field}_{candidate}"));
		if self.parameters.contains(qualified.as_str()) {
			if self.parameters.is_claimed(qualified.as_str()) {
				return Ok(qualified);
			}
			return Ok(self
				.parameters
				.claim_with_type(qualified.as_str(), candidate)
				.unwrap_or(qualified));
		}

		let variants: Vec<TypeKey> = self
			.parameters
			.claimed_variants(field)
			.map(|parameter| parameter.type_key().clone())
			.collect();
		let limit = self.config.field_type_limit();
		if variants.len() >= limit {
			return Err(RegistryError::ClassificationAmbiguity {
				field: field.to_string(),
				types: variants,
				limit,
			});
		}

		debug!(field, key = %qualified, existing = %existing_type.key(), candidate = %candidate, "splitting overloaded field");
		Ok(self.register(qualified, field, candidate))
	}

	/// Registers `parameter` directly, replacing any parameter under the same key.
	pub fn insert_parameter(&mut self, parameter: Parameter) -> Result<ParameterKey, UnresolvedReference> {
		if !self.types.contains(parameter.type_key().as_str()) {
			return Err(UnresolvedReference::to_type(
				format!("parameter {:?}", parameter.key().as_str()),
				parameter.type_key().as_str(),
			));
		}
		Ok(self.parameters.insert_claimed(parameter))
	}

	pub fn remove_parameter(&mut self, key: &str) -> Option<Parameter> {
		self.parameters.remove(key)
	}

	/// Checks that every type and parameter reference resolves.
	pub fn validate(&self) -> Result<(), UnresolvedReference> {
		self.types.validate()?;
		for parameter in self.parameters.iter() {
			if !self.types.contains(parameter.type_key().as_str()) {
				return Err(UnresolvedReference::to_type(
					format!("parameter {:?}", parameter.key().as_str()),
					parameter.type_key().as_str(),
				));
			}
		}
		Ok(())
	}

	fn register(&mut self, key: ParameterKey, field: &str, type_key: TypeKey) -> ParameterKey {
		debug!(key = %key, field, type_key = %type_key, "registering parameter");
		self.parameters.insert_claimed(Parameter::new(key, field, type_key))
	}
}

#[cfg(test)]
mod tests;
