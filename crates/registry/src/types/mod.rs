//! Canonical parameter types.
//!
//! A type is identified by its key alone: two requests for `material` get
//! the same entry no matter which shape produced them. List and map types
//! refer to their component types by key.

use std::collections::{BTreeMap, BTreeSet};

use arcana_primitives::{Primitive, display_name};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::UnresolvedReference;
use crate::key::TypeKey;

/// Structural kind of a [`ParameterType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
	Primitive(Primitive),
	/// Closed enumeration; holds the enumeration's type name (`Material`,
	/// `FireworkEffect.Type`).
	Enum(String),
	/// Opaque structured value; holds the class name (`Vector`).
	Object(String),
	List { value: TypeKey },
	Map { key: TypeKey, value: TypeKey },
}

impl TypeKind {
	/// String-typed values, including string aliases such as `spell` or `color`.
	pub fn is_string_like(&self) -> bool {
		matches!(self, TypeKind::Primitive(Primitive::String))
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, TypeKind::Primitive(primitive) if primitive.is_numeric())
	}

	pub fn enum_domain(&self) -> Option<&str> {
		match self {
			TypeKind::Enum(domain) => Some(domain),
			_ => None,
		}
	}

	/// Type keys this kind refers to.
	pub fn references(&self) -> Vec<&TypeKey> {
		match self {
			TypeKind::List { value } => vec![value],
			TypeKind::Map { key, value } => vec![key, value],
			_ => Vec::new(),
		}
	}

	/// Persisted class descriptor: a primitive key, `enum:<name>`,
	/// `object:<name>`, `list`, or `map`.
	pub fn class_descriptor(&self) -> String {
		match self {
			TypeKind::Primitive(primitive) => primitive.key().to_string(),
			TypeKind::Enum(domain) => format!("enum:{domain}"),
			TypeKind::Object(class) => format!("object:{class}"),
			TypeKind::List { .. } => "list".to_string(),
			TypeKind::Map { .. } => "map".to_string(),
		}
	}

	/// Inverse of [`class_descriptor`](Self::class_descriptor).
	pub fn from_descriptor(class: &str, key_type: Option<TypeKey>, value_type: Option<TypeKey>) -> Result<Self, &'static str> {
		if let Some(primitive) = Primitive::from_key(class) {
			return Ok(TypeKind::Primitive(primitive));
		}
		if let Some(domain) = class.strip_prefix("enum:") {
			return non_empty(domain).map(|domain| TypeKind::Enum(domain.to_string()));
		}
		if let Some(name) = class.strip_prefix("object:") {
			return non_empty(name).map(|name| TypeKind::Object(name.to_string()));
		}
		match class {
			"list" => {
				let value = value_type.ok_or("list type without value_type")?;
				Ok(TypeKind::List { value })
			}
			"map" => {
				let key = key_type.ok_or("map type without key_type")?;
				let value = value_type.ok_or("map type without value_type")?;
				Ok(TypeKind::Map { key, value })
			}
			_ => Err("unknown class descriptor"),
		}
	}
}

fn non_empty(name: &str) -> Result<&str, &'static str> {
	if name.is_empty() { Err("empty class name") } else { Ok(name) }
}

/// A canonical, named type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterType {
	key: TypeKey,
	kind: TypeKind,
	/// Display name; curated, kept across regenerations.
	pub name: String,
	/// Free-text description lines; curated, kept across regenerations.
	pub description: Vec<String>,
	options: BTreeSet<String>,
}

impl ParameterType {
	pub fn new(key: TypeKey, kind: TypeKind) -> Self {
		Self {
			name: display_name(key.as_str()),
			key,
			kind,
			description: Vec::new(),
			options: BTreeSet::new(),
		}
	}

	pub fn key(&self) -> &TypeKey {
		&self.key
	}

	pub fn kind(&self) -> &TypeKind {
		&self.kind
	}

	/// Legal values of an enum type, lowercase and sorted. Empty for other kinds.
	pub fn options(&self) -> &BTreeSet<String> {
		&self.options
	}

	pub(crate) fn set_options(&mut self, options: BTreeSet<String>) {
		self.options = options;
	}

	pub(crate) fn set_kind(&mut self, kind: TypeKind) {
		if kind.enum_domain().is_none() {
			self.options.clear();
		}
		self.kind = kind;
	}
}

/// Deduplicated store of every canonical type, keyed by [`TypeKey`].
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
	types: BTreeMap<TypeKey, ParameterType>,
	/// Keys requested during the current run. Loaded entries stay unclaimed
	/// until a harvest asks for them, at which point their structure is refreshed.
	claimed: FxHashSet<TypeKey>,
}

impl TypeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, key: &str) -> Option<&ParameterType> {
		self.types.get(key)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut ParameterType> {
		self.types.get_mut(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.types.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Iterates types in key order.
	pub fn iter(&self) -> impl Iterator<Item = &ParameterType> {
		self.types.values()
	}

	pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut ParameterType> {
		self.types.values_mut()
	}

	/// Returns the key of the type registered under `key`, creating it with
	/// `kind` on first request.
	///
	/// Repeated requests within a run return the same entry unchanged. The first
	/// request for an entry that was loaded from a snapshot replaces its
	/// structural kind while keeping the curated name and description.
	pub fn get_or_create(&mut self, key: impl Into<TypeKey>, kind: TypeKind) -> TypeKey {
		let key = key.into();
		let first_claim = self.claimed.insert(key.clone());
		match self.types.get_mut(&key) {
			None => {
				debug!(key = %key, class = %kind.class_descriptor(), "registering type");
				self.types.insert(key.clone(), ParameterType::new(key.clone(), kind));
			}
			Some(existing) if existing.kind != kind => {
				if first_claim {
					debug!(key = %key, from = %existing.kind.class_descriptor(), to = %kind.class_descriptor(), "refreshing loaded type");
					existing.set_kind(kind);
				} else {
					debug!(key = %key, kept = %existing.kind.class_descriptor(), ignored = %kind.class_descriptor(), "type key requested with a different shape");
				}
			}
			Some(_) => {}
		}
		key
	}

	/// List type whose elements have type `value`.
	pub fn get_or_create_list(&mut self, key: impl Into<TypeKey>, value: TypeKey) -> TypeKey {
		self.get_or_create(key, TypeKind::List { value })
	}

	/// Map type from `key_type` to `value_type`.
	pub fn get_or_create_map(&mut self, key: impl Into<TypeKey>, key_type: TypeKey, value_type: TypeKey) -> TypeKey {
		self.get_or_create(
			key,
			TypeKind::Map {
				key: key_type,
				value: value_type,
			},
		)
	}

	/// Inserts a type read from a snapshot without claiming it.
	pub(crate) fn insert_loaded(&mut self, parameter_type: ParameterType) {
		self.types.insert(parameter_type.key.clone(), parameter_type);
	}

	/// Checks that every list/map component key resolves.
	pub fn validate(&self) -> Result<(), UnresolvedReference> {
		for parameter_type in self.types.values() {
			for reference in parameter_type.kind.references() {
				if !self.types.contains_key(reference) {
					return Err(UnresolvedReference::to_type(format!("type {:?}", parameter_type.key.as_str()), reference.as_str()));
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
