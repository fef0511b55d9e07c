//! Persistence and reconciliation.
//!
//! A [`Snapshot`] is everything a regeneration run produces: the store, the
//! category table, named top-level collections and content catalogs. Loading
//! re-attaches keys and validates every reference; saving validates again and
//! writes sorted, pretty-printed JSON so an unchanged harvest reproduces the
//! previous file byte for byte.

mod schema;

use std::collections::BTreeMap;

use tracing::{debug, info};

use self::schema::{
	CategoryRecord, DescriptionRecord, EntryRecord, ParameterRecord, SectionRecord, SnapshotRecord, TypeRecord,
};
use crate::category::Category;
use crate::collection::ParameterCollection;
use crate::config::RegistryConfig;
use crate::description::ContentDescription;
use crate::error::{CorruptSnapshot, RegistryError, Result, UnresolvedReference};
use crate::options::{EnumSource, resolve_enum_options};
use crate::parameters::{Parameter, ParameterRegistry};
use crate::store::ParameterStore;
use crate::types::{ParameterType, TypeKind, TypeRegistry};

/// Top-level sections owned by the registry itself.
pub const RESERVED_SECTIONS: [&str; 3] = ["categories", "types", "parameters"];

/// The complete registry state of one regeneration run.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
	store: ParameterStore,
	categories: BTreeMap<String, Category>,
	collections: BTreeMap<String, ParameterCollection>,
	catalogs: BTreeMap<String, BTreeMap<String, ContentDescription>>,
}

impl Snapshot {
	/// An empty snapshot, the starting point of a full regeneration.
	pub fn new(config: RegistryConfig) -> Self {
		Self {
			store: ParameterStore::new(config),
			..Self::default()
		}
	}

	/// Parses a persisted snapshot.
	///
	/// Every loaded type and parameter starts unclaimed, so the next harvest
	/// refreshes its structure while curated names and descriptions survive.
	pub fn load(json: &str, config: RegistryConfig) -> Result<Self, CorruptSnapshot> {
		let record: SnapshotRecord = serde_json::from_str(json)?;

		let mut types = TypeRegistry::new();
		for (key, record) in record.types {
			let kind = TypeKind::from_descriptor(&record.class, record.key_type, record.value_type).map_err(|reason| {
				CorruptSnapshot::InvalidType {
					key: key.to_string(),
					class: record.class.clone(),
					reason,
				}
			})?;
			let is_enum = kind.enum_domain().is_some();
			let mut parameter_type = ParameterType::new(key, kind);
			if let Some(name) = record.name {
				parameter_type.name = name;
			}
			parameter_type.description = record.description;
			if is_enum {
				parameter_type.set_options(record.options);
			}
			types.insert_loaded(parameter_type);
		}

		let mut parameters = ParameterRegistry::new();
		for (key, record) in record.parameters {
			let mut parameter = Parameter::new(key, record.field, record.type_key);
			parameter.category = record.category;
			parameter.name = record.name;
			parameter.description = record.description;
			parameters.insert_loaded(parameter);
		}

		let categories = record
			.categories
			.into_iter()
			.map(|(key, record)| {
				let mut category = Category::new(key.clone());
				if let Some(name) = record.name {
					category.name = name;
				}
				category.description = record.description;
				(key, category)
			})
			.collect();

		let mut collections = BTreeMap::new();
		let mut catalogs = BTreeMap::new();
		for (name, section) in record.sections {
			match section {
				SectionRecord::Collection(entries) => {
					collections.insert(name, collection_from_entries(entries));
				}
				SectionRecord::Catalog(records) => {
					let catalog: BTreeMap<String, ContentDescription> = records
						.into_iter()
						.map(|(key, record)| {
							let description = description_from_record(key.clone(), record);
							(key, description)
						})
						.collect();
					catalogs.insert(name, catalog);
				}
			}
		}

		let snapshot = Self {
			store: ParameterStore::from_parts(types, parameters, config),
			categories,
			collections,
			catalogs,
		};
		snapshot.validate()?;
		info!(
			types = snapshot.store.types().len(),
			parameters = snapshot.store.parameters().len(),
			collections = snapshot.collections.len(),
			catalogs = snapshot.catalogs.len(),
			"loaded snapshot"
		);
		Ok(snapshot)
	}

	pub fn store(&self) -> &ParameterStore {
		&self.store
	}

	pub fn store_mut(&mut self) -> &mut ParameterStore {
		&mut self.store
	}

	/// The category record for `key`, created with a derived name if absent.
	pub fn category(&mut self, key: &str) -> &mut Category {
		self.categories
			.entry(key.to_string())
			.or_insert_with(|| Category::new(key))
	}

	pub fn categories(&self) -> impl Iterator<Item = &Category> {
		self.categories.values()
	}

	/// Stores `collection` under `name`, replacing a loaded collection of the same name.
	///
	/// # Errors
	///
	/// [`RegistryError::SectionConflict`] if `name` is reserved or names a catalog,
	/// [`RegistryError::UnresolvableReference`] if an entry is not a registered parameter.
	pub fn put_collection(&mut self, name: &str, collection: ParameterCollection) -> Result<()> {
		if RESERVED_SECTIONS.contains(&name) || self.catalogs.contains_key(name) {
			return Err(RegistryError::SectionConflict { name: name.to_string() });
		}
		collection.validate(&format!("collection {name:?}"), self.store.parameters())?;
		debug!(name, entries = collection.len(), "storing collection");
		self.collections.insert(name.to_string(), collection);
		Ok(())
	}

	pub fn collection(&self, name: &str) -> Option<&ParameterCollection> {
		self.collections.get(name)
	}

	pub fn collections(&self) -> impl Iterator<Item = (&str, &ParameterCollection)> {
		self.collections.iter().map(|(name, collection)| (name.as_str(), collection))
	}

	/// Stores `description` in `catalog`.
	///
	/// A description already present under the same key keeps its curated
	/// name and description; everything else is replaced.
	pub fn put_description(&mut self, catalog: &str, mut description: ContentDescription) -> Result<()> {
		if RESERVED_SECTIONS.contains(&catalog) || self.collections.contains_key(catalog) {
			return Err(RegistryError::SectionConflict { name: catalog.to_string() });
		}
		description
			.parameters
			.validate(&format!("{catalog} entry {:?}", description.key()), self.store.parameters())?;

		let entries = self.catalogs.entry(catalog.to_string()).or_default();
		if let Some(existing) = entries.get_mut(description.key()) {
			description.name = std::mem::take(&mut existing.name);
			description.description = std::mem::take(&mut existing.description);
		}
		entries.insert(description.key().to_string(), description);
		Ok(())
	}

	pub fn catalog(&self, name: &str) -> Option<&BTreeMap<String, ContentDescription>> {
		self.catalogs.get(name)
	}

	/// Whether any stored collection or catalog entry lists the parameter `key`.
	pub fn references_parameter(&self, key: &str) -> bool {
		self.collections.values().any(|collection| collection.contains(key))
			|| self
				.catalogs
				.values()
				.flat_map(BTreeMap::values)
				.any(|description| description.parameters.contains(key))
	}

	/// Checks every type and parameter reference in the snapshot.
	pub fn validate(&self) -> Result<(), UnresolvedReference> {
		self.store.validate()?;
		for (name, collection) in &self.collections {
			collection.validate(&format!("collection {name:?}"), self.store.parameters())?;
		}
		for (name, catalog) in &self.catalogs {
			for (key, description) in catalog {
				description
					.parameters
					.validate(&format!("{name} entry {key:?}"), self.store.parameters())?;
			}
		}
		Ok(())
	}

	/// Fills in the options of every enum type from `source`.
	pub fn resolve_options(&mut self, source: &dyn EnumSource) -> usize {
		resolve_enum_options(self.store.types_mut(), source)
	}

	/// Serializes the snapshot as pretty-printed JSON with a trailing newline.
	pub fn to_json(&self) -> Result<String> {
		self.validate()?;
		let mut json = serde_json::to_string_pretty(&self.to_record()).map_err(RegistryError::Serialize)?;
		json.push('\n');
		Ok(json)
	}

	fn to_record(&self) -> SnapshotRecord {
		let categories = self
			.categories
			.values()
			.map(|category| {
				let record = CategoryRecord {
					name: Some(category.name.clone()),
					description: category.description.clone(),
				};
				(category.key().to_string(), record)
			})
			.collect();

		let types = self
			.store
			.types()
			.iter()
			.map(|parameter_type| {
				let (key_type, value_type) = match parameter_type.kind() {
					TypeKind::List { value } => (None, Some(value.clone())),
					TypeKind::Map { key, value } => (Some(key.clone()), Some(value.clone())),
					_ => (None, None),
				};
				let record = TypeRecord {
					class: parameter_type.kind().class_descriptor(),
					name: Some(parameter_type.name.clone()),
					description: parameter_type.description.clone(),
					options: parameter_type.options().clone(),
					value_type,
					key_type,
				};
				(parameter_type.key().clone(), record)
			})
			.collect();

		let parameters = self
			.store
			.parameters()
			.iter()
			.map(|parameter| {
				let record = ParameterRecord {
					field: parameter.field().to_string(),
					type_key: parameter.type_key().clone(),
					category: parameter.category.clone(),
					name: parameter.name.clone(),
					description: parameter.description.clone(),
				};
				(parameter.key().clone(), record)
			})
			.collect();

		let mut sections: BTreeMap<String, SectionRecord> = self
			.collections
			.iter()
			.map(|(name, collection)| (name.clone(), SectionRecord::Collection(entries_from_collection(collection))))
			.collect();
		for (name, catalog) in &self.catalogs {
			let records = catalog
				.iter()
				.map(|(key, description)| {
					let record = DescriptionRecord {
						class_name: description.class_name.clone(),
						name: Some(description.name.clone()),
						description: description.description.clone(),
						category: description.category.clone(),
						parameters: entries_from_collection(&description.parameters),
					};
					(key.clone(), record)
				})
				.collect();
			sections.insert(name.clone(), SectionRecord::Catalog(records));
		}

		SnapshotRecord {
			categories,
			types,
			parameters,
			sections,
		}
	}
}

fn collection_from_entries(entries: Vec<EntryRecord>) -> ParameterCollection {
	entries.into_iter().map(|entry| (entry.parameter, entry.default)).collect()
}

fn entries_from_collection(collection: &ParameterCollection) -> Vec<EntryRecord> {
	collection
		.iter()
		.map(|(key, default)| EntryRecord {
			parameter: key.clone(),
			default: default.cloned(),
		})
		.collect()
}

fn description_from_record(key: String, record: DescriptionRecord) -> ContentDescription {
	let mut description = ContentDescription::new(key, record.class_name);
	if let Some(name) = record.name {
		description.name = name;
	}
	description.description = record.description;
	description.category = record.category;
	description.parameters = collection_from_entries(record.parameters);
	description
}
