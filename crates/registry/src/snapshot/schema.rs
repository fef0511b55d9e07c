//! On-disk records for the snapshot JSON.
//!
//! Records mirror the persisted layout exactly; keys live in the enclosing
//! maps and are re-attached when a snapshot is loaded.

use std::collections::{BTreeMap, BTreeSet};

use arcana_primitives::DefaultValue;
use serde::{Deserialize, Serialize};

use crate::key::{ParameterKey, TypeKey};

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct SnapshotRecord {
	#[serde(default)]
	pub categories: BTreeMap<String, CategoryRecord>,
	#[serde(default)]
	pub types: BTreeMap<TypeKey, TypeRecord>,
	#[serde(default)]
	pub parameters: BTreeMap<ParameterKey, ParameterRecord>,
	/// Named collections and content catalogs.
	#[serde(flatten)]
	pub sections: BTreeMap<String, SectionRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CategoryRecord {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub description: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TypeRecord {
	pub class: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub description: Vec<String>,
	#[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
	pub options: BTreeSet<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value_type: Option<TypeKey>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key_type: Option<TypeKey>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ParameterRecord {
	pub field: String,
	#[serde(rename = "type")]
	pub type_key: TypeKey,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub description: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum SectionRecord {
	Collection(Vec<EntryRecord>),
	Catalog(BTreeMap<String, DescriptionRecord>),
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct EntryRecord {
	pub parameter: ParameterKey,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<DefaultValue>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DescriptionRecord {
	pub class_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub description: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	#[serde(default)]
	pub parameters: Vec<EntryRecord>,
}
