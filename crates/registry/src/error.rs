use crate::key::TypeKey;

/// What kind of registry entry a dangling reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
	Type,
	Parameter,
}

impl std::fmt::Display for ReferenceKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Type => write!(f, "type"),
			Self::Parameter => write!(f, "parameter"),
		}
	}
}

/// A collection, type, or parameter points at a key absent from the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{owner} references missing {kind} {key:?}")]
pub struct UnresolvedReference {
	/// Human-readable owner of the reference, e.g. `type "spell_list"`.
	pub owner: String,
	pub kind: ReferenceKind,
	pub key: String,
}

impl UnresolvedReference {
	pub fn to_type(owner: impl Into<String>, key: impl Into<String>) -> Self {
		Self {
			owner: owner.into(),
			kind: ReferenceKind::Type,
			key: key.into(),
		}
	}

	pub fn to_parameter(owner: impl Into<String>, key: impl Into<String>) -> Self {
		Self {
			owner: owner.into(),
			kind: ReferenceKind::Parameter,
			key: key.into(),
		}
	}
}

/// Persisted input that cannot be turned into a consistent snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CorruptSnapshot {
	#[error("snapshot is not valid: {0}")]
	Parse(#[from] serde_json::Error),

	#[error("type {key:?} has invalid class {class:?}: {reason}")]
	InvalidType { key: String, class: String, reason: &'static str },

	#[error("dangling reference: {0}")]
	Dangling(#[from] UnresolvedReference),
}

/// Fatal registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	/// A field name was classified with more incompatible types than the
	/// configured limit allows.
	#[error("field {field:?} needs more than {limit} distinct parameters; already split into {types:?}")]
	ClassificationAmbiguity { field: String, types: Vec<TypeKey>, limit: usize },

	#[error(transparent)]
	UnresolvableReference(#[from] UnresolvedReference),

	#[error(transparent)]
	CorruptSnapshot(#[from] CorruptSnapshot),

	/// A collection or catalog name is reserved or already holds the other kind of section.
	#[error("section {name:?} is reserved or already holds a different kind of section")]
	SectionConflict { name: String },

	#[error("failed to serialize snapshot: {0}")]
	Serialize(#[source] serde_json::Error),
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
