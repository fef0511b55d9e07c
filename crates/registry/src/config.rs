use serde::{Deserialize, Serialize};

/// Tunables for parameter classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Maximum number of distinct parameters one field name may be split into
	/// (the bare key plus type-qualified keys). Values below 1 are treated as 1.
	pub max_field_types: usize,
}

impl RegistryConfig {
	pub const DEFAULT_MAX_FIELD_TYPES: usize = 4;

	pub fn field_type_limit(&self) -> usize {
		self.max_field_types.max(1)
	}
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			max_field_types: Self::DEFAULT_MAX_FIELD_TYPES,
		}
	}
}
