//! String-backed keys for registry entries.
//!
//! Registries own the canonical records; everything else refers to them by
//! key, so a `ParameterKey` never aliases a mutable `Parameter`.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

macro_rules! registry_key {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);

		impl $name {
			pub fn new(key: impl Into<String>) -> Self {
				Self(key.into())
			}

			pub fn as_str(&self) -> &str {
				&self.0
			}
		}

		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}

		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}

		impl From<&str> for $name {
			fn from(key: &str) -> Self {
				Self(key.to_string())
			}
		}

		impl From<String> for $name {
			fn from(key: String) -> Self {
				Self(key)
			}
		}

		impl PartialEq<str> for $name {
			fn eq(&self, other: &str) -> bool {
				self.0 == other
			}
		}

		impl PartialEq<&str> for $name {
			fn eq(&self, other: &&str) -> bool {
				self.0 == *other
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(&self.0)
			}
		}
	};
}

registry_key! {
	/// Key of a [`ParameterType`](crate::ParameterType) in the type registry.
	TypeKey
}

registry_key! {
	/// Key of a [`Parameter`](crate::Parameter), possibly type-qualified (`damage_double`).
	ParameterKey
}
