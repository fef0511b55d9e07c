//! Enumeration option resolution.
//!
//! Runs once after harvesting: every enum type gets the full set of legal
//! values of its domain, lowercased and sorted.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::types::TypeRegistry;

/// Supplies the legal values of an enumeration domain.
pub trait EnumSource {
	/// Every value of `domain` (e.g. `Material`), or `None` if the domain is unknown.
	fn variants(&self, domain: &str) -> Option<Vec<String>>;
}

impl EnumSource for BTreeMap<String, Vec<String>> {
	fn variants(&self, domain: &str) -> Option<Vec<String>> {
		self.get(domain).cloned()
	}
}

impl<S: EnumSource + ?Sized> EnumSource for &S {
	fn variants(&self, domain: &str) -> Option<Vec<String>> {
		(**self).variants(domain)
	}
}

/// Replaces the options of every enum type with the values `source` reports.
///
/// Types whose domain `source` does not know keep their current options.
/// Returns the number of types updated.
pub fn resolve_enum_options(types: &mut TypeRegistry, source: &dyn EnumSource) -> usize {
	let mut resolved = 0;
	for parameter_type in types.iter_mut() {
		let Some(domain) = parameter_type.kind().enum_domain() else {
			continue;
		};
		match source.variants(domain) {
			Some(variants) => {
				let options: BTreeSet<String> = variants.iter().map(|variant| variant.to_lowercase()).collect();
				debug!(key = %parameter_type.key(), domain, count = options.len(), "resolved enum options");
				parameter_type.set_options(options);
				resolved += 1;
			}
			None => warn!(key = %parameter_type.key(), domain, "unknown enum domain; options left unchanged"),
		}
	}
	resolved
}
