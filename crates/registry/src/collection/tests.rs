use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::key::TypeKey;
use crate::parameters::Parameter;

fn registry(keys: &[&str]) -> ParameterRegistry {
	let mut registry = ParameterRegistry::new();
	for key in keys {
		registry.insert_claimed(Parameter::new(*key, *key, TypeKey::from("string")));
	}
	registry
}

fn collection(entries: &[(&str, i64)]) -> ParameterCollection {
	entries
		.iter()
		.map(|(key, default)| (ParameterKey::from(*key), Some(DefaultValue::Int(*default))))
		.collect()
}

fn keys(collection: &ParameterCollection) -> Vec<&str> {
	collection.keys().map(ParameterKey::as_str).collect()
}

#[test]
fn test_add_replaces_default_in_place() {
	let mut spells = collection(&[("radius", 1), ("range", 32)]);
	spells.add("radius".into(), Some(DefaultValue::Int(4)));

	assert_eq!(keys(&spells), vec!["radius", "range"]);
	assert_eq!(spells.get("radius"), Some(&Some(DefaultValue::Int(4))));
}

#[test]
fn test_remove_keeps_order() {
	let mut spells = collection(&[("radius", 1), ("range", 32), ("cooldown", 0)]);
	assert_eq!(spells.remove("range"), Some(Some(DefaultValue::Int(32))));
	assert_eq!(keys(&spells), vec!["radius", "cooldown"]);
	assert_eq!(spells.remove("range"), None);
}

#[test]
fn test_merge_last_wins_and_appends() {
	let registry = registry(&["radius", "range", "cooldown"]);
	let mut base = collection(&[("radius", 1), ("range", 32)]);
	let update = collection(&[("cooldown", 500), ("radius", 8)]);

	base.merge(&update, &registry).unwrap();

	assert_eq!(keys(&base), vec!["radius", "range", "cooldown"]);
	assert_eq!(base.get("radius"), Some(&Some(DefaultValue::Int(8))));
	assert_eq!(base.get("cooldown"), Some(&Some(DefaultValue::Int(500))));
}

#[test]
fn test_merge_rejects_unknown_keys_without_mutating() {
	let registry = registry(&["radius"]);
	let mut base = collection(&[("radius", 1)]);
	let update = collection(&[("radius", 2), ("missing", 3)]);

	let err = base.merge(&update, &registry).unwrap_err();

	assert_eq!(err.key, "missing");
	assert_eq!(base, collection(&[("radius", 1)]));
}

#[test]
fn test_remove_defaults_keeps_overrides_and_new_entries() {
	let baseline = collection(&[("radius", 1), ("range", 32)]);
	let mut action = collection(&[("radius", 1), ("range", 16), ("speed", 2)]);
	action.add("target".into(), None);

	action.remove_defaults(&baseline);

	assert_eq!(keys(&action), vec!["range", "speed", "target"]);
}

#[test]
fn test_remove_defaults_treats_missing_default_as_value() {
	let mut baseline = ParameterCollection::new();
	baseline.add("target".into(), None);
	let mut action = ParameterCollection::new();
	action.add("target".into(), Some(DefaultValue::from("self")));

	action.remove_defaults(&baseline);

	assert_eq!(keys(&action), vec!["target"]);
}

#[test]
fn test_stamp_category_updates_parameters() {
	let mut registry = registry(&["radius", "range"]);
	let mut spells = collection(&[("radius", 1)]);

	spells.stamp_category("construction", &mut registry);

	assert_eq!(spells.category(), Some("construction"));
	assert_eq!(registry.get("radius").unwrap().category.as_deref(), Some("construction"));
	assert_eq!(registry.get("range").unwrap().category, None);
}

#[test]
fn test_validate_names_owner() {
	let registry = registry(&[]);
	let spells = collection(&[("radius", 1)]);
	let err = spells.validate("collection \"spell_parameters\"", &registry).unwrap_err();
	assert_eq!(err.to_string(), "collection \"spell_parameters\" references missing parameter \"radius\"");
}

fn entries() -> impl Strategy<Value = Vec<(usize, i64)>> {
	prop::collection::vec((0usize..8, 0i64..4), 0..12)
}

const KEYS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

fn build(entries: &[(usize, i64)]) -> ParameterCollection {
	entries
		.iter()
		.map(|(index, default)| (ParameterKey::from(KEYS[*index]), Some(DefaultValue::Int(*default))))
		.collect()
}

proptest! {
	/// After a merge every key of the update carries the update's default.
	#[test]
	fn prop_merge_takes_update_defaults(base in entries(), update in entries()) {
		let registry = registry(&KEYS);
		let mut merged = build(&base);
		let update = build(&update);
		merged.merge(&update, &registry).unwrap();

		for (key, default) in update.iter() {
			prop_assert_eq!(merged.get(key.as_str()).map(Option::as_ref), Some(default));
		}
		for key in build(&base).keys() {
			prop_assert!(merged.contains(key.as_str()));
		}
	}

	/// Nothing left after diffing against a baseline matches the baseline.
	#[test]
	fn prop_remove_defaults_leaves_only_differences(base in entries(), other in entries()) {
		let baseline = build(&base);
		let mut diffed = build(&other);
		diffed.remove_defaults(&baseline);

		for (key, default) in diffed.iter() {
			prop_assert_ne!(baseline.get(key.as_str()).map(Option::as_ref), Some(default));
		}
		for (key, default) in build(&other).iter() {
			if baseline.get(key.as_str()).map(Option::as_ref) != Some(default) {
				prop_assert!(diffed.contains(key.as_str()));
			}
		}
	}
}
