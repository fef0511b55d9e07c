use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::types::TypeKind;

static MATERIAL: ValueShape = ValueShape::Enum("Material");

fn store() -> ParameterStore {
	ParameterStore::new(RegistryConfig::default())
}

#[test]
fn test_first_request_registers_bare_key() {
	let mut store = store();
	let key = store.get_or_create_parameter("radius", &ValueShape::INTEGER).unwrap();

	assert_eq!(key, "radius");
	let parameter = store.get_parameter("radius").unwrap();
	assert_eq!(parameter.field(), "radius");
	assert_eq!(parameter.type_key(), &TypeKey::from("integer"));
}

#[test]
fn test_identical_type_returns_same_parameter() {
	let mut store = store();
	let first = store.get_or_create_parameter("visible", &ValueShape::BOOLEAN).unwrap();
	let second = store.get_or_create_parameter("visible", &ValueShape::BOOLEAN).unwrap();

	assert_eq!(first, second);
	assert_eq!(store.parameters().len(), 1);
}

#[test]
fn test_numeric_overlap_is_tolerated() {
	let mut store = store();
	let int_key = store.get_or_create_parameter("damage", &ValueShape::INTEGER).unwrap();
	let double_key = store.get_or_create_parameter("damage", &ValueShape::DOUBLE).unwrap();
	let long_key = store.get_or_create_parameter("damage", &ValueShape::LONG).unwrap();

	assert_eq!(int_key, double_key);
	assert_eq!(int_key, long_key);
	assert_eq!(store.get_parameter("damage").unwrap().type_key(), &TypeKey::from("integer"));
	assert_eq!(store.parameters().len(), 1);
}

#[test]
fn test_string_candidate_is_tolerated() {
	let mut store = store();
	store.get_or_create_parameter("fill", &MATERIAL).unwrap();
	let key = store.get_or_create_parameter("fill", &ValueShape::STRING).unwrap();

	assert_eq!(key, "fill");
	assert_eq!(store.get_parameter("fill").unwrap().type_key(), &TypeKey::from("material"));
}

#[test]
fn test_string_existing_does_not_absorb_other_types() {
	let mut store = store();
	store.get_or_create_parameter("target", &ValueShape::STRING).unwrap();
	let key = store.get_or_create_parameter("target", &ValueShape::BOOLEAN).unwrap();

	assert_eq!(key, "target_boolean");
}

#[test]
fn test_incompatible_types_split_into_qualified_key() {
	let mut store = store();
	let base = store.get_or_create_parameter("speed", &ValueShape::DOUBLE).unwrap();
	let split = store.get_or_create_parameter("speed", &ValueShape::BOOLEAN).unwrap();
	let again = store.get_or_create_parameter("speed", &ValueShape::BOOLEAN).unwrap();

	assert_eq!(base, "speed");
	assert_eq!(split, "speed_boolean");
	assert_eq!(split, again);

	let parameter = store.get_parameter("speed_boolean").unwrap();
	assert_eq!(parameter.field(), "speed");
	assert_eq!(parameter.type_key(), &TypeKey::from("boolean"));
	assert_eq!(store.parameters().claimed_variants("speed").count(), 2);
}

#[test]
fn test_collision_limit_reports_ambiguity() {
	let mut store = ParameterStore::new(RegistryConfig { max_field_types: 2 });
	store.get_or_create_parameter("value", &ValueShape::DOUBLE).unwrap();
	store.get_or_create_parameter("value", &ValueShape::BOOLEAN).unwrap();

	let err = store.get_or_create_parameter("value", &MATERIAL).unwrap_err();
	match err {
		RegistryError::ClassificationAmbiguity { field, types, limit } => {
			assert_eq!(field, "value");
			assert_eq!(limit, 2);
			assert_eq!(types, vec![TypeKey::from("double"), TypeKey::from("boolean")]);
		}
		other => panic!("expected ClassificationAmbiguity, got {other:?}"),
	}
}

#[test]
fn test_existing_qualified_key_is_not_counted_against_limit() {
	let mut store = ParameterStore::new(RegistryConfig { max_field_types: 2 });
	store.get_or_create_parameter("value", &ValueShape::DOUBLE).unwrap();
	store.get_or_create_parameter("value", &ValueShape::BOOLEAN).unwrap();

	let key = store.get_or_create_parameter("value", &ValueShape::BOOLEAN).unwrap();
	assert_eq!(key, "value_boolean");
}

#[test]
fn test_loaded_parameter_retyped_on_first_claim() {
	let mut types = TypeRegistry::new();
	types.insert_loaded(ParameterType::new("string".into(), TypeKind::Primitive(arcana_primitives::Primitive::String)));
	let mut parameters = ParameterRegistry::new();
	let mut loaded = Parameter::new("brush", "brush", TypeKey::from("string"));
	loaded.description = vec!["Block placed by construction spells.".to_string()];
	parameters.insert_loaded(loaded);
	let mut store = ParameterStore::from_parts(types, parameters, RegistryConfig::default());

	let key = store.get_or_create_parameter("brush", &ValueShape::STRING).unwrap();

	assert_eq!(key, "brush");
	let brush = store.get_parameter("brush").unwrap();
	assert_eq!(brush.type_key(), &TypeKey::from("material"));
	assert_eq!(brush.description, vec!["Block placed by construction spells.".to_string()]);
	assert_eq!(store.parameters().len(), 1);
}

#[test]
fn test_insert_parameter_requires_known_type() {
	let mut store = store();
	let err = store
		.insert_parameter(Parameter::new("cast_actions", "cast", TypeKey::from("action_list")))
		.unwrap_err();
	assert_eq!(err.key, "action_list");

	let action_list = store.resolve_rule(&crate::classify::overrides::ACTION_LIST);
	let key = store
		.insert_parameter(Parameter::new("cast_actions", "cast", action_list))
		.unwrap();
	assert_eq!(key, "cast_actions");
	assert!(store.validate().is_ok());
}

#[test]
fn test_remove_parameter() {
	let mut store = store();
	store.get_or_create_parameter("cast", &ValueShape::STRING).unwrap();
	assert!(store.remove_parameter("cast").is_some());
	assert!(store.get_parameter("cast").is_none());
	assert!(store.remove_parameter("cast").is_none());
}

fn numeric_shape() -> impl Strategy<Value = ValueShape> {
	prop_oneof![
		Just(ValueShape::INTEGER),
		Just(ValueShape::LONG),
		Just(ValueShape::FLOAT),
		Just(ValueShape::DOUBLE),
	]
}

static ENUM_NAMES: [&str; 4] = ["Material", "Biome", "Particle", "Sound"];

proptest! {
	/// Any two numeric kinds on the same field collapse onto one parameter.
	#[test]
	fn prop_numeric_kinds_share_parameter(field in "zz[a-z]{1,6}", first in numeric_shape(), second in numeric_shape()) {
		let mut store = store();
		let a = store.get_or_create_parameter(&field, &first).unwrap();
		let b = store.get_or_create_parameter(&field, &second).unwrap();
		prop_assert_eq!(a, b);
		prop_assert_eq!(store.parameters().len(), 1);
	}

	/// Two distinct enum types split into the bare key and a key qualified by the second type.
	#[test]
	fn prop_incompatible_types_split(field in "zz[a-z]{1,6}", i in 0usize..4, j in 0usize..4) {
		prop_assume!(i != j);
		let mut store = store();
		let first = ValueShape::Enum(ENUM_NAMES[i]);
		let second = ValueShape::Enum(ENUM_NAMES[j]);

		let a = store.get_or_create_parameter(&field, &first).unwrap();
		let b = store.get_or_create_parameter(&field, &second).unwrap();
		let second_type = store.classify(&field, &second);

		prop_assert_eq!(a.as_str(), field.as_str());
		prop_assert_eq!(b.as_str(), format!("{field}_{second_type}"));
		prop_assert!(store.validate().is_ok());
	}
}
