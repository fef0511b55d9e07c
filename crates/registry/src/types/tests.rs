use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[test]
fn test_get_or_create_is_idempotent() {
	let mut types = TypeRegistry::new();
	let first = types.get_or_create("material", TypeKind::Enum("Material".into()));
	let second = types.get_or_create("material", TypeKind::Enum("Material".into()));

	assert_eq!(first, second);
	assert_eq!(types.len(), 1);
	let material = types.get("material").expect("material type should exist");
	assert_eq!(material.name, "Material");
	assert!(material.description.is_empty());
}

#[test]
fn test_identity_is_key_not_structure() {
	let mut types = TypeRegistry::new();
	types.get_or_create("spell", TypeKind::Primitive(Primitive::String));
	types.get_or_create("spell", TypeKind::Enum("Spell".into()));

	let spell = types.get("spell").unwrap();
	assert_eq!(spell.kind(), &TypeKind::Primitive(Primitive::String));
}

#[test]
fn test_composite_types_reference_components() {
	let mut types = TypeRegistry::new();
	let spell = types.get_or_create("spell", TypeKind::Primitive(Primitive::String));
	let list = types.get_or_create_list("spell_list", spell.clone());
	let integer = types.get_or_create("integer", TypeKind::Primitive(Primitive::Integer));
	let map = types.get_or_create_map("spell_integer_map", spell.clone(), integer.clone());

	assert_eq!(types.get(list.as_str()).unwrap().kind(), &TypeKind::List { value: spell.clone() });
	assert_eq!(
		types.get(map.as_str()).unwrap().kind().references(),
		vec![&spell, &integer]
	);
	assert!(types.validate().is_ok());
}

#[test]
fn test_validate_reports_dangling_component() {
	let mut types = TypeRegistry::new();
	types.get_or_create_list("material_list", TypeKey::from("material"));

	let err = types.validate().unwrap_err();
	assert_eq!(err.kind, crate::error::ReferenceKind::Type);
	assert_eq!(err.key, "material");
	assert_eq!(err.owner, "type \"material_list\"");
}

#[test]
fn test_loaded_type_refreshed_on_first_claim() {
	let mut types = TypeRegistry::new();
	let mut loaded = ParameterType::new(TypeKey::from("mode"), TypeKind::Primitive(Primitive::String));
	loaded.name = "Wand Mode".to_string();
	loaded.description = vec!["How the wand presents spells.".to_string()];
	types.insert_loaded(loaded);

	types.get_or_create("mode", TypeKind::Enum("WandMode".into()));

	let mode = types.get("mode").unwrap();
	assert_eq!(mode.kind(), &TypeKind::Enum("WandMode".into()));
	assert_eq!(mode.name, "Wand Mode");
	assert_eq!(mode.description, vec!["How the wand presents spells.".to_string()]);
}

#[test]
fn test_refresh_to_non_enum_clears_options() {
	let mut types = TypeRegistry::new();
	let mut loaded = ParameterType::new(TypeKey::from("color"), TypeKind::Enum("Color".into()));
	loaded.set_options(["red".to_string(), "blue".to_string()].into());
	types.insert_loaded(loaded);

	types.get_or_create("color", TypeKind::Primitive(Primitive::String));
	assert!(types.get("color").unwrap().options().is_empty());
}

#[rstest]
#[case(TypeKind::Primitive(Primitive::Double), "double")]
#[case(TypeKind::Enum("FireworkEffect.Type".into()), "enum:FireworkEffect.Type")]
#[case(TypeKind::Object("Vector".into()), "object:Vector")]
#[case(TypeKind::List { value: "spell".into() }, "list")]
#[case(TypeKind::Map { key: "attribute".into(), value: "double".into() }, "map")]
fn test_class_descriptor_roundtrip(#[case] kind: TypeKind, #[case] class: &str) {
	assert_eq!(kind.class_descriptor(), class);
	let (key_type, value_type) = match &kind {
		TypeKind::List { value } => (None, Some(value.clone())),
		TypeKind::Map { key, value } => (Some(key.clone()), Some(value.clone())),
		_ => (None, None),
	};
	assert_eq!(TypeKind::from_descriptor(class, key_type, value_type), Ok(kind));
}

#[rstest]
#[case("list", "list type without value_type")]
#[case("enum:", "empty class name")]
#[case("java.util.Map", "unknown class descriptor")]
fn test_invalid_descriptors(#[case] class: &str, #[case] reason: &str) {
	assert_eq!(TypeKind::from_descriptor(class, None, None), Err(reason));
}
