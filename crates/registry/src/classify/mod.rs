//! Canonical type classification.
//!
//! A discovered field is classified by its name first (see [`overrides`]) and
//! by the shape of its value otherwise. Classifying never fails: unknown shapes
//! become `string`.

pub mod overrides;

use arcana_primitives::{Primitive, ValueShape, snake_key};

pub use self::overrides::{FieldPattern, OVERRIDES, TypeOverride, TypeRule, override_for};
use crate::key::TypeKey;
use crate::types::{TypeKind, TypeRegistry};

/// Classifies `field` holding a value of `shape`, registering any type seen for the first time.
pub fn classify(field: &str, shape: &ValueShape, types: &mut TypeRegistry) -> TypeKey {
	match override_for(field) {
		Some(rule) => resolve_rule(rule, types),
		None => resolve_shape(shape, types),
	}
}

/// Type derived from a value shape alone.
pub fn resolve_shape(shape: &ValueShape, types: &mut TypeRegistry) -> TypeKey {
	match shape {
		ValueShape::Primitive(primitive) => primitive_type(*primitive, types),
		ValueShape::Enum(name) => types.get_or_create(snake_key(name), TypeKind::Enum((*name).to_string())),
		ValueShape::Object(name) => types.get_or_create(snake_key(name), TypeKind::Object((*name).to_string())),
		ValueShape::List(element) => {
			let value = resolve_shape(element, types);
			types.get_or_create_list(format!("{value}_list"), value)
		}
		ValueShape::Map(key, value) => {
			let key_type = resolve_shape(key, types);
			let value_type = resolve_shape(value, types);
			types.get_or_create_map(format!("{key_type}_{value_type}_map"), key_type, value_type)
		}
		ValueShape::Unknown => primitive_type(Primitive::String, types),
	}
}

/// Type described by an explicit rule.
pub fn resolve_rule(rule: &TypeRule, types: &mut TypeRegistry) -> TypeKey {
	match rule {
		TypeRule::Primitive(primitive) => primitive_type(*primitive, types),
		TypeRule::Alias(key) => types.get_or_create(*key, TypeKind::Primitive(Primitive::String)),
		TypeRule::Enum(name) => resolve_shape(&ValueShape::Enum(*name), types),
		TypeRule::Object(name) => resolve_shape(&ValueShape::Object(*name), types),
		TypeRule::Section(key) => types.get_or_create(*key, TypeKind::Object(SECTION_CLASS.to_string())),
		TypeRule::List { key, element } => {
			let value = resolve_rule(element, types);
			types.get_or_create_list(*key, value)
		}
		TypeRule::Map { key, key_type, value_type } => {
			let key_type = resolve_rule(key_type, types);
			let value_type = resolve_rule(value_type, types);
			types.get_or_create_map(*key, key_type, value_type)
		}
	}
}

/// Class name of nested configuration sections.
pub const SECTION_CLASS: &str = "ConfigurationSection";

fn primitive_type(primitive: Primitive, types: &mut TypeRegistry) -> TypeKey {
	types.get_or_create(primitive.key(), TypeKind::Primitive(primitive))
}
