//! Field-name overrides for classification.
//!
//! Some field names are ambiguous from their declared value alone (strings
//! that are really spell keys, maps keyed by potion effects). These rules win
//! over the shape-derived type whenever the field name matches.

use arcana_primitives::Primitive;

use self::FieldPattern::{Exact, Suffix};

/// How a field name is matched against an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPattern {
	Exact(&'static str),
	Suffix(&'static str),
}

impl FieldPattern {
	pub fn matches(&self, field: &str) -> bool {
		match self {
			FieldPattern::Exact(name) => field == *name,
			FieldPattern::Suffix(suffix) => field.len() > suffix.len() && field.ends_with(suffix),
		}
	}
}

/// Explicit type assigned to a field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRule {
	Primitive(Primitive),
	/// String-valued type with its own key (`spell`, `color`).
	Alias(&'static str),
	/// Enumeration type named like [`ValueShape::Enum`](arcana_primitives::ValueShape::Enum).
	Enum(&'static str),
	/// Opaque object type named like [`ValueShape::Object`](arcana_primitives::ValueShape::Object).
	Object(&'static str),
	/// Configuration section type with its own key.
	Section(&'static str),
	List { key: &'static str, element: &'static TypeRule },
	Map { key: &'static str, key_type: &'static TypeRule, value_type: &'static TypeRule },
}

/// One override: every listed field gets `rule`.
#[derive(Debug, Clone, Copy)]
pub struct TypeOverride {
	pub fields: &'static [FieldPattern],
	pub rule: TypeRule,
}

const BOOLEAN: TypeRule = TypeRule::Primitive(Primitive::Boolean);
const INTEGER: TypeRule = TypeRule::Primitive(Primitive::Integer);
const DOUBLE: TypeRule = TypeRule::Primitive(Primitive::Double);
const SPELL: TypeRule = TypeRule::Alias("spell");
const DAMAGE_TYPE: TypeRule = TypeRule::Alias("damage_type");
const MATERIAL: TypeRule = TypeRule::Enum("Material");
const POTION_EFFECT_TYPE: TypeRule = TypeRule::Enum("PotionEffectType");
const ATTRIBUTE: TypeRule = TypeRule::Enum("Attribute");
const ENCHANTMENT: TypeRule = TypeRule::Enum("Enchantment");
const VECTOR: TypeRule = TypeRule::Object("Vector");

/// List of action configuration sections, used for compound action handlers.
pub const ACTION_LIST: TypeRule = TypeRule::List {
	key: "action_list",
	element: &TypeRule::Section("action"),
};

pub static OVERRIDES: &[TypeOverride] = &[
	TypeOverride {
		fields: &[
			Exact("force"),
			Exact("indestructible"),
			Exact("passive"),
			Exact("quick_cast"),
			Exact("quiet"),
			Exact("upgrade"),
		],
		rule: BOOLEAN,
	},
	TypeOverride {
		fields: &[Exact("repeat"), Exact("delay"), Exact("warmup")],
		rule: INTEGER,
	},
	TypeOverride {
		fields: &[Exact("actions")],
		rule: TypeRule::Section("actions"),
	},
	TypeOverride {
		fields: &[Exact("spells")],
		rule: TypeRule::List {
			key: "spell_list",
			element: &SPELL,
		},
	},
	TypeOverride {
		fields: &[Exact("brushes")],
		rule: TypeRule::List {
			key: "material_list",
			element: &MATERIAL,
		},
	},
	TypeOverride {
		fields: &[Exact("protection"), Exact("weakness"), Exact("strength")],
		rule: TypeRule::Map {
			key: "damage_type_map",
			key_type: &DAMAGE_TYPE,
			value_type: &DOUBLE,
		},
	},
	TypeOverride {
		fields: &[
			Exact("alternate_spell"),
			Exact("alternate_spell2"),
			Exact("active_spell"),
			Exact("cast_spell"),
		],
		rule: SPELL,
	},
	TypeOverride {
		fields: &[Exact("remove_effects")],
		rule: TypeRule::List {
			key: "potion_effect_list",
			element: &POTION_EFFECT_TYPE,
		},
	},
	TypeOverride {
		fields: &[
			Exact("potion_effects"),
			Exact("add_effects"),
			Exact("projectile_potion_effects"),
		],
		rule: TypeRule::Map {
			key: "potion_effect_map",
			key_type: &POTION_EFFECT_TYPE,
			value_type: &INTEGER,
		},
	},
	TypeOverride {
		fields: &[Exact("entity_attributes"), Exact("item_attributes")],
		rule: TypeRule::Map {
			key: "attribute_map",
			key_type: &ATTRIBUTE,
			value_type: &DOUBLE,
		},
	},
	TypeOverride {
		fields: &[Exact("enchantments")],
		rule: TypeRule::Map {
			key: "enchantment_map",
			key_type: &ENCHANTMENT,
			value_type: &INTEGER,
		},
	},
	TypeOverride {
		fields: &[Exact("attributes")],
		rule: TypeRule::Alias("attributes"),
	},
	TypeOverride {
		fields: &[Exact("upgrade_required_path"), Exact("path")],
		rule: TypeRule::Alias("path"),
	},
	TypeOverride {
		fields: &[Exact("brush_mode"), Exact("mode")],
		rule: TypeRule::Enum("WandMode"),
	},
	TypeOverride {
		fields: &[Exact("type")],
		rule: TypeRule::Enum("EntityType"),
	},
	TypeOverride {
		fields: &[Exact("weather")],
		rule: TypeRule::Alias("weather"),
	},
	TypeOverride {
		fields: &[Exact("color2"), Exact("color")],
		rule: TypeRule::Alias("color"),
	},
	TypeOverride {
		fields: &[Exact("damage_type")],
		rule: DAMAGE_TYPE,
	},
	TypeOverride {
		fields: &[Exact("icon_url")],
		rule: TypeRule::Alias("texture"),
	},
	TypeOverride {
		fields: &[Exact("icon"), Exact("icon_inactive"), Exact("icon_disabled")],
		rule: TypeRule::Alias("icon"),
	},
	TypeOverride {
		fields: &[Exact("active_brush"), Exact("material"), Exact("brush")],
		rule: MATERIAL,
	},
	TypeOverride {
		fields: &[Exact("biome")],
		rule: TypeRule::Enum("Biome"),
	},
	TypeOverride {
		fields: &[Exact("effect_particle"), Exact("particle")],
		rule: TypeRule::Enum("Particle"),
	},
	TypeOverride {
		fields: &[Exact("effect_sound"), Exact("sound")],
		rule: TypeRule::Enum("Sound"),
	},
	TypeOverride {
		fields: &[Exact("firework")],
		rule: TypeRule::Enum("FireworkEffect.Type"),
	},
	TypeOverride {
		fields: &[Exact("effect")],
		rule: TypeRule::Enum("Effect"),
	},
	TypeOverride {
		fields: &[Exact("source_location"), Exact("target_location")],
		rule: TypeRule::Enum("SourceLocation.LocationType"),
	},
	TypeOverride {
		fields: &[Exact("offset"), Suffix("_offset")],
		rule: VECTOR,
	},
];

/// Finds the override for `field`. Exact names take precedence over suffix rules.
pub fn override_for(field: &str) -> Option<&'static TypeRule> {
	let exact = OVERRIDES
		.iter()
		.find(|entry| entry.fields.iter().any(|pattern| matches!(pattern, Exact(_)) && pattern.matches(field)));
	exact
		.or_else(|| {
			OVERRIDES
				.iter()
				.find(|entry| entry.fields.iter().any(|pattern| matches!(pattern, Suffix(_)) && pattern.matches(field)))
		})
		.map(|entry| &entry.rule)
}
