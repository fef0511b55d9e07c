//! Families configured through untyped property keys or simple field tables.

use arcana_primitives::ValueShape;

use crate::family::{FieldDef, Literal, PropertyKeys, StaticFamily, field};

pub static WAND: PropertyKeys = PropertyKeys {
	class_name: "Wand",
	keys: &[
		"active_brush",
		"active_spell",
		"alternate_spell",
		"alternate_spell2",
		"bound",
		"brush_mode",
		"brushes",
		"cooldown_reduction",
		"cost_reduction",
		"description",
		"effect_color",
		"effect_particle",
		"effect_sound",
		"enchantments",
		"haste",
		"health_regeneration",
		"hunger_regeneration",
		"icon",
		"icon_inactive",
		"icon_url",
		"indestructible",
		"keep",
		"locked",
		"mana",
		"mana_max",
		"mana_regeneration",
		"mode",
		"name",
		"owner",
		"path",
		"potion_effects",
		"power",
		"protection",
		"quick_cast",
		"quiet",
		"spells",
		"strength",
		"upgrade",
		"uses",
		"weakness",
	],
};

pub static MAGE_CLASS: PropertyKeys = PropertyKeys {
	class_name: "MageClass",
	keys: &[
		"attributes",
		"cooldown_reduction",
		"cost_reduction",
		"entity_attributes",
		"item_attributes",
		"locked",
		"mana",
		"mana_max",
		"mana_regeneration",
		"parent",
		"path",
		"potion_effects",
		"protection",
		"quiet",
		"spells",
		"strength",
		"weakness",
	],
};

pub static MODIFIER: PropertyKeys = PropertyKeys {
	class_name: "MageModifier",
	keys: &[
		"attributes",
		"duration",
		"entity_attributes",
		"icon",
		"name",
		"potion_effects",
		"protection",
		"weakness",
	],
};

const STRING: ValueShape = ValueShape::STRING;
const STRING_LIST: ValueShape = ValueShape::List(&STRING);
const STRING_MAP: ValueShape = ValueShape::Map(&STRING, &STRING);

const MOB_FIELDS: &[FieldDef] = &[
	field("type", ValueShape::STRING, Literal::None),
	field("name", ValueShape::STRING, Literal::None),
	field("health", ValueShape::DOUBLE, Literal::Double(20.0)),
	field("baby", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("tamed", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("size", ValueShape::INTEGER, Literal::None),
	field("potion_effects", ValueShape::Unknown, Literal::None),
	field("entity_attributes", ValueShape::Unknown, Literal::None),
	field("invisible", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("persist", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("drops", STRING_LIST, Literal::None),
	field("interact_spell", ValueShape::STRING, Literal::None),
];

/// Mob descriptors.
pub static MOB: StaticFamily = StaticFamily::new("EntityData", MOB_FIELDS);

const OPTION_FIELDS: &[FieldDef] = &[
	field("name", ValueShape::STRING, Literal::None),
	field("description", ValueShape::STRING, Literal::None),
	field("icon", ValueShape::STRING, Literal::None),
	field("cost", ValueShape::INTEGER, Literal::Int(0)),
	field("cost_type", ValueShape::STRING, Literal::Str("currency")),
	field("earn", ValueShape::INTEGER, Literal::None),
	field("permission", ValueShape::STRING, Literal::None),
	field("placeholder", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("slot", ValueShape::INTEGER, Literal::None),
	field("unavailable_message", ValueShape::STRING, Literal::None),
	field("cast_spell", ValueShape::STRING, Literal::None),
];

/// Selector action options.
pub static SELECTOR_OPTION: StaticFamily = StaticFamily::new("SelectorOption", OPTION_FIELDS);

const RECIPE_FIELDS: &[FieldDef] = &[
	field("output", ValueShape::STRING, Literal::None),
	field("output_type", ValueShape::STRING, Literal::Str("item")),
	field("ingredients", STRING_MAP, Literal::None),
	field("shape", STRING_LIST, Literal::None),
	field("substitute", ValueShape::STRING, Literal::None),
	field("auto_discover", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("locked", ValueShape::BOOLEAN, Literal::Bool(false)),
];

/// Crafting recipes.
pub static RECIPE: StaticFamily = StaticFamily::new("MagicRecipe", RECIPE_FIELDS);
