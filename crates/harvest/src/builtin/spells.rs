//! Spell base classes, one per harvest category.
//!
//! Each class contributes template properties (read when a spell is loaded)
//! and cast parameters (read on every cast).

use arcana_primitives::ValueShape;

use crate::family::{FieldDef, Literal, StaticFamily, field};

const STRING_LIST: ValueShape = ValueShape::List(&ValueShape::STRING);
const STRING: ValueShape = ValueShape::STRING;
const INTEGER: ValueShape = ValueShape::INTEGER;
const COSTS: ValueShape = ValueShape::Map(&STRING, &INTEGER);

const BASE_PROPERTIES: &[FieldDef] = &[
	field("name", ValueShape::STRING, Literal::None),
	field("description", ValueShape::STRING, Literal::None),
	field("icon", ValueShape::STRING, Literal::None),
	field("icon_disabled", ValueShape::STRING, Literal::None),
	field("icon_url", ValueShape::STRING, Literal::None),
	field("category", ValueShape::STRING, Literal::None),
	field("tags", STRING_LIST, Literal::None),
	field("worth", ValueShape::DOUBLE, Literal::Double(0.0)),
	field("earns_sp", ValueShape::INTEGER, Literal::Int(0)),
	field("hidden", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("passive", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("quick_cast", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("upgrade_required_path", ValueShape::STRING, Literal::None),
	field("costs", COSTS, Literal::None),
	field("active_costs", COSTS, Literal::None),
	field("warmup", ValueShape::LONG, Literal::Int(0)),
];

const BASE_PARAMETERS: &[FieldDef] = &[
	field("cooldown", ValueShape::LONG, Literal::Int(0)),
	field("bypass_pvp", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("bypass_protection", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("bypass_confusion", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("cast_spell", ValueShape::STRING, Literal::None),
	field("cancel_effects", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("duration", ValueShape::LONG, Literal::Int(0)),
	field("quiet", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("message_target", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("show_undoable", ValueShape::BOOLEAN, Literal::Bool(true)),
];

const TARGETING_PROPERTIES: &[FieldDef] = &[field("targetable", STRING_LIST, Literal::None)];

const TARGETING_PARAMETERS: &[FieldDef] = &[
	field("range", ValueShape::INTEGER, Literal::Int(32)),
	field("target", ValueShape::STRING, Literal::Str("any")),
	field("target_type", ValueShape::STRING, Literal::Str("LivingEntity")),
	field("target_npc", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("target_invisible", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("target_breakables", ValueShape::DOUBLE, Literal::Double(1.0)),
	field("allow_max_range", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("hitbox", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("fov", ValueShape::DOUBLE, Literal::Double(0.3)),
	field("close_range", ValueShape::DOUBLE, Literal::Double(0.0)),
	field("target_offset", ValueShape::Object("Vector"), Literal::None),
	field("source_location", ValueShape::STRING, Literal::Str("eyes")),
	field("target_location", ValueShape::STRING, Literal::Str("eyes")),
];

const UNDO_PARAMETERS: &[FieldDef] = &[
	field("undo", ValueShape::INTEGER, Literal::Int(0)),
	field("undo_speed", ValueShape::DOUBLE, Literal::Double(0.0)),
	field("bypass_undo", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("undoable", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("undo_to", ValueShape::STRING, Literal::None),
];

const BLOCK_PARAMETERS: &[FieldDef] = &[
	field("indestructible", ValueShape::STRING, Literal::None),
	field("destructible", ValueShape::STRING, Literal::None),
	field("check_destructible", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("destructible_durability", ValueShape::DOUBLE, Literal::Double(0.0)),
	field("break_durability", ValueShape::DOUBLE, Literal::Double(0.0)),
	field("transparent", ValueShape::STRING, Literal::None),
	field("commit", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const BRUSH_PROPERTIES: &[FieldDef] = &[field("brushes", STRING_LIST, Literal::None)];

const BRUSH_PARAMETERS: &[FieldDef] = &[
	field("brush", ValueShape::STRING, Literal::None),
	field("brush_mode", ValueShape::STRING, Literal::None),
	field("active_brush", ValueShape::STRING, Literal::None),
];

const ACTION_PROPERTIES: &[FieldDef] = &[field("actions", ValueShape::Unknown, Literal::None)];

const ACTION_PARAMETERS: &[FieldDef] = &[
	field("repeat", ValueShape::INTEGER, Literal::Int(0)),
	field("delay", ValueShape::INTEGER, Literal::Int(0)),
	field("require_health_percentage", ValueShape::DOUBLE, Literal::None),
];

/// One spell base class and the harvest category its fields are stamped with.
#[derive(Debug, Clone, Copy)]
pub struct SpellClass {
	pub category: &'static str,
	pub properties: StaticFamily,
	pub parameters: StaticFamily,
}

/// Spell base classes in harvest order.
pub static SPELL_CLASSES: &[SpellClass] = &[
	SpellClass {
		category: "actions",
		properties: StaticFamily::new("ActionSpell", ACTION_PROPERTIES),
		parameters: StaticFamily::new("ActionSpell", ACTION_PARAMETERS),
	},
	SpellClass {
		category: "brushes",
		properties: StaticFamily::new("BrushSpell", BRUSH_PROPERTIES),
		parameters: StaticFamily::new("BrushSpell", BRUSH_PARAMETERS),
	},
	SpellClass {
		category: "construction",
		properties: StaticFamily::new("BlockSpell", &[]),
		parameters: StaticFamily::new("BlockSpell", BLOCK_PARAMETERS),
	},
	SpellClass {
		category: "undo",
		properties: StaticFamily::new("UndoableSpell", &[]),
		parameters: StaticFamily::new("UndoableSpell", UNDO_PARAMETERS),
	},
	SpellClass {
		category: "targeting",
		properties: StaticFamily::new("TargetingSpell", TARGETING_PROPERTIES),
		parameters: StaticFamily::new("TargetingSpell", TARGETING_PARAMETERS),
	},
	SpellClass {
		category: "base",
		properties: StaticFamily::new("BaseSpell", BASE_PROPERTIES),
		parameters: StaticFamily::new("BaseSpell", BASE_PARAMETERS),
	},
];
