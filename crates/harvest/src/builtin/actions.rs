//! Spell action classes.

use arcana_primitives::ValueShape;

use crate::family::{FieldDef, Literal, StaticFamily, field};

const MATERIAL: ValueShape = ValueShape::Enum("Material");
const MATERIAL_LIST: ValueShape = ValueShape::List(&MATERIAL);
const STRING_LIST: ValueShape = ValueShape::List(&ValueShape::STRING);

const BASE_FIELDS: &[FieldDef] = &[
	field("ignore_result", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("requires_build_permission", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("requires_break_permission", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("requires_target", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("allowed_while_cancelled", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("target_self", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const COMPOUND_FIELDS: &[FieldDef] = &[
	field("ignore_result", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("requires_build_permission", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("requires_break_permission", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("requires_target", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("allowed_while_cancelled", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("target_self", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("actions", ValueShape::Unknown, Literal::None),
	field("stop_on_success", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const DAMAGE_FIELDS: &[FieldDef] = &[
	field("damage", ValueShape::DOUBLE, Literal::Double(0.0)),
	field("player_damage", ValueShape::DOUBLE, Literal::None),
	field("entity_damage", ValueShape::DOUBLE, Literal::None),
	field("magic_damage", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("percentage", ValueShape::DOUBLE, Literal::None),
	field("damage_type", ValueShape::STRING, Literal::None),
	field("requires_target", ValueShape::BOOLEAN, Literal::Bool(true)),
];

const VELOCITY_FIELDS: &[FieldDef] = &[
	field("speed", ValueShape::DOUBLE, Literal::Double(1.0)),
	field("living_entity_speed", ValueShape::DOUBLE, Literal::None),
	field("push", ValueShape::INTEGER, Literal::Int(0)),
	field("direction", ValueShape::Object("Vector"), Literal::None),
	field("additive", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("max_magnitude", ValueShape::DOUBLE, Literal::Double(0.0)),
];

const POTION_EFFECT_FIELDS: &[FieldDef] = &[
	field("add_effects", ValueShape::Unknown, Literal::None),
	field("remove_effects", ValueShape::Unknown, Literal::None),
	field("duration", ValueShape::INTEGER, Literal::None),
	field("amplifier", ValueShape::INTEGER, Literal::Int(0)),
	field("ambient", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("requires_target", ValueShape::BOOLEAN, Literal::Bool(true)),
];

const PLAY_SOUND_FIELDS: &[FieldDef] = &[
	field("sound", ValueShape::STRING, Literal::None),
	field("volume", ValueShape::FLOAT, Literal::Double(1.0)),
	field("pitch", ValueShape::FLOAT, Literal::Double(1.0)),
];

const FIREWORK_FIELDS: &[FieldDef] = &[
	field("firework", ValueShape::STRING, Literal::Str("ball")),
	field("power", ValueShape::INTEGER, Literal::Int(1)),
	field("flicker", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("trail", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("color", ValueShape::STRING, Literal::None),
	field("color2", ValueShape::STRING, Literal::None),
];

const CHANGE_BIOME_FIELDS: &[FieldDef] = &[field("biome", ValueShape::STRING, Literal::None)];

const BRUSH_FIELDS: &[FieldDef] = &[
	field("brush", ValueShape::STRING, Literal::None),
	field("brushes", MATERIAL_LIST, Literal::None),
	field("sample", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const SPAWN_ENTITY_FIELDS: &[FieldDef] = &[
	field("type", ValueShape::STRING, Literal::None),
	field("track", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("set_target", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("speed", ValueShape::DOUBLE, Literal::Double(0.0)),
];

const COMMAND_FIELDS: &[FieldDef] = &[
	field("command", ValueShape::STRING, Literal::None),
	field("commands", STRING_LIST, Literal::None),
	field("op", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("console", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const REPEAT_FIELDS: &[FieldDef] = &[
	field("repeat", ValueShape::INTEGER, Literal::Int(1)),
	field("stop_on_success", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const DELAY_FIELDS: &[FieldDef] = &[field("delay", ValueShape::INTEGER, Literal::Int(1))];

const SPHERE_FIELDS: &[FieldDef] = &[
	field("radius", ValueShape::INTEGER, Literal::Int(2)),
	field("thickness", ValueShape::INTEGER, Literal::Int(0)),
	field("probability", ValueShape::DOUBLE, Literal::Double(1.0)),
];

const AREA_OF_EFFECT_FIELDS: &[FieldDef] = &[
	field("radius", ValueShape::DOUBLE, Literal::Double(8.0)),
	field("y_radius", ValueShape::DOUBLE, Literal::None),
	field("target_count", ValueShape::INTEGER, Literal::Int(-1)),
	field("target_self", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const CHECK_BLOCK_FIELDS: &[FieldDef] = &[
	field("allowed", MATERIAL_LIST, Literal::None),
	field("fail", ValueShape::STRING, Literal::None),
	field("require_build", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const CONDITION_FIELDS: &[FieldDef] = &[
	field("conditions", ValueShape::Unknown, Literal::None),
	field("otherwise", ValueShape::STRING, Literal::None),
];

const TELEPORT_FIELDS: &[FieldDef] = &[field("safe", ValueShape::BOOLEAN, Literal::Bool(true))];

const FLOWER_FIELDS: &[FieldDef] = &[field("flowers", STRING_LIST, Literal::None)];

/// Behavior shared by every action.
pub static BASE_ACTION: StaticFamily = StaticFamily::new("BaseSpellAction", BASE_FIELDS);

/// Behavior shared by every action that runs nested action lists.
pub static COMPOUND_ACTION: StaticFamily = StaticFamily::compound("CompoundAction", &["actions"], COMPOUND_FIELDS);

/// Builtin action classes, in no particular order.
pub static ACTION_CLASSES: &[StaticFamily] = &[
	StaticFamily::new("DamageAction", DAMAGE_FIELDS),
	StaticFamily::new("VelocityAction", VELOCITY_FIELDS),
	StaticFamily::new("PotionEffectAction", POTION_EFFECT_FIELDS),
	StaticFamily::new("PlaySoundAction", PLAY_SOUND_FIELDS),
	StaticFamily::new("FireworkAction", FIREWORK_FIELDS),
	StaticFamily::new("ChangeBiomeAction", CHANGE_BIOME_FIELDS),
	StaticFamily::new("BrushAction", BRUSH_FIELDS),
	StaticFamily::new("SpawnEntityAction", SPAWN_ENTITY_FIELDS),
	StaticFamily::new("CommandAction", COMMAND_FIELDS),
	StaticFamily::compound("RepeatAction", &["actions"], REPEAT_FIELDS),
	StaticFamily::compound("DelayAction", &["actions"], DELAY_FIELDS),
	StaticFamily::compound("SphereAction", &["actions"], SPHERE_FIELDS),
	StaticFamily::compound("AreaOfEffectAction", &["actions"], AREA_OF_EFFECT_FIELDS),
	StaticFamily::compound("CheckBlockAction", &["actions", "fail"], CHECK_BLOCK_FIELDS),
	StaticFamily::compound("ConditionAction", &["actions", "otherwise"], CONDITION_FIELDS),
	StaticFamily::new("BaseTeleportAction", TELEPORT_FIELDS).abstract_class(),
	StaticFamily::new("FlowerAction", FLOWER_FIELDS).deprecated(),
];
