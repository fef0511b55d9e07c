//! Effect players and EffectLib effect classes.
//!
//! EffectLib classes expose public camelCase fields; the harvester converts
//! them to snake case before classification.

use arcana_primitives::ValueShape;

use crate::family::{FieldDef, Literal, StaticFamily, field};

const SINGLE_FIELDS: &[FieldDef] = &[
	field("effect", ValueShape::STRING, Literal::None),
	field("effect_data", ValueShape::INTEGER, Literal::Int(0)),
	field("particle", ValueShape::STRING, Literal::None),
	field("particle_count", ValueShape::INTEGER, Literal::Int(1)),
	field("particle_data", ValueShape::FLOAT, Literal::Double(0.0)),
	field("sound", ValueShape::STRING, Literal::None),
	field("sound_volume", ValueShape::FLOAT, Literal::Double(1.0)),
	field("sound_pitch", ValueShape::FLOAT, Literal::Double(1.0)),
	field("source_location", ValueShape::STRING, Literal::Str("eyes")),
	field("target_location", ValueShape::STRING, Literal::Str("eyes")),
	field("offset", ValueShape::Object("Vector"), Literal::None),
	field("relative_offset", ValueShape::Object("Vector"), Literal::None),
	field("firework", ValueShape::STRING, Literal::None),
	field("color", ValueShape::STRING, Literal::None),
	field("requires_entity_target", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("delay", ValueShape::INTEGER, Literal::Int(0)),
	field("effectlib", ValueShape::Unknown, Literal::None),
];

/// The single-shot effect player.
pub static EFFECT_SINGLE: StaticFamily = StaticFamily::new("EffectSingle", SINGLE_FIELDS);

const EFFECT_FIELDS: &[FieldDef] = &[
	field("delay", ValueShape::INTEGER, Literal::Int(0)),
	field("period", ValueShape::INTEGER, Literal::Int(1)),
	field("iterations", ValueShape::INTEGER, Literal::Int(0)),
	field("duration", ValueShape::INTEGER, Literal::None),
	field("particle", ValueShape::Enum("Particle"), Literal::Str("REDSTONE")),
	field("particleCount", ValueShape::INTEGER, Literal::Int(1)),
	field("particleOffsetX", ValueShape::FLOAT, Literal::Double(0.0)),
	field("particleOffsetY", ValueShape::FLOAT, Literal::Double(0.0)),
	field("particleOffsetZ", ValueShape::FLOAT, Literal::Double(0.0)),
	field("speed", ValueShape::FLOAT, Literal::Double(0.0)),
	field("color", ValueShape::Object("Color"), Literal::None),
	field("material", ValueShape::Enum("Material"), Literal::None),
	field("visibleRange", ValueShape::FLOAT, Literal::Double(32.0)),
	field("autoOrient", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("disappearWithOriginEntity", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("asynchronous", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("targetPlayer", ValueShape::Object("Player"), Literal::None),
	field("callback", ValueShape::Object("Runnable"), Literal::None),
];

/// Fields every EffectLib effect inherits.
pub static EFFECTLIB_BASE: StaticFamily = StaticFamily::new("Effect", EFFECT_FIELDS);

const ANIMATED_BALL_FIELDS: &[FieldDef] = &[
	field("particles", ValueShape::INTEGER, Literal::Int(150)),
	field("particlesPerIteration", ValueShape::INTEGER, Literal::Int(10)),
	field("size", ValueShape::FLOAT, Literal::Double(1.0)),
	field("period", ValueShape::INTEGER, Literal::Int(1)),
	field("iterations", ValueShape::INTEGER, Literal::Int(500)),
];

const ARC_FIELDS: &[FieldDef] = &[
	field("height", ValueShape::FLOAT, Literal::Double(2.0)),
	field("particles", ValueShape::INTEGER, Literal::Int(100)),
	field("iterations", ValueShape::INTEGER, Literal::Int(200)),
];

const ATOM_FIELDS: &[FieldDef] = &[
	field("particleNucleus", ValueShape::Enum("Particle"), Literal::Str("DRIP_WATER")),
	field("particlesNucleus", ValueShape::INTEGER, Literal::Int(10)),
	field("particlesOrbital", ValueShape::INTEGER, Literal::Int(10)),
	field("radius", ValueShape::DOUBLE, Literal::Double(3.0)),
	field("radiusNucleus", ValueShape::FLOAT, Literal::Double(0.2)),
	field("orbitals", ValueShape::INTEGER, Literal::Int(3)),
	field("angularVelocity", ValueShape::DOUBLE, Literal::Double(0.039_269_908_169_872_414)),
];

const CIRCLE_FIELDS: &[FieldDef] = &[
	field("radius", ValueShape::FLOAT, Literal::Double(0.4)),
	field("particles", ValueShape::INTEGER, Literal::Int(20)),
	field("wholeCircle", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("enableRotation", ValueShape::BOOLEAN, Literal::Bool(true)),
	field("resetCircle", ValueShape::BOOLEAN, Literal::Bool(false)),
];

const HELIX_FIELDS: &[FieldDef] = &[
	field("strands", ValueShape::INTEGER, Literal::Int(8)),
	field("particles", ValueShape::INTEGER, Literal::Int(80)),
	field("radius", ValueShape::FLOAT, Literal::Double(10.0)),
	field("curve", ValueShape::FLOAT, Literal::Double(10.0)),
	field("rotation", ValueShape::DOUBLE, Literal::Double(0.785_398_163_397_448_3)),
];

const LINE_FIELDS: &[FieldDef] = &[
	field("isZigZag", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("zigZags", ValueShape::INTEGER, Literal::Int(10)),
	field("particles", ValueShape::INTEGER, Literal::Int(100)),
	field("length", ValueShape::DOUBLE, Literal::None),
	field("maxLength", ValueShape::DOUBLE, Literal::Double(0.0)),
];

const SPHERE_FIELDS: &[FieldDef] = &[
	field("radius", ValueShape::DOUBLE, Literal::Double(0.6)),
	field("particles", ValueShape::INTEGER, Literal::Int(50)),
	field("radiusIncrease", ValueShape::DOUBLE, Literal::Double(0.0)),
	field("yOffset", ValueShape::DOUBLE, Literal::Double(0.0)),
];

const TEXT_FIELDS: &[FieldDef] = &[
	field("text", ValueShape::STRING, Literal::Str("Text")),
	field("invert", ValueShape::BOOLEAN, Literal::Bool(false)),
	field("stepX", ValueShape::INTEGER, Literal::Int(1)),
	field("stepY", ValueShape::INTEGER, Literal::Int(1)),
	field("size", ValueShape::FLOAT, Literal::Double(0.2)),
	field("font", ValueShape::Object("Font"), Literal::None),
];

const SHAPE_FIELDS: &[FieldDef] = &[field("particles", ValueShape::INTEGER, Literal::None)];

/// EffectLib effect classes, in no particular order.
pub static EFFECTLIB_CLASSES: &[StaticFamily] = &[
	StaticFamily::new("AnimatedBallEffect", ANIMATED_BALL_FIELDS),
	StaticFamily::new("ArcEffect", ARC_FIELDS),
	StaticFamily::new("AtomEffect", ATOM_FIELDS),
	StaticFamily::new("CircleEffect", CIRCLE_FIELDS),
	StaticFamily::new("HelixEffect", HELIX_FIELDS),
	StaticFamily::new("LineEffect", LINE_FIELDS),
	StaticFamily::new("SphereEffect", SPHERE_FIELDS),
	StaticFamily::new("TextEffect", TEXT_FIELDS),
	StaticFamily::new("BaseShapeEffect", SHAPE_FIELDS).abstract_class(),
];
