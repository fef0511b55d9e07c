use arcana_primitives::DefaultValue;
use arcana_registry::{RegistryConfig, TypeKey};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::builtin;
use crate::error::HarvestError;
use crate::family::{DiscoveredField, FieldDef, Literal, StaticFamily, field};

fn regenerate() -> (Snapshot, HarvestReport) {
	let mut snapshot = Snapshot::new(RegistryConfig::default());
	let report = harvest(&mut snapshot, &builtin::content()).unwrap();
	(snapshot, report)
}

#[rstest]
#[case("AreaOfEffectAction", "Action", "area_of_effect")]
#[case("AnimatedBallEffect", "Effect", "animated_ball")]
#[case("Action", "Action", "action")]
#[case("Effect", "Action", "effect")]
fn test_description_key(#[case] class_name: &str, #[case] suffix: &str, #[case] expected: &str) {
	assert_eq!(description_key(class_name, suffix), expected);
}

#[test]
fn test_builtin_harvest_fills_every_section() {
	let (snapshot, report) = regenerate();

	for name in [
		SPELL_PARAMETERS,
		SPELL_PROPERTIES,
		ACTION_PARAMETERS,
		COMPOUND_ACTION_PARAMETERS,
		EFFECT_PARAMETERS,
		EFFECTLIB_PARAMETERS,
		WAND_PARAMETERS,
		CLASS_PARAMETERS,
		MODIFIER_PARAMETERS,
		MOB_PARAMETERS,
		OPTION_PARAMETERS,
		RECIPE_PARAMETERS,
	] {
		assert!(snapshot.collection(name).is_some_and(|collection| !collection.is_empty()), "{name} is empty");
	}
	assert!(snapshot.catalog(ACTIONS_CATALOG).is_some());
	assert!(snapshot.catalog(EFFECTS_CATALOG).is_some());
	assert!(report.failed.is_empty());
	assert_eq!(report.skipped, vec!["BaseTeleportAction", "FlowerAction", "BaseShapeEffect"]);
	assert!(snapshot.validate().is_ok());
}

#[test]
fn test_spell_parameters_are_categorized() {
	let (snapshot, _) = regenerate();
	let store = snapshot.store();

	assert_eq!(store.get_parameter("brush_mode").unwrap().category.as_deref(), Some("brushes"));
	assert_eq!(store.get_parameter("range").unwrap().category.as_deref(), Some("targeting"));
	assert_eq!(store.get_parameter("brush_mode").unwrap().type_key(), &TypeKey::from("wand_mode"));
	let categories: Vec<&str> = snapshot.categories().map(|category| category.key()).collect();
	assert_eq!(categories, vec!["actions", "base", "brushes", "compound", "construction", "targeting", "undo"]);
}

#[test]
fn test_compound_handlers_become_action_lists() {
	let (snapshot, _) = regenerate();
	let store = snapshot.store();

	assert!(store.get_parameter("fail").is_none());
	let fail = store.get_parameter("fail_actions").unwrap();
	assert_eq!(fail.field(), "fail");
	assert_eq!(fail.type_key(), &TypeKey::from("action_list"));

	let check = &snapshot.catalog(ACTIONS_CATALOG).unwrap()["check_block"];
	assert_eq!(check.category.as_deref(), Some(COMPOUND_CATEGORY));
	assert!(check.parameters.contains("fail_actions"));
	assert!(!check.parameters.contains("fail"));
	assert!(!check.parameters.contains("actions"));
}

#[test]
fn test_action_descriptions_drop_base_defaults() {
	let (snapshot, _) = regenerate();
	let damage = &snapshot.catalog(ACTIONS_CATALOG).unwrap()["damage"];

	assert_eq!(damage.class_name, "DamageAction");
	assert_eq!(damage.name, "Damage");
	assert!(damage.parameters.contains("requires_target"));
	assert!(!damage.parameters.contains("ignore_result"));
	assert_eq!(damage.category, None);
}

#[test]
fn test_effectlib_fields_are_snake_cased() {
	let (snapshot, _) = regenerate();
	let store = snapshot.store();

	assert!(store.get_parameter("particle_offset_x").is_some());
	assert!(store.get_parameter("particleOffsetX").is_none());
	assert!(store.get_parameter("target_player").is_none());
	assert!(store.get_parameter("callback").is_none());
	assert_eq!(store.get_parameter("y_offset").unwrap().type_key(), &TypeKey::from("vector"));

	let line = &snapshot.catalog(EFFECTS_CATALOG).unwrap()["line"];
	assert!(line.parameters.contains("is_zig_zag"));
}

#[test]
fn test_incompatible_reuse_is_split() {
	let (snapshot, _) = regenerate();
	let store = snapshot.store();

	assert_eq!(store.get_parameter("locked").unwrap().type_key(), &TypeKey::from("string"));
	let locked = store.get_parameter("locked_boolean").unwrap();
	assert_eq!(locked.field(), "locked");
	assert!(snapshot.collection(RECIPE_PARAMETERS).unwrap().contains("locked_boolean"));
}

static FAIL_FIELDS: &[FieldDef] = &[field("fail", ValueShape::STRING, Literal::None)];
static FALLBACK_PROPERTIES: StaticFamily = StaticFamily::new("FallbackSpell", &[]);
static FALLBACK_PARAMETERS: StaticFamily = StaticFamily::new("FallbackSpell", FAIL_FIELDS);

#[test]
fn test_handler_name_listed_elsewhere_keeps_string_parameter() {
	let mut content = builtin::content();
	content.spells.push(SpellSource {
		category: "fallback",
		properties: &FALLBACK_PROPERTIES,
		parameters: &FALLBACK_PARAMETERS,
	});

	let mut snapshot = Snapshot::new(RegistryConfig::default());
	harvest(&mut snapshot, &content).unwrap();
	let json = snapshot.to_json().unwrap();

	let store = snapshot.store();
	assert_eq!(store.get_parameter("fail").unwrap().type_key(), &TypeKey::from("string"));
	assert_eq!(store.get_parameter("fail_actions").unwrap().type_key(), &TypeKey::from("action_list"));
	assert!(snapshot.collection(SPELL_PARAMETERS).unwrap().contains("fail"));
	let check = &snapshot.catalog(ACTIONS_CATALOG).unwrap()["check_block"];
	assert!(check.parameters.contains("fail_actions"));
	assert!(!check.parameters.contains("fail"));
	assert!(Snapshot::load(&json, RegistryConfig::default()).is_ok());
}

struct Unbounded;

impl ContentFamily for Unbounded {
	fn class_name(&self) -> &str {
		"UnboundedMob"
	}

	fn fields(&self) -> Result<Vec<DiscoveredField>, HarvestError> {
		Ok(vec![
			DiscoveredField::new("health", ValueShape::DOUBLE, Some(DefaultValue::Double(f64::INFINITY))),
			DiscoveredField::new("speed", ValueShape::DOUBLE, Some(DefaultValue::Double(f64::NAN))),
			DiscoveredField::new("size", ValueShape::DOUBLE, Some(DefaultValue::Double(1.5))),
		])
	}
}

#[test]
fn test_non_finite_defaults_are_dropped() {
	let mut content = builtin::content();
	content.mob = &Unbounded;

	let mut snapshot = Snapshot::new(RegistryConfig::default());
	harvest(&mut snapshot, &content).unwrap();

	let mobs = snapshot.collection(MOB_PARAMETERS).unwrap();
	assert_eq!(mobs.get("health"), Some(&None));
	assert_eq!(mobs.get("speed"), Some(&None));
	assert_eq!(mobs.get("size"), Some(&Some(DefaultValue::Double(1.5))));

	let json = snapshot.to_json().unwrap();
	let reloaded = Snapshot::load(&json, RegistryConfig::default()).unwrap();
	assert_eq!(reloaded.to_json().unwrap(), json);
}
