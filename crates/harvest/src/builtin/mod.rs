//! Builtin content tables.
//!
//! These stand in for the game framework's content classes: every table lists
//! the fields a default instance of the class exposes.

mod actions;
mod effects;
mod enums;
mod properties;
mod spells;

pub use self::actions::{ACTION_CLASSES, BASE_ACTION, COMPOUND_ACTION};
pub use self::effects::{EFFECT_SINGLE, EFFECTLIB_BASE, EFFECTLIB_CLASSES};
pub use self::enums::EnumCatalog;
pub use self::properties::{MAGE_CLASS, MOB, MODIFIER, RECIPE, SELECTOR_OPTION, WAND};
pub use self::spells::{SPELL_CLASSES, SpellClass};
use crate::family::ContentFamily;
use crate::harvester::{ContentSet, SpellSource};

/// Every builtin content family, ready to harvest.
pub fn content() -> ContentSet<'static> {
	ContentSet {
		spells: SPELL_CLASSES
			.iter()
			.map(|spell| SpellSource {
				category: spell.category,
				properties: &spell.properties,
				parameters: &spell.parameters,
			})
			.collect(),
		base_action: &BASE_ACTION,
		compound_action: &COMPOUND_ACTION,
		actions: ACTION_CLASSES.iter().map(|family| family as &dyn ContentFamily).collect(),
		effect: &EFFECT_SINGLE,
		effectlib_base: &EFFECTLIB_BASE,
		effectlib: EFFECTLIB_CLASSES.iter().map(|family| family as &dyn ContentFamily).collect(),
		wand: &WAND,
		mage_class: &MAGE_CLASS,
		modifier: &MODIFIER,
		mob: &MOB,
		selector_option: &SELECTOR_OPTION,
		recipe: &RECIPE,
	}
}
