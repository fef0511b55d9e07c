//! The regeneration pipeline.
//!
//! [`harvest`] runs every [`Stage`] in a fixed order: spells, actions,
//! effects, EffectLib effects, wand/class/modifier properties, mobs, selector
//! options and recipes. Action and EffectLib classes are sorted by class name
//! first, so discovery order never changes the result. A family that cannot
//! be inspected is logged and skipped, and a failed base family leaves its
//! stored collection in place as the diff baseline.

use arcana_primitives::{ValueShape, display_name, snake_key};
use arcana_registry::classify::overrides::ACTION_LIST;
use arcana_registry::{ContentDescription, Parameter, ParameterCollection, ParameterKey, RegistryError, Snapshot};
use tracing::{debug, info, warn};

use crate::family::ContentFamily;

pub const SPELL_PARAMETERS: &str = "spell_parameters";
pub const SPELL_PROPERTIES: &str = "spell_properties";
pub const ACTION_PARAMETERS: &str = "action_parameters";
pub const COMPOUND_ACTION_PARAMETERS: &str = "compound_action_parameters";
pub const EFFECT_PARAMETERS: &str = "effect_parameters";
pub const EFFECTLIB_PARAMETERS: &str = "effectlib_parameters";
pub const WAND_PARAMETERS: &str = "wand_parameters";
pub const CLASS_PARAMETERS: &str = "class_parameters";
pub const MODIFIER_PARAMETERS: &str = "modifier_parameters";
pub const MOB_PARAMETERS: &str = "mob_parameters";
pub const OPTION_PARAMETERS: &str = "option_parameters";
pub const RECIPE_PARAMETERS: &str = "recipe_parameters";

/// Catalog of described action classes.
pub const ACTIONS_CATALOG: &str = "actions";
/// Catalog of described EffectLib classes.
pub const EFFECTS_CATALOG: &str = "effectlib_effects";

/// Category stamped on compound action descriptions.
pub const COMPOUND_CATEGORY: &str = "compound";

/// Handler every compound action inherits; covered by the compound base collection.
const INHERITED_HANDLER: &str = "actions";

/// Field classes that are runtime plumbing rather than configuration.
const IGNORED_CLASSES: [&str; 2] = ["Player", "Runnable"];

/// A spell base class split into template properties and cast parameters.
#[derive(Clone, Copy)]
pub struct SpellSource<'a> {
	pub category: &'a str,
	pub properties: &'a dyn ContentFamily,
	pub parameters: &'a dyn ContentFamily,
}

/// Every content family a regeneration run inspects.
#[derive(Clone)]
pub struct ContentSet<'a> {
	/// Spell base classes in harvest order.
	pub spells: Vec<SpellSource<'a>>,
	pub base_action: &'a dyn ContentFamily,
	pub compound_action: &'a dyn ContentFamily,
	pub actions: Vec<&'a dyn ContentFamily>,
	pub effect: &'a dyn ContentFamily,
	pub effectlib_base: &'a dyn ContentFamily,
	pub effectlib: Vec<&'a dyn ContentFamily>,
	pub wand: &'a dyn ContentFamily,
	pub mage_class: &'a dyn ContentFamily,
	pub modifier: &'a dyn ContentFamily,
	pub mob: &'a dyn ContentFamily,
	pub selector_option: &'a dyn ContentFamily,
	pub recipe: &'a dyn ContentFamily,
}

/// What a run looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestReport {
	/// Families whose fields were collected.
	pub scanned: usize,
	/// Abstract or deprecated classes.
	pub skipped: Vec<String>,
	/// Families that failed to report their fields.
	pub failed: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldNaming {
	AsIs,
	CamelCase,
}

/// One step of the regeneration pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
	Spells,
	Actions,
	Effect,
	EffectLib,
	Wand,
	MageClass,
	Modifier,
	Mob,
	SelectorOption,
	Recipe,
}

impl Stage {
	/// Every stage, in harvest order.
	pub const ALL: [Stage; 10] = [
		Stage::Spells,
		Stage::Actions,
		Stage::Effect,
		Stage::EffectLib,
		Stage::Wand,
		Stage::MageClass,
		Stage::Modifier,
		Stage::Mob,
		Stage::SelectorOption,
		Stage::Recipe,
	];
}

/// Runs every driver in `content` against `snapshot`.
///
/// # Errors
///
/// Registry failures are fatal: a field that would need more type-qualified
/// parameters than the configured limit, or a collection that references a
/// parameter that does not exist.
pub fn harvest(snapshot: &mut Snapshot, content: &ContentSet<'_>) -> Result<HarvestReport, RegistryError> {
	harvest_stages(snapshot, content, &Stage::ALL)
}

/// Runs the given `stages` of the pipeline in order.
pub fn harvest_stages(snapshot: &mut Snapshot, content: &ContentSet<'_>, stages: &[Stage]) -> Result<HarvestReport, RegistryError> {
	let mut harvester = Harvester {
		snapshot,
		report: HarvestReport::default(),
	};
	for stage in stages {
		harvester.stage(*stage, content)?;
	}

	let report = harvester.report;
	info!(
		scanned = report.scanned,
		skipped = report.skipped.len(),
		failed = report.failed.len(),
		"harvest finished"
	);
	Ok(report)
}

struct Harvester<'s> {
	snapshot: &'s mut Snapshot,
	report: HarvestReport,
}

impl Harvester<'_> {
	fn stage(&mut self, stage: Stage, content: &ContentSet<'_>) -> Result<(), RegistryError> {
		match stage {
			Stage::Spells => self.spells(&content.spells),
			Stage::Actions => self.actions(content),
			Stage::Effect => self.single(content.effect, EFFECT_PARAMETERS),
			Stage::EffectLib => self.effectlib(content),
			Stage::Wand => self.single(content.wand, WAND_PARAMETERS),
			Stage::MageClass => self.single(content.mage_class, CLASS_PARAMETERS),
			Stage::Modifier => self.single(content.modifier, MODIFIER_PARAMETERS),
			Stage::Mob => self.single(content.mob, MOB_PARAMETERS),
			Stage::SelectorOption => self.single(content.selector_option, OPTION_PARAMETERS),
			Stage::Recipe => self.single(content.recipe, RECIPE_PARAMETERS),
		}
	}

	fn spells(&mut self, spells: &[SpellSource<'_>]) -> Result<(), RegistryError> {
		let mut properties = ParameterCollection::new();
		let mut parameters = ParameterCollection::new();
		for spell in spells {
			self.snapshot.category(spell.category);
			if let Some(collected) = self.collect(spell.properties, FieldNaming::AsIs)? {
				self.merge_categorized(&mut properties, collected, spell.category)?;
			}
			if let Some(collected) = self.collect(spell.parameters, FieldNaming::AsIs)? {
				self.merge_categorized(&mut parameters, collected, spell.category)?;
			}
		}
		self.snapshot.put_collection(SPELL_PROPERTIES, properties)?;
		self.snapshot.put_collection(SPELL_PARAMETERS, parameters)
	}

	fn merge_categorized(
		&mut self,
		aggregate: &mut ParameterCollection,
		mut collected: ParameterCollection,
		category: &str,
	) -> Result<(), RegistryError> {
		collected.stamp_category(category, self.snapshot.store_mut().parameters_mut());
		aggregate.merge(&collected, self.snapshot.store().parameters())?;
		Ok(())
	}

	fn actions(&mut self, content: &ContentSet<'_>) -> Result<(), RegistryError> {
		let base = self.baseline(content.base_action, ACTION_PARAMETERS, FieldNaming::AsIs)?;
		let compound = self.baseline(content.compound_action, COMPOUND_ACTION_PARAMETERS, FieldNaming::AsIs)?;

		for family in sorted(&content.actions) {
			let traits = family.traits();
			if !self.should_scan(family, traits.is_abstract, traits.deprecated) {
				continue;
			}
			let Some(mut parameters) = self.collect(family, FieldNaming::AsIs)? else {
				continue;
			};
			parameters.remove_defaults(&base);

			let key = description_key(family.class_name(), "Action");
			let mut description = ContentDescription::new(key.clone(), family.class_name());
			description.name = display_name(&key);
			if traits.is_compound() {
				description.category = Some(self.snapshot.category(COMPOUND_CATEGORY).key().to_string());
				for handler in traits.handlers.iter().filter(|handler| *handler != INHERITED_HANDLER) {
					let handler_key = self.handler_parameter(handler)?;
					parameters.remove(handler);
					parameters.add(handler_key, None);
				}
				parameters.remove_defaults(&compound);
			}
			description.parameters = parameters;
			self.snapshot.put_description(ACTIONS_CATALOG, description)?;
		}
		Ok(())
	}

	/// Harvests a base family into `name` and returns it as the diff baseline.
	///
	/// When the family cannot be inspected the stored collection is kept and
	/// used instead.
	fn baseline(&mut self, family: &dyn ContentFamily, name: &str, naming: FieldNaming) -> Result<ParameterCollection, RegistryError> {
		match self.collect(family, naming)? {
			Some(collection) => {
				self.snapshot.put_collection(name, collection.clone())?;
				Ok(collection)
			}
			None => Ok(self.snapshot.collection(name).cloned().unwrap_or_default()),
		}
	}

	/// Registers the `<handler>_actions` parameter, replacing a plain string
	/// parameter named after the handler unless a stored section still lists it.
	fn handler_parameter(&mut self, handler: &str) -> Result<ParameterKey, RegistryError> {
		let referenced = self.snapshot.references_parameter(handler);
		let store = self.snapshot.store_mut();
		let action_list = store.resolve_rule(&ACTION_LIST);
		if store
			.get_parameter(handler)
			.is_some_and(|parameter| parameter.type_key() == "string")
		{
			if referenced {
				debug!(handler, "keeping string parameter still listed elsewhere");
			} else {
				debug!(handler, "replacing string parameter with action handler");
				store.remove_parameter(handler);
			}
		}

		let handler_key = ParameterKey::new(format!("{handler}_{INHERITED_HANDLER}"));
		if store.get_parameter(handler_key.as_str()).is_none() {
			info!(handler, "adding action handler");
			store.insert_parameter(Parameter::new(handler_key.clone(), handler, action_list))?;
		}
		Ok(handler_key)
	}

	fn effectlib(&mut self, content: &ContentSet<'_>) -> Result<(), RegistryError> {
		let base = self.baseline(content.effectlib_base, EFFECTLIB_PARAMETERS, FieldNaming::CamelCase)?;

		for family in sorted(&content.effectlib) {
			let traits = family.traits();
			if !self.should_scan(family, traits.is_abstract, traits.deprecated) {
				continue;
			}
			let Some(mut parameters) = self.collect(family, FieldNaming::CamelCase)? else {
				continue;
			};
			parameters.remove_defaults(&base);

			let key = description_key(family.class_name(), "Effect");
			let mut description = ContentDescription::new(key.clone(), family.class_name());
			description.name = display_name(&key);
			description.parameters = parameters;
			self.snapshot.put_description(EFFECTS_CATALOG, description)?;
		}
		Ok(())
	}

	/// Harvests one family into the top-level collection `name`.
	fn single(&mut self, family: &dyn ContentFamily, name: &str) -> Result<(), RegistryError> {
		match self.collect(family, FieldNaming::AsIs)? {
			Some(collection) => self.snapshot.put_collection(name, collection),
			None => Ok(()),
		}
	}

	fn should_scan(&mut self, family: &dyn ContentFamily, is_abstract: bool, deprecated: bool) -> bool {
		if is_abstract || deprecated {
			info!(family = family.class_name(), is_abstract, deprecated, "skipping");
			self.report.skipped.push(family.class_name().to_string());
			return false;
		}
		true
	}

	/// Registers every field of `family` and returns them as a collection.
	///
	/// Returns `None` when the family cannot report its fields.
	fn collect(&mut self, family: &dyn ContentFamily, naming: FieldNaming) -> Result<Option<ParameterCollection>, RegistryError> {
		info!(family = family.class_name(), "scanning");
		let fields = match family.fields() {
			Ok(fields) => fields,
			Err(error) => {
				warn!(family = family.class_name(), %error, "cannot inspect family; skipping");
				self.report.failed.push(family.class_name().to_string());
				return Ok(None);
			}
		};
		self.report.scanned += 1;

		let store = self.snapshot.store_mut();
		let mut collection = ParameterCollection::new();
		for field in fields {
			if matches!(field.shape, ValueShape::Object(class) if IGNORED_CLASSES.contains(&class)) {
				continue;
			}
			let name = match naming {
				FieldNaming::AsIs => field.name,
				FieldNaming::CamelCase => snake_key(&field.name),
			};
			let default = match field.default {
				Some(default) if !default.is_finite() => {
					warn!(family = family.class_name(), field = %name, "dropping non-finite default");
					None
				}
				default => default,
			};
			let key = store.get_or_create_parameter(&name, &field.shape)?;
			collection.add(key, default);
		}
		Ok(Some(collection))
	}
}

fn sorted<'a>(families: &[&'a dyn ContentFamily]) -> Vec<&'a dyn ContentFamily> {
	let mut families = families.to_vec();
	families.sort_by(|a, b| a.class_name().cmp(b.class_name()));
	families
}

/// Catalog key for a class: the class name without its family suffix, in snake case.
fn description_key(class_name: &str, suffix: &str) -> String {
	let stem = class_name.strip_suffix(suffix).filter(|stem| !stem.is_empty()).unwrap_or(class_name);
	snake_key(stem)
}

#[cfg(test)]
mod tests;
