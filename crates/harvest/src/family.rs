//! The capability boundary between content families and the registry.
//!
//! Each family reports the fields a freshly constructed instance exposes,
//! along with the value shape and default of every field.

use arcana_primitives::{DefaultValue, ValueShape};

use crate::error::HarvestError;

/// One configurable field discovered on a content instance.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredField {
	pub name: String,
	pub shape: ValueShape,
	pub default: Option<DefaultValue>,
}

impl DiscoveredField {
	pub fn new(name: impl Into<String>, shape: ValueShape, default: Option<DefaultValue>) -> Self {
		Self {
			name: name.into(),
			shape,
			default,
		}
	}
}

/// Class-level facts that decide how a family is harvested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyTraits {
	/// Abstract classes cannot be instantiated and are skipped.
	pub is_abstract: bool,
	/// Deprecated classes are skipped.
	pub deprecated: bool,
	/// Keys of the nested action lists a compound action runs. Empty for
	/// everything that is not a compound action.
	pub handlers: Vec<String>,
}

impl FamilyTraits {
	pub fn is_compound(&self) -> bool {
		!self.handlers.is_empty()
	}
}

/// A content class that can be inspected for configurable fields.
pub trait ContentFamily {
	/// Simple class name, e.g. `DamageAction`.
	fn class_name(&self) -> &str;

	fn traits(&self) -> FamilyTraits {
		FamilyTraits::default()
	}

	/// Fields exposed by a default instance.
	///
	/// # Errors
	///
	/// [`HarvestError`] when no instance can be constructed or a field cannot be read.
	fn fields(&self) -> Result<Vec<DiscoveredField>, HarvestError>;
}

/// A default value literal usable in `const` tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
	None,
	Bool(bool),
	Int(i64),
	Double(f64),
	Str(&'static str),
}

impl Literal {
	pub fn to_default(self) -> Option<DefaultValue> {
		match self {
			Literal::None => None,
			Literal::Bool(value) => Some(DefaultValue::Bool(value)),
			Literal::Int(value) => Some(DefaultValue::Int(value)),
			Literal::Double(value) => DefaultValue::double(value),
			Literal::Str(value) => Some(DefaultValue::from(value)),
		}
	}
}

/// A field declared in a static table.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
	pub name: &'static str,
	pub shape: ValueShape,
	pub default: Literal,
}

/// Shorthand for [`FieldDef`] literals.
pub const fn field(name: &'static str, shape: ValueShape, default: Literal) -> FieldDef {
	FieldDef { name, shape, default }
}

/// A content family described by a static field table.
#[derive(Debug, Clone, Copy)]
pub struct StaticFamily {
	pub class_name: &'static str,
	pub is_abstract: bool,
	pub deprecated: bool,
	pub handlers: &'static [&'static str],
	pub fields: &'static [FieldDef],
}

impl StaticFamily {
	pub const fn new(class_name: &'static str, fields: &'static [FieldDef]) -> Self {
		Self {
			class_name,
			is_abstract: false,
			deprecated: false,
			handlers: &[],
			fields,
		}
	}

	pub const fn compound(class_name: &'static str, handlers: &'static [&'static str], fields: &'static [FieldDef]) -> Self {
		Self {
			handlers,
			..Self::new(class_name, fields)
		}
	}

	pub const fn abstract_class(self) -> Self {
		Self { is_abstract: true, ..self }
	}

	pub const fn deprecated(self) -> Self {
		Self { deprecated: true, ..self }
	}
}

impl ContentFamily for StaticFamily {
	fn class_name(&self) -> &str {
		self.class_name
	}

	fn traits(&self) -> FamilyTraits {
		FamilyTraits {
			is_abstract: self.is_abstract,
			deprecated: self.deprecated,
			handlers: self.handlers.iter().map(|handler| handler.to_string()).collect(),
		}
	}

	fn fields(&self) -> Result<Vec<DiscoveredField>, HarvestError> {
		if self.is_abstract {
			return Err(HarvestError::Instantiation {
				class_name: self.class_name.to_string(),
				reason: "class is abstract".to_string(),
			});
		}
		Ok(self
			.fields
			.iter()
			.map(|def| DiscoveredField::new(def.name, def.shape, def.default.to_default()))
			.collect())
	}
}

/// A family that only publishes a list of property keys.
///
/// Such families read their configuration untyped, so every key is reported
/// with an unknown shape and classified by name alone.
#[derive(Debug, Clone, Copy)]
pub struct PropertyKeys {
	pub class_name: &'static str,
	pub keys: &'static [&'static str],
}

impl ContentFamily for PropertyKeys {
	fn class_name(&self) -> &str {
		self.class_name
	}

	fn fields(&self) -> Result<Vec<DiscoveredField>, HarvestError> {
		Ok(self
			.keys
			.iter()
			.map(|key| DiscoveredField::new(*key, ValueShape::Unknown, None))
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	static FIELDS: &[FieldDef] = &[
		field("radius", ValueShape::INTEGER, Literal::Int(3)),
		field("target", ValueShape::STRING, Literal::None),
	];

	#[test]
	fn test_static_family_reports_defaults() {
		let family = StaticFamily::new("SphereAction", FIELDS);
		let fields = family.fields().unwrap();
		assert_eq!(fields[0], DiscoveredField::new("radius", ValueShape::INTEGER, Some(DefaultValue::Int(3))));
		assert_eq!(fields[1].default, None);
		assert!(!family.traits().is_compound());
	}

	#[test]
	fn test_abstract_family_cannot_be_instantiated() {
		let family = StaticFamily::new("BaseShapeEffect", FIELDS).abstract_class();
		assert!(family.traits().is_abstract);
		assert!(matches!(family.fields(), Err(HarvestError::Instantiation { .. })));
	}

	#[test]
	fn test_compound_traits_list_handlers() {
		let family = StaticFamily::compound("CheckAction", &["actions", "fail"], FIELDS);
		assert_eq!(family.traits().handlers, vec!["actions".to_string(), "fail".to_string()]);
	}

	#[test]
	fn test_non_finite_literal_has_no_default() {
		assert_eq!(Literal::Double(f64::NAN).to_default(), None);
		assert_eq!(Literal::Double(f64::INFINITY).to_default(), None);
		assert_eq!(Literal::Double(0.25).to_default(), Some(DefaultValue::Double(0.25)));
	}

	#[test]
	fn test_property_keys_are_unknown_shaped() {
		let family = PropertyKeys {
			class_name: "Wand",
			keys: &["mana", "mode"],
		};
		let fields = family.fields().unwrap();
		assert!(fields.iter().all(|field| field.shape == ValueShape::Unknown && field.default.is_none()));
	}
}
