use serde::{Deserialize, Serialize};

/// Scalar kinds a discovered field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
	Boolean,
	Integer,
	Long,
	Float,
	Double,
	String,
}

impl Primitive {
	pub const ALL: [Primitive; 6] = [
		Primitive::Boolean,
		Primitive::Integer,
		Primitive::Long,
		Primitive::Float,
		Primitive::Double,
		Primitive::String,
	];

	/// Registry key of the canonical type for this primitive.
	pub const fn key(self) -> &'static str {
		match self {
			Primitive::Boolean => "boolean",
			Primitive::Integer => "integer",
			Primitive::Long => "long",
			Primitive::Float => "float",
			Primitive::Double => "double",
			Primitive::String => "string",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|primitive| primitive.key() == key)
	}

	pub const fn is_numeric(self) -> bool {
		matches!(self, Primitive::Integer | Primitive::Long | Primitive::Float | Primitive::Double)
	}
}

impl std::fmt::Display for Primitive {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.key())
	}
}

/// Runtime shape of a value observed on a content object.
///
/// Shapes are `Copy` and reference their components statically so content
/// tables can declare them in `const` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
	Primitive(Primitive),
	/// A closed enumeration, named by its (possibly nested, dot-separated) type name.
	Enum(&'static str),
	/// An opaque structured reference type such as `Vector`.
	Object(&'static str),
	List(&'static ValueShape),
	Map(&'static ValueShape, &'static ValueShape),
	/// Nothing is known about the value; classified as a plain string.
	Unknown,
}

impl ValueShape {
	pub const BOOLEAN: ValueShape = ValueShape::Primitive(Primitive::Boolean);
	pub const INTEGER: ValueShape = ValueShape::Primitive(Primitive::Integer);
	pub const LONG: ValueShape = ValueShape::Primitive(Primitive::Long);
	pub const FLOAT: ValueShape = ValueShape::Primitive(Primitive::Float);
	pub const DOUBLE: ValueShape = ValueShape::Primitive(Primitive::Double);
	pub const STRING: ValueShape = ValueShape::Primitive(Primitive::String);

	pub const fn is_numeric(&self) -> bool {
		match self {
			ValueShape::Primitive(primitive) => primitive.is_numeric(),
			_ => false,
		}
	}
}
