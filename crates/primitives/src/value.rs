use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default value observed for a field on a freshly constructed content object.
///
/// Serialized untagged so snapshots carry plain JSON values. Integers are tried
/// before doubles, so `5` and `5.0` stay distinct across a save/load cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
	Bool(bool),
	Int(i64),
	Double(f64),
	String(String),
	List(Vec<DefaultValue>),
	Map(BTreeMap<String, DefaultValue>),
}

impl From<bool> for DefaultValue {
	fn from(value: bool) -> Self {
		DefaultValue::Bool(value)
	}
}

impl From<i64> for DefaultValue {
	fn from(value: i64) -> Self {
		DefaultValue::Int(value)
	}
}

impl From<i32> for DefaultValue {
	fn from(value: i32) -> Self {
		DefaultValue::Int(i64::from(value))
	}
}

impl From<&str> for DefaultValue {
	fn from(value: &str) -> Self {
		DefaultValue::String(value.to_string())
	}
}

impl From<String> for DefaultValue {
	fn from(value: String) -> Self {
		DefaultValue::String(value)
	}
}

impl DefaultValue {
	/// A double default, or `None` for NaN and infinities, which JSON cannot carry.
	pub fn double(value: f64) -> Option<Self> {
		value.is_finite().then_some(DefaultValue::Double(value))
	}

	/// Whether every number in the value, nested ones included, is finite.
	pub fn is_finite(&self) -> bool {
		match self {
			DefaultValue::Double(value) => value.is_finite(),
			DefaultValue::List(items) => items.iter().all(DefaultValue::is_finite),
			DefaultValue::Map(entries) => entries.values().all(DefaultValue::is_finite),
			DefaultValue::Bool(_) | DefaultValue::Int(_) | DefaultValue::String(_) => true,
		}
	}
}
