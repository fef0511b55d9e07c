//! Value shapes, default values, and key helpers shared by the harvesting
//! drivers and the parameter registry.

/// Lower-snake-case key derivation and display names.
pub mod case;
/// Runtime shapes of discovered values.
pub mod shape;
/// Default values reported alongside discovered fields.
pub mod value;

pub use case::{display_name, snake_key};
pub use shape::{Primitive, ValueShape};
pub use value::DefaultValue;
