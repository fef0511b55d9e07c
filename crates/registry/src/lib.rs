//! Parameter metadata registry.
//!
//! Consolidates the configurable fields discovered across every content
//! family into one deduplicated set of named parameters, each tagged with a
//! canonical type, and persists it as a stable JSON snapshot.
//!
//! # Layout
//!
//! - [`classify`] - Field name and value shape to canonical type key
//! - [`types`] - Canonical types, deduplicated by key
//! - [`parameters`] - Canonical parameters, deduplicated by key
//! - [`store`] - Collision-resolving handle used by harvesting drivers
//! - [`collection`] - Ordered parameter references with defaults
//! - [`options`] - Enum option resolution
//! - [`snapshot`] - Load, reconcile and save

/// Harvest category records.
pub mod category;
/// Canonical type classification and the field-name override table.
pub mod classify;
/// Ordered `(parameter, default)` collections.
pub mod collection;
/// Classification tunables.
pub mod config;
/// Described content classes grouped into catalogs.
pub mod description;
/// Error types.
pub mod error;
/// String-backed registry keys.
pub mod key;
/// Enumeration option resolution.
pub mod options;
/// Canonical parameter records.
pub mod parameters;
/// Snapshot persistence and reconciliation.
pub mod snapshot;
/// The collision-resolving registry handle.
pub mod store;
/// Canonical type records.
pub mod types;

pub use category::Category;
pub use collection::ParameterCollection;
pub use config::RegistryConfig;
pub use description::ContentDescription;
pub use error::{CorruptSnapshot, ReferenceKind, RegistryError, Result, UnresolvedReference};
pub use key::{ParameterKey, TypeKey};
pub use options::{EnumSource, resolve_enum_options};
pub use parameters::{Parameter, ParameterRegistry};
pub use snapshot::Snapshot;
pub use store::ParameterStore;
pub use types::{ParameterType, TypeKind, TypeRegistry};
