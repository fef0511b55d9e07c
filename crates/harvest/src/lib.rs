//! Harvesting drivers for the arcana parameter registry.
//!
//! Content families expose their configurable fields through
//! [`ContentFamily`]; [`harvest`] walks every family in a [`ContentSet`] and
//! feeds the discovered fields into a [`Snapshot`](arcana_registry::Snapshot).

/// Builtin content families and enumeration domains.
pub mod builtin;
mod error;
/// The content family capability trait and static family tables.
pub mod family;
/// The regeneration pipeline.
pub mod harvester;

pub use builtin::EnumCatalog;
pub use error::HarvestError;
pub use family::{ContentFamily, DiscoveredField, FamilyTraits, FieldDef, Literal, PropertyKeys, StaticFamily};
pub use harvester::{ContentSet, HarvestReport, SpellSource, Stage, harvest, harvest_stages};
