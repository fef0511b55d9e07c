//! Configuration file loading.
//!
//! ```toml
//! [registry]
//! max_field_types = 4
//! ```

use std::path::Path;

use anyhow::Context;
use arcana_registry::RegistryConfig;
use serde::Deserialize;

/// Contents of the `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub registry: RegistryConfig,
}

impl Config {
	pub fn parse(text: &str) -> anyhow::Result<Self> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let text = std::fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
		Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
	}
}
