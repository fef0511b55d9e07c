//! Load, harvest, save.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use arcana_harvest::{ContentSet, EnumCatalog, harvest};
use arcana_registry::{RegistryConfig, Snapshot};
use tempfile::NamedTempFile;
use tracing::info;

/// Regenerates the snapshot at `path` from `content`.
///
/// The file is replaced atomically; on any error it is left untouched.
pub fn regenerate(path: &Path, regenerate: bool, config: RegistryConfig, content: &ContentSet<'_>) -> anyhow::Result<()> {
	let mut snapshot = if !regenerate && path.exists() {
		info!(path = %path.display(), "loading snapshot");
		let json = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
		Snapshot::load(&json, config).with_context(|| format!("failed to load {}", path.display()))?
	} else {
		info!(regenerate, "starting from an empty registry");
		Snapshot::new(config)
	};

	let report = harvest(&mut snapshot, content).context("harvest failed")?;
	let resolved = snapshot.resolve_options(&EnumCatalog);
	info!(scanned = report.scanned, enum_types = resolved, "harvest complete");

	let json = snapshot.to_json().context("failed to serialize snapshot")?;
	info!(path = %path.display(), "saving snapshot");
	write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let mut file = NamedTempFile::new_in(dir).with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
	file.write_all(contents)?;
	file.as_file().sync_all()?;
	file.persist(path)
		.with_context(|| format!("failed to replace {}", path.display()))?;
	Ok(())
}
