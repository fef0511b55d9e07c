use std::fs;

use arcana_harvest::builtin;
use arcana_registry::RegistryConfig;
use clap::Parser;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::cli::Cli;
use crate::config::Config;
use crate::run::regenerate;

#[test]
fn test_cli_parses_flags() {
	let cli = Cli::try_parse_from(["arcana-meta", "meta.json", "--regenerate", "--max-field-types", "2", "-v"]).unwrap();
	assert_eq!(cli.snapshot.to_str(), Some("meta.json"));
	assert!(cli.regenerate);
	assert!(cli.verbose);
	assert_eq!(cli.max_field_types, Some(2));
	assert_eq!(cli.config, None);
}

#[test]
fn test_cli_requires_snapshot_path() {
	assert!(Cli::try_parse_from(["arcana-meta"]).is_err());
}

#[test]
fn test_config_parses_registry_table() {
	let config = Config::parse("[registry]\nmax_field_types = 6\n").unwrap();
	assert_eq!(config.registry.max_field_types, 6);
	assert_eq!(Config::parse("").unwrap(), Config::default());
	assert!(Config::parse("[registry]\nunknown = 1\n").is_err());
}

#[test]
fn test_missing_snapshot_is_created() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("meta.json");

	regenerate(&path, false, RegistryConfig::default(), &builtin::content()).unwrap();

	let json = fs::read_to_string(&path).unwrap();
	assert!(json.ends_with("}\n"));
	let value: serde_json::Value = serde_json::from_str(&json).unwrap();
	assert!(value["types"]["material"]["options"].is_array());
}

#[test]
fn test_second_run_is_byte_identical() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("meta.json");

	regenerate(&path, false, RegistryConfig::default(), &builtin::content()).unwrap();
	let first = fs::read_to_string(&path).unwrap();
	regenerate(&path, false, RegistryConfig::default(), &builtin::content()).unwrap();
	let second = fs::read_to_string(&path).unwrap();

	assert_eq!(second, first);
}

#[test]
fn test_corrupt_snapshot_is_left_untouched() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("meta.json");
	let corrupt = r#"{ "parameters": { "radius": { "field": "radius", "type": "integer" } } }"#;
	fs::write(&path, corrupt).unwrap();

	let err = regenerate(&path, false, RegistryConfig::default(), &builtin::content()).unwrap_err();

	assert!(format!("{err:#}").contains("references missing type \"integer\""), "{err:#}");
	assert_eq!(fs::read_to_string(&path).unwrap(), corrupt);
}

#[test]
fn test_regenerate_ignores_existing_snapshot() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("meta.json");
	fs::write(&path, "not json").unwrap();

	regenerate(&path, true, RegistryConfig::default(), &builtin::content()).unwrap();

	assert!(fs::read_to_string(&path).unwrap().starts_with('{'));
}

#[test]
fn test_collision_limit_is_fatal() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("meta.json");

	let err = regenerate(&path, false, RegistryConfig { max_field_types: 1 }, &builtin::content()).unwrap_err();

	assert!(format!("{err:#}").contains("\"locked\""), "{err:#}");
	assert!(!path.exists());
}
