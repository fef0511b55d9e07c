use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "arcana-meta")]
#[command(about = "Regenerate the parameter metadata snapshot")]
#[command(version)]
pub struct Cli {
	/// Snapshot file to update in place
	#[arg(value_name = "SNAPSHOT")]
	pub snapshot: PathBuf,

	/// Start from an empty registry instead of the existing snapshot
	#[arg(long)]
	pub regenerate: bool,

	/// TOML configuration file
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Maximum number of parameters a single field name may be split into
	#[arg(long, value_name = "N")]
	pub max_field_types: Option<usize>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
