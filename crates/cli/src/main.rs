//! `arcana-meta`: regenerates the parameter metadata snapshot.

mod cli;
mod config;
mod run;
#[cfg(test)]
mod tests;

use clap::Parser;
use cli::Cli;
use config::Config;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let mut config = match &cli.config {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};
	if let Some(limit) = cli.max_field_types {
		config.registry.max_field_types = limit;
	}

	run::regenerate(&cli.snapshot, cli.regenerate, config.registry, &arcana_harvest::builtin::content())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("arcana_meta=debug,arcana_registry=debug,arcana_harvest=debug,info")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
