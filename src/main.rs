//! Binary entry point for the token sprayer.

// std
use std::io;
// crates.io
use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use token_sprayer::{bundle::TokenBundle, cli::Args, spray::Sprayer};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let args = Args::parse();

	init_tracing(args.quiet);

	let config = args.resolve()?;
	// A missing or malformed bundle aborts here with exit code 1, before any request
	// is scheduled.
	let bundle = TokenBundle::load(&args.json_file)?;

	if !args.quiet {
		println!("Proxy : {}", args.proxy);
		println!("Target: {}", config.target);
		println!("JSON  : {}", args.json_file.display());
		println!("Launching background requests...");
	}

	let sprayer = Sprayer::new(config)?;
	let scheduled = sprayer.spray(&bundle).await;

	if !args.quiet {
		println!(
			"Launched {scheduled} background requests. Check your proxy history for highlights."
		);
	}

	Ok(())
}

fn init_tracing(quiet: bool) {
	let default_directive = if quiet { "error" } else { "info" };
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
