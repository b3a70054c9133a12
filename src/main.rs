use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use basecoat::cli::Cli;
use basecoat::config;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();

    debug!("retrieving configuration");
    let mut config = config::load_config()?;
    config.apply_overrides(args.scheme, args.scheme_source);

    basecoat::run(&config)?;

    Ok(())
}
