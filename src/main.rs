use anyhow::{Context, Result};
use clap::Parser;

use belt::cli::{Cli, Commands};
use belt::handlers;
use belt::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with verbosity level
    tracing_subscriber::fmt()
        .with_max_level(cli.get_log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting belt with command: {:?}", cli.command);

    let mut config =
        Config::load_with_env(&cli.env_file).context("Failed to load belt configuration")?;
    if cli.verbose > 0 {
        config.verbose = true;
    }
    config.apply();

    match cli.command {
        Commands::Contains { needle, items } => {
            println!("{}", handlers::handle_contains(&needle, &items))
        }
        Commands::HasPrefix { value, prefixes } => {
            println!("{}", handlers::handle_has_prefix(&value, &prefixes))
        }
        Commands::HasSuffix { value, suffixes } => {
            println!("{}", handlers::handle_has_suffix(&value, &suffixes))
        }
        Commands::Check { error, context } => handlers::handle_check(error, context),
        Commands::Debug { words } => handlers::handle_debug(&words),
    }

    Ok(())
}
