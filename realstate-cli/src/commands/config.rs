use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use realstate_server::config::DEFAULT_CONFIG_PATH;
use realstate_server::AppConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Load and validate the config, then print the effective values
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the configuration file
    #[arg(long, short = 'c', env = "REALSTATE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Check(args) => run_check(args),
    }
}

fn run_check(args: CheckArgs) -> Result<()> {
    let config = AppConfig::load(&args.config)
        .with_context(|| format!("Invalid config at {}", args.config.display()))?;

    let rendered =
        toml::to_string_pretty(&config.redacted()).context("Failed to render config")?;

    println!("# {} (environment overrides applied)", args.config.display());
    print!("{}", rendered);
    Ok(())
}
