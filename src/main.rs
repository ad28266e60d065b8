//! moments - check and inspect Open-Moments site settings.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use moments::{
    cli::{self, Cli, Commands},
    config::SiteConfig,
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        // init writes the config, so it must not try to load one
        Commands::Init { name, dry } => cli::init::new_site(&cli.config, name.as_deref(), *dry),
        command => {
            let config = SiteConfig::load(&cli)?;
            run(command, &config)
        }
    }
}

fn run(command: &Commands, config: &SiteConfig) -> Result<()> {
    match command {
        Commands::Check { .. } => cli::check::check_site(config),
        Commands::Show { format, .. } => cli::show::show_config(config, *format),
        Commands::Get { key, .. } => cli::show::get_value(config, key),
        Commands::Init { .. } => Ok(()),
    }
}
