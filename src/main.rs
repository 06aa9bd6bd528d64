use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use domain::paths::Paths;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let paths = Paths::new(&cli.root);

    match &cli.command {
        Commands::Boot => commands::startup::handle_boot(&cli, &paths),
        Commands::Identity => commands::startup::handle_identity(&cli, &paths),
        Commands::Apps { command } => commands::apps::handle_apps(&cli, &paths, command),
        Commands::Flag { command } => commands::startup::handle_flag(&cli, &paths, command),
    }
}
