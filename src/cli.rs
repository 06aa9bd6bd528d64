use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Folio e-reader boot core")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = "/",
        help = "Filesystem prefix for all device paths"
    )]
    pub root: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Boot,
    Identity,
    Apps {
        #[command(subcommand)]
        command: AppsCommands,
    },
    Flag {
        #[command(subcommand)]
        command: FlagCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppsCommands {
    Aggregate,
    Disaggregate,
}

#[derive(Subcommand, Debug)]
pub enum FlagCommands {
    Get { path: String },
    Set { path: String, value: String },
    Check { path: String },
}
