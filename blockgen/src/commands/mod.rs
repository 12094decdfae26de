mod bake;
mod check;
mod completions;
mod init;
mod library;

use std::path::PathBuf;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use library::LibraryCommand;

/// Extension trait for exiting on description errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for blockgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "blockgen")]
#[command(version)]
#[command(about = "Generate PrettyBlocks blocks from JSON or TOML descriptions")]
pub(crate) struct Cli {
    /// Path to the block library
    #[arg(
        long,
        global = true,
        env = "BLOCKGEN_LIBRARY",
        default_value = ".blockgen/library.json"
    )]
    library: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Bake(cmd) => cmd.run(),
            Commands::Library(cmd) => cmd.run(&self.library),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter block description
    Init(InitCommand),

    /// Validate a block description without generating code
    Check(CheckCommand),

    /// Generate the PHP definition and Smarty template of a block
    Bake(BakeCommand),

    /// Manage saved block descriptions
    Library(LibraryCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
