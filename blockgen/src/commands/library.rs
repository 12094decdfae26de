use std::path::{Path, PathBuf};

use blockgen_library::{Error, JsonFileStore};
use blockgen_schema::{BlockDescription, Issue};
use clap::{Args, Subcommand};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Output, Report, TerminalOutput},
};

#[derive(Args)]
pub struct LibraryCommand {
    #[command(subcommand)]
    command: LibraryCommands,
}

#[derive(Subcommand)]
enum LibraryCommands {
    /// Save a description, overwriting the record with the same code
    Save {
        /// Path to the block description (.json or .toml)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Replace a saved description
    Update {
        /// Library item id
        id: String,

        /// Path to the block description (.json or .toml)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// List saved descriptions, most recent first
    List,

    /// Print a saved description as JSON
    Show {
        /// Library item id
        id: String,
    },

    /// Delete a saved description
    Delete {
        /// Library item id
        id: String,
    },

    /// Generate the zip archive of a saved description
    Bake {
        /// Library item id
        id: String,

        /// Output directory (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

impl LibraryCommand {
    pub fn run(&self, library: &Path) -> Result<()> {
        let store = JsonFileStore::new(library);
        tracing::debug!(path = %store.path().display(), "opened library");

        match self.execute(&store) {
            Ok(report) => report.render(&mut TerminalOutput::new()),
            Err(err) => match err.downcast_ref::<Error>() {
                Some(Error::InvalidSavedConfig { id, issues }) => {
                    render_invalid(&mut TerminalOutput::new(), id, issues);
                    std::process::exit(1);
                }
                _ => return Err(err),
            },
        }

        Ok(())
    }

    fn execute(&self, store: &JsonFileStore) -> Result<Box<dyn Report>> {
        Ok(match &self.command {
            LibraryCommands::Save { input } => {
                let block = BlockDescription::from_file(input).unwrap_or_exit();
                Box::new(ops::library::save(store, &block)?)
            }
            LibraryCommands::Update { id, input } => {
                let block = BlockDescription::from_file(input).unwrap_or_exit();
                Box::new(ops::library::update(store, id, &block)?)
            }
            LibraryCommands::List => Box::new(ops::library::list(store)?),
            LibraryCommands::Show { id } => Box::new(ops::library::show(store, id)?),
            LibraryCommands::Delete { id } => Box::new(ops::library::delete(store, id)?),
            LibraryCommands::Bake { id, output } => {
                Box::new(ops::library::bake_saved(store, id, output)?)
            }
        })
    }
}

/// List the issues of a saved config that no longer validates.
fn render_invalid(out: &mut dyn Output, id: &str, issues: &[Issue]) {
    out.error(&format!("saved config of library item '{}' is invalid", id));
    for issue in issues {
        out.error(&issue.to_string());
    }
}
