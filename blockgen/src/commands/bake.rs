use std::path::PathBuf;

use blockgen_schema::BlockDescription;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to the block description (.json or .toml)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Bundle both files into a zip archive
    #[arg(long)]
    pub zip: bool,

    /// Preview generated code without writing to disk
    #[arg(long, conflicts_with = "zip")]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let block = BlockDescription::from_file(&self.input).unwrap_or_exit();

        let report = ops::bake(
            &block,
            BakeOptions {
                output_dir: &self.output,
                zip: self.zip,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
