use std::path::PathBuf;

use blockgen_schema::Format;
use clap::Args;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use eyre::{Context, Result};

use crate::{
    ops::{self, InitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Block name, e.g. HeroBanner (prompted for when omitted)
    pub name: Option<String>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Description file format
    #[arg(short, long, default_value = "json")]
    pub format: Format,

    /// Start with a repeater
    #[arg(long)]
    pub repeater: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let (name, repeater) = match &self.name {
            Some(name) => (name.clone(), self.repeater),
            None => {
                let name = Self::prompt_name()?;
                let repeater = self.repeater || Self::prompt_repeater()?;
                (name, repeater)
            }
        };

        let report = ops::init(InitOptions {
            name: &name,
            output_dir: &self.output,
            format: self.format,
            repeater,
        })?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn prompt_name() -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Block name")
            .interact_text()
            .wrap_err("Failed to get block name")
    }

    fn prompt_repeater() -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Add a repeater?")
            .default(false)
            .interact()
            .wrap_err("Failed to get repeater choice")
    }
}
