use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Serialized FileDescriptorSet to lint
    #[arg(short, long)]
    pub descriptor_set: PathBuf,

    /// Proto file to check (repeatable, defaults to every file in the set)
    #[arg(short, long = "file")]
    pub files: Vec<String>,

    /// Print diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let set = ops::load_descriptor_set(&self.descriptor_set)?;
        let files = ops::select_files(&set, &self.files)?;
        let report = ops::check(&self.descriptor_set, &files)?;

        if self.json {
            println!("{}", report.to_json()?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
