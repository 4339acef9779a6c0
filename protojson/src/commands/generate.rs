use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, OutputOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Serialized FileDescriptorSet (protoc --descriptor_set_out --include_imports)
    #[arg(short, long)]
    pub descriptor_set: PathBuf,

    /// Plugin parameter string, e.g. "emit_defaults,orig_name"
    #[arg(short, long, default_value = "")]
    pub param: String,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Proto file to generate (repeatable, defaults to every file in the set)
    #[arg(short, long = "file")]
    pub files: Vec<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let options = protojson_params::parse(&self.param).unwrap_or_exit();
        let set = ops::load_descriptor_set(&self.descriptor_set)?;
        let files = ops::select_files(&set, &self.files)?;

        let report = ops::generate(
            &files,
            &options,
            OutputOptions {
                output_dir: &self.out,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
