mod check;
mod generate;

use std::io::{Read, Write};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use generate::GenerateCommand;

use crate::ops;

/// Extension trait for exiting on parameter errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for protojson_params::Result<T> {
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

/// Without a subcommand the binary acts as a protoc plugin: it reads a
/// `CodeGeneratorRequest` from stdin and writes the response to stdout.
#[derive(Parser)]
#[command(name = "protoc-gen-go-json")]
#[command(version)]
#[command(about = "Generate MarshalJSON/UnmarshalJSON methods for Go protobuf messages")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => Self::run_plugin(),
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
        }
    }

    fn run_plugin() -> Result<()> {
        let mut input = Vec::new();
        std::io::stdin()
            .read_to_end(&mut input)
            .wrap_err("Failed to read request from stdin")?;

        let request = ops::decode_request(&input)?;
        let options = protojson_params::parse(request.parameter()).unwrap_or_exit();
        let response = ops::respond(&request, &options)?;

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&response)
            .and_then(|()| stdout.flush())
            .wrap_err("Failed to write response to stdout")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate files from a serialized FileDescriptorSet
    Generate(GenerateCommand),

    /// Run the lints over a FileDescriptorSet without writing anything
    Check(CheckCommand),
}
