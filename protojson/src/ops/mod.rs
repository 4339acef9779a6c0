//! Core operations.
//!
//! This module contains the business logic behind the plugin entry point
//! and the subcommands, separated from argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod plugin;

use std::path::Path;

pub use check::check;
use eyre::{Context, Result, eyre};
pub use generate::{OutputOptions, generate};
pub use plugin::{decode_request, respond};
use prost::Message;
use prost_types::{FileDescriptorProto, FileDescriptorSet};

/// Read a serialized `FileDescriptorSet`, as written by
/// `protoc --descriptor_set_out`.
pub fn load_descriptor_set(path: &Path) -> Result<FileDescriptorSet> {
    let bytes =
        std::fs::read(path).wrap_err_with(|| format!("Failed to read '{}'", path.display()))?;
    FileDescriptorSet::decode(bytes.as_slice())
        .wrap_err_with(|| format!("Failed to decode descriptor set '{}'", path.display()))
}

/// Pick the requested files from a set, in the requested order.
///
/// With no names, every file in the set is selected.
pub fn select_files<'a>(
    set: &'a FileDescriptorSet,
    names: &[String],
) -> Result<Vec<&'a FileDescriptorProto>> {
    if names.is_empty() {
        return Ok(set.file.iter().collect());
    }

    names
        .iter()
        .map(|name| {
            set.file
                .iter()
                .find(|f| f.name() == name.as_str())
                .ok_or_else(|| eyre!("no descriptor for '{}' in the descriptor set", name))
        })
        .collect()
}
