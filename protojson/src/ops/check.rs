//! Check operation - lint a descriptor set without generating.

use std::path::Path;

use eyre::Result;
use prost_types::FileDescriptorProto;
use protojson_codegen::{
    lint::{Lint, default_lints},
    lower::lower_file,
    naming::eligible_types,
};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Lowers each file, names its types and runs the default lints over them.
pub fn check(descriptor_set: &Path, files: &[&FileDescriptorProto]) -> Result<CheckReport> {
    let lints: Vec<Box<dyn Lint>> = default_lints();
    let mut diagnostics = Vec::new();
    let mut type_count = 0;

    for file in files {
        let unit = lower_file(file)?;
        let types = eligible_types(&unit);
        type_count += types.len();

        for lint in &lints {
            lint.check(&unit, &types, &mut diagnostics);
        }
    }

    Ok(CheckReport {
        descriptor_set: descriptor_set.to_path_buf(),
        file_count: files.len(),
        type_count,
        diagnostics,
    })
}
