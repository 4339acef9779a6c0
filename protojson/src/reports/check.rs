//! Check command report data structures.

use std::path::PathBuf;

use eyre::Result;
use protojson_codegen::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Report data from linting a descriptor set.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the descriptor set.
    pub descriptor_set: PathBuf,
    /// Number of proto files checked.
    pub file_count: usize,
    /// Number of types that would receive methods.
    pub type_count: usize,
    /// Everything the lints reported, in file order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Diagnostics as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.diagnostics)?)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                None => diag.message.clone(),
            };
            match diag.severity {
                Severity::Error => out.error(&msg),
                Severity::Warning => out.warning(&msg),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} files, {} types)",
                self.descriptor_set.display(),
                self.file_count,
                self.type_count
            ));
        }
    }
}
