//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from the lints.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files that already had the generated content.
    pub unchanged: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => render_written(out, written),
            GenerationResult::Preview(preview) => render_preview(out, preview),
        }
    }
}

fn render_written(out: &mut dyn Output, written: &WrittenResult) {
    out.key_value("Output", &written.output_dir.display().to_string());

    if !written.written.is_empty() {
        out.newline();
        out.section(&format!("Generated ({})", written.written.len()));
        for name in &written.written {
            out.added_item(name);
        }
    }

    if !written.unchanged.is_empty() {
        out.newline();
        out.section(&format!("Unchanged ({})", written.unchanged.len()));
        for name in &written.unchanged {
            out.list_item(name);
        }
    }
}

fn render_preview(out: &mut dyn Output, preview: &PreviewResult) {
    for file in &preview.files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", preview.files.len()));
}
