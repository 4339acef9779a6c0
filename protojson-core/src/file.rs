use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Path of the file relative to the output root (e.g. `foo/bar.pb.json.go`)
    fn name(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Absolute path of the file under `base`
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.name())
    }

    /// Write the file to disk, skipping the write when the content is unchanged
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        if std::fs::read_to_string(&path).is_ok_and(|existing| existing == content) {
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}
