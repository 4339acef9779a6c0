//! Go import block builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for a parenthesized Go import block.
///
/// Paths are grouped; groups are separated by a blank line, the way
/// `goimports` separates the standard library from everything else.
#[derive(Debug, Clone, Default)]
pub struct ImportBlock {
    groups: Vec<Vec<String>>,
}

impl ImportBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group of import paths. Empty groups are ignored.
    pub fn group<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        if !paths.is_empty() {
            self.groups.push(paths);
        }
        self
    }
}

impl Renderable for ImportBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            // Paths are inserted literally; no escaping.
            body.extend(group.iter().map(|path| CodeFragment::line(format!("\"{path}\""))));
        }

        vec![CodeFragment::block("import (", body, Some(")".to_string()))]
    }
}
