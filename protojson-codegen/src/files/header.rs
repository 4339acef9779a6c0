use crate::{
    ast::ImportBlock,
    builder::{CodeFragment, Renderable},
};

use super::{BYTES_IMPORT, GENERATOR_NAME, JSONPB_IMPORT};

/// Provenance comment, package clause and (optionally) the import block.
#[derive(Debug, Clone)]
pub struct Header {
    source: String,
    package: String,
    imports: Option<ImportBlock>,
}

impl Header {
    pub fn new(source: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            package: package.into(),
            imports: None,
        }
    }

    /// Attach the import block: `bytes`, then jsonpb followed by `additional`.
    pub fn with_imports(mut self, additional: &[String]) -> Self {
        let third_party =
            std::iter::once(JSONPB_IMPORT.to_string()).chain(additional.iter().cloned());
        self.imports = Some(ImportBlock::new().group([BYTES_IMPORT]).group(third_party));
        self
    }
}

impl Renderable for Header {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::comment(format!("Code generated by {GENERATOR_NAME}. DO NOT EDIT.")),
            CodeFragment::comment(format!("source: {}", self.source)),
            CodeFragment::Blank,
            CodeFragment::line(format!("package {}", self.package)),
        ];

        if let Some(imports) = &self.imports {
            fragments.push(CodeFragment::Blank);
            fragments.extend(imports.to_fragments());
        }

        fragments
    }
}
