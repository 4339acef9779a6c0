use protojson_core::{GeneratedFile, file_stem};
use protojson_ir::{GenerationOptions, NamedType, SchemaUnit};

use super::{FILE_SUFFIX, Header, MessageMethods};
use crate::builder::CodeBuilder;

/// The `<name>.pb.json.go` file generated for one schema unit.
#[derive(Debug, Clone)]
pub struct JsonGoFile {
    source: String,
    package: String,
    types: Vec<NamedType>,
    options: GenerationOptions,
}

impl JsonGoFile {
    /// `types` must already be filtered and named.
    pub fn new(unit: &SchemaUnit, types: Vec<NamedType>, options: GenerationOptions) -> Self {
        Self {
            source: unit.name.clone(),
            package: unit.package.clone(),
            types,
            options,
        }
    }

    /// Types that receive methods, in emission order.
    pub fn types(&self) -> &[NamedType] {
        &self.types
    }

    fn header(&self) -> Header {
        let header = Header::new(&self.source, &self.package);
        // No imports without methods: Go rejects unused imports.
        if self.types.is_empty() {
            header
        } else {
            header.with_imports(&self.options.additional_imports)
        }
    }
}

impl GeneratedFile for JsonGoFile {
    fn name(&self) -> String {
        format!("{}{}", file_stem(&self.source), FILE_SUFFIX)
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(&self.header());
        for ty in &self.types {
            builder.emit(&MessageMethods::new(&ty.qualified_name, &self.options));
        }
        builder.build()
    }
}
