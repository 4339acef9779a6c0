//! Schema unit and record type definitions.

use serde::{Deserialize, Serialize};

/// One input file's worth of schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaUnit {
    /// Source file name as passed to protoc (e.g. `a/b.proto`).
    pub name: String,
    /// Go package name used in the `package` clause.
    pub package: String,
    /// Record types in declaration order, nested types included.
    #[serde(default)]
    pub types: Vec<RecordType>,
}

impl SchemaUnit {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            types: Vec::new(),
        }
    }

    /// Append a record type, keeping declaration order.
    pub fn with_type(mut self, ty: RecordType) -> Self {
        self.types.push(ty);
        self
    }
}

/// A declared message type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    /// Declared name, as written in the schema.
    pub name: String,
    /// Enclosing message names, outermost first.
    #[serde(default)]
    pub outers: Vec<String>,
    /// Synthetic key/value type backing a map field.
    #[serde(default)]
    pub map_entry: bool,
}

impl RecordType {
    /// A top-level message.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outers: Vec::new(),
            map_entry: false,
        }
    }

    /// Set the enclosing message chain.
    pub fn nested_in<I, S>(mut self, outers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outers = outers.into_iter().map(Into::into).collect();
        self
    }

    /// Mark as a synthetic map-entry type.
    pub fn map_entry(mut self) -> Self {
        self.map_entry = true;
        self
    }
}

/// A record type that survived filtering, with its resolved Go names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    /// Canonical declaration name (e.g. `foo_bar` -> `FooBar`).
    pub name: String,
    /// Canonical enclosing names, outermost first.
    pub outers: Vec<String>,
    /// Fully-qualified Go type name (e.g. `Outer_Inner`).
    pub qualified_name: String,
}
