//! Generation options threaded into every emitted method body.

use serde::{Deserialize, Serialize};

/// Codec configuration for the generated `MarshalJSON`/`UnmarshalJSON` pair.
///
/// Every field is required; defaults are the parameter parser's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Render enum values as integers instead of names.
    pub enums_as_ints: bool,
    /// Render fields that hold their zero value.
    pub emit_defaults: bool,
    /// Use the proto field names instead of lowerCamelCase JSON names.
    pub orig_name: bool,
    /// Go expression called as `<unmarshaler>(io.Reader, proto.Message) error`.
    pub unmarshaler: String,
    /// Extra import paths appended to the import block, in order.
    pub additional_imports: Vec<String>,
}

impl GenerationOptions {
    pub fn new(unmarshaler: impl Into<String>) -> Self {
        Self {
            enums_as_ints: false,
            emit_defaults: false,
            orig_name: false,
            unmarshaler: unmarshaler.into(),
            additional_imports: Vec::new(),
        }
    }

    pub fn enums_as_ints(mut self, value: bool) -> Self {
        self.enums_as_ints = value;
        self
    }

    pub fn emit_defaults(mut self, value: bool) -> Self {
        self.emit_defaults = value;
        self
    }

    pub fn orig_name(mut self, value: bool) -> Self {
        self.orig_name = value;
        self
    }

    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.additional_imports.push(path.into());
        self
    }
}
