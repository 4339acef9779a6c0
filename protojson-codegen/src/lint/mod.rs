//! Lints over the named type list.
//!
//! Lints never change the generated output; they only report.

mod diagnostic;
mod duplicate_type_name;

pub use diagnostic::{Diagnostic, Severity};
pub use duplicate_type_name::DuplicateTypeNameLint;
use protojson_ir::{NamedType, SchemaUnit};

/// A lint that checks a schema unit's named types for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the named types and add any diagnostics.
    fn check(&self, unit: &SchemaUnit, types: &[NamedType], diagnostics: &mut Vec<Diagnostic>);
}

/// The lints every generator runs unless told otherwise.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![Box::new(DuplicateTypeNameLint)]
}
