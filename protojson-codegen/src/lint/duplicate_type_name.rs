//! Lint for colliding Go type names.

use std::collections::HashMap;

use protojson_ir::{NamedType, SchemaUnit};

use super::{Diagnostic, Lint};

/// Lint that warns when two types map to the same Go identifier.
///
/// `message A_B {}` and `message A { message B {} }` both become `A_B`; the
/// generated file then declares the method pair twice. The output is left
/// as-is and the collision is reported.
pub struct DuplicateTypeNameLint;

impl Lint for DuplicateTypeNameLint {
    fn name(&self) -> &'static str {
        "duplicate-type-name"
    }

    fn description(&self) -> &'static str {
        "Detect types that resolve to the same Go type name"
    }

    fn check(&self, unit: &SchemaUnit, types: &[NamedType], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, ty) in types.iter().enumerate() {
            let name = ty.qualified_name.as_str();
            match seen.get(name) {
                Some(first) => diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "type #{} resolves to '{}', already used by type #{}",
                            index + 1,
                            name,
                            first + 1
                        ),
                    )
                    .at(format!("{}:{}", unit.name, name)),
                ),
                None => {
                    seen.insert(name, index);
                }
            }
        }
    }
}
