//! Type filtering and Go naming.
//!
//! Decides which record types of a schema unit receive generated methods and
//! computes the Go identifier each one is declared under.

use protojson_core::to_go_camel_case;
use protojson_ir::{NamedType, RecordType, SchemaUnit};
use tracing::debug;

/// Separator between nesting levels in a Go type name (`Outer_Inner`).
pub const NESTING_SEPARATOR: &str = "_";

/// Return the types that get methods, in declaration order, with Go names.
///
/// Map-entry types are dropped. The input unit is left untouched.
pub fn eligible_types(unit: &SchemaUnit) -> Vec<NamedType> {
    unit.types
        .iter()
        .filter_map(|ty| {
            if ty.map_entry {
                debug!(unit = %unit.name, msg_type = %ty.name, "skipping map entry type");
                return None;
            }
            debug!(unit = %unit.name, msg_type = %ty.name, "processing type");
            Some(name_type(ty))
        })
        .collect()
}

/// Canonicalize a single record type.
///
/// Enclosing names go through the same casing transform as the type itself,
/// so a nested type always agrees with its parent's declared Go name.
pub fn name_type(ty: &RecordType) -> NamedType {
    let name = to_go_camel_case(&ty.name);
    let outers: Vec<String> = ty
        .outers
        .iter()
        .map(String::as_str)
        .map(to_go_camel_case)
        .collect();
    let qualified_name = qualified_name(&outers, &name);

    NamedType {
        name,
        outers,
        qualified_name,
    }
}

/// Join an enclosing chain and a name into a Go type name.
pub fn qualified_name<S: AsRef<str>>(outers: &[S], name: &str) -> String {
    if outers.is_empty() {
        return name.to_string();
    }

    let mut out = outers
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(NESTING_SEPARATOR);
    out.push_str(NESTING_SEPARATOR);
    out.push_str(name);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qualified(types: &[NamedType]) -> Vec<&str> {
        types.iter().map(|t| t.qualified_name.as_str()).collect()
    }

    #[test]
    fn test_qualified_name_top_level() {
        assert_eq!(qualified_name::<&str>(&[], "Inner"), "Inner");
    }

    #[test]
    fn test_qualified_name_nested() {
        assert_eq!(
            qualified_name(&["Outer1", "Outer2"], "Inner"),
            "Outer1_Outer2_Inner"
        );
    }

    #[test]
    fn test_map_entries_excluded_and_order_kept() {
        let unit = SchemaUnit::new("a.proto", "foo")
            .with_type(RecordType::new("AEntry").map_entry())
            .with_type(RecordType::new("B"))
            .with_type(RecordType::new("C"));

        assert_eq!(qualified(&eligible_types(&unit)), ["B", "C"]);
    }

    #[test]
    fn test_canonical_casing_applied() {
        let unit = SchemaUnit::new("a.proto", "foo").with_type(RecordType::new("bar"));
        let types = eligible_types(&unit);

        assert_eq!(types[0].name, "Bar");
        assert_eq!(types[0].qualified_name, "Bar");
    }

    #[test]
    fn test_nested_chain_uses_canonical_parent_names() {
        let unit = SchemaUnit::new("a.proto", "foo")
            .with_type(RecordType::new("outer_msg"))
            .with_type(RecordType::new("inner").nested_in(["outer_msg"]))
            .with_type(RecordType::new("LabelsEntry").nested_in(["outer_msg"]).map_entry());

        let types = eligible_types(&unit);
        assert_eq!(qualified(&types), ["OuterMsg", "OuterMsg_Inner"]);
        assert_eq!(types[1].outers, ["OuterMsg"]);
    }

    #[test]
    fn test_input_unit_not_mutated() {
        let unit = SchemaUnit::new("a.proto", "foo").with_type(RecordType::new("bar_baz"));
        let before = unit.clone();

        let _ = eligible_types(&unit);
        let _ = eligible_types(&unit);

        assert_eq!(unit, before);
    }

    #[test]
    fn test_all_map_entries_yields_nothing() {
        let unit = SchemaUnit::new("a.proto", "foo")
            .with_type(RecordType::new("XEntry").map_entry())
            .with_type(RecordType::new("YEntry").map_entry());

        assert!(eligible_types(&unit).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let unit = SchemaUnit::new("a.proto", "foo")
            .with_type(RecordType::new("A_B"))
            .with_type(RecordType::new("B").nested_in(["A"]));

        assert_eq!(qualified(&eligible_types(&unit)), ["A_B", "A_B"]);
    }
}
