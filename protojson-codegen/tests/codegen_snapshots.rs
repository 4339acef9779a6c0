//! Snapshot tests for generated Go files.
//!
//! These tests verify that the generated Go code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use protojson_codegen::{Generator, render_unit};
use protojson_core::GeneratedFile;
use protojson_ir::{GenerationOptions, RecordType, SchemaUnit};

fn scenario_unit() -> SchemaUnit {
    SchemaUnit::new("a.proto", "foo").with_type(RecordType::new("bar"))
}

fn scenario_options() -> GenerationOptions {
    GenerationOptions::new("jsonpb.UnmarshalNext").emit_defaults(true)
}

#[test]
fn test_single_message() {
    let output = render_unit(&scenario_unit(), &scenario_options()).unwrap();

    assert!(output.contains("package foo\n"));
    assert_eq!(output.matches("import (").count(), 1);
    assert!(output.contains("func (msg *Bar) MarshalJSON() ([]byte, error) {"));
    assert!(output.contains("func (msg *Bar) UnmarshalJSON(b []byte) error {"));
    assert!(output.contains("EmitDefaults: true,"));
    insta::assert_snapshot!("single_message", output);
}

#[test]
fn test_nested_messages_with_imports() {
    let unit = SchemaUnit::new("shop/v1/order.proto", "shoppb")
        .with_type(RecordType::new("Order"))
        .with_type(RecordType::new("line_item").nested_in(["Order"]))
        .with_type(RecordType::new("MetadataEntry").nested_in(["Order"]).map_entry())
        .with_type(RecordType::new("Price").nested_in(["Order", "line_item"]));
    let options = GenerationOptions::new("(&jsonpb.Unmarshaler{AllowUnknownFields: true}).Unmarshal")
        .enums_as_ints(true)
        .orig_name(true)
        .import("example.com/shop/money")
        .import("example.com/shop/audit");

    let generated = Generator::new(&unit, &options).generate().unwrap();

    assert_eq!(generated.file.name(), "shop/v1/order.pb.json.go");
    insta::assert_snapshot!("nested_messages_with_imports", generated.file.render());
}

#[test]
fn test_only_map_entries() {
    let unit = SchemaUnit::new("maps.proto", "maps")
        .with_type(RecordType::new("AEntry").map_entry())
        .with_type(RecordType::new("BEntry").map_entry());
    let options = GenerationOptions::new("jsonpb.Unmarshal").import("example.com/unused");

    let output = render_unit(&unit, &options).unwrap();

    assert_eq!(
        output,
        "// Code generated by protoc-gen-go-json. DO NOT EDIT.\n// source: maps.proto\n\npackage maps\n"
    );
}

#[test]
fn test_output_is_deterministic() {
    let first = render_unit(&scenario_unit(), &scenario_options()).unwrap();
    let second = render_unit(&scenario_unit(), &scenario_options()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_options_only_change_literals() {
    let unit = SchemaUnit::new("a.proto", "foo")
        .with_type(RecordType::new("A"))
        .with_type(RecordType::new("B"));
    let off = GenerationOptions::new("jsonpb.Unmarshal");
    let on = off.clone().enums_as_ints(true).emit_defaults(true).orig_name(true);

    let off_out = render_unit(&unit, &off).unwrap();
    let on_out = render_unit(&unit, &on).unwrap();

    let off_lines: Vec<_> = off_out.lines().collect();
    let on_lines: Vec<_> = on_out.lines().collect();
    assert_eq!(off_lines.len(), on_lines.len());

    let changed: Vec<_> = off_lines
        .iter()
        .zip(&on_lines)
        .filter(|(a, b)| a != b)
        .map(|(a, b)| (a.trim(), b.trim()))
        .collect();

    // Three literals per serialize method, two types.
    assert_eq!(changed.len(), 6);
    for (before, after) in changed {
        assert!(before.ends_with(": false,"), "unexpected change: {before}");
        assert_eq!(after, before.replace(": false,", ": true,"));
    }
}

#[test]
fn test_each_flag_flips_only_its_own_line() {
    let unit = scenario_unit();
    let base = GenerationOptions::new("jsonpb.Unmarshal");
    let baseline = render_unit(&unit, &base).unwrap();

    let cases = [
        (base.clone().enums_as_ints(true), "EnumsAsInts"),
        (base.clone().emit_defaults(true), "EmitDefaults"),
        (base.clone().orig_name(true), "OrigName"),
    ];

    for (options, field) in cases {
        let output = render_unit(&unit, &options).unwrap();
        let changed: Vec<_> = baseline
            .lines()
            .zip(output.lines())
            .filter(|(before, after)| before != after)
            .map(|(_, after)| after.trim())
            .collect();

        assert_eq!(changed, [format!("{field}: true,")], "only {field} should change");
    }
}

#[test]
fn test_single_flag_enabled_snapshot() {
    let options = GenerationOptions::new("jsonpb.Unmarshal").enums_as_ints(true);
    let output = render_unit(&scenario_unit(), &options).unwrap();

    insta::assert_snapshot!("enums_as_ints_only", output);
}

#[test]
fn test_additional_imports_follow_fixed_imports() {
    let options = scenario_options().import("z.example/last").import("a.example/first");
    let output = render_unit(&scenario_unit(), &options).unwrap();

    let bytes = output.find("\"bytes\"").unwrap();
    let jsonpb = output.find("\"github.com/golang/protobuf/jsonpb\"").unwrap();
    let last = output.find("\"z.example/last\"").unwrap();
    let first = output.find("\"a.example/first\"").unwrap();
    assert!(bytes < jsonpb && jsonpb < last && last < first);
}
