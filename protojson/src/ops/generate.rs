//! Generate operation - offline generation from a descriptor set.

use std::path::Path;

use eyre::{Context, Result};
use prost_types::FileDescriptorProto;
use protojson_codegen::{Generator, lower::lower_file};
use protojson_core::{GeneratedFile, WriteResult};
use protojson_ir::GenerationOptions;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct OutputOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Every file is generated before anything is written, so a failure leaves
/// the output directory untouched.
pub fn generate(
    files: &[&FileDescriptorProto],
    options: &GenerationOptions,
    opts: OutputOptions,
) -> Result<GenerateReport> {
    let mut warnings = Vec::new();
    let mut generated = Vec::with_capacity(files.len());

    for file in files {
        let unit = lower_file(file)?;
        let output = Generator::new(&unit, options)
            .generate()
            .wrap_err_with(|| format!("Failed to generate code for '{}'", unit.name))?;

        warnings.extend(
            output
                .diagnostics
                .iter()
                .filter(|d| d.severity.is_warning())
                .map(|d| d.message.clone()),
        );
        generated.push(output.file);
    }

    let result = if opts.dry_run {
        let files = generated
            .iter()
            .map(|f| PreviewFile {
                path: f.name(),
                content: f.render(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut written = Vec::new();
        let mut unchanged = Vec::new();
        for file in &generated {
            match file.write(opts.output_dir)? {
                WriteResult::Written => written.push(file.name()),
                WriteResult::Unchanged => unchanged.push(file.name()),
            }
        }
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written,
            unchanged,
        })
    };

    Ok(GenerateReport { warnings, result })
}

#[cfg(test)]
mod tests {
    use prost_types::DescriptorProto;
    use tempfile::TempDir;

    use super::*;
    use crate::ops::fixtures::file;

    fn options() -> GenerationOptions {
        GenerationOptions::new("jsonpb.Unmarshal")
    }

    #[test]
    fn test_writes_then_reports_unchanged() {
        let dir = TempDir::new().unwrap();
        let fd = file("shop/v1/order.proto", "shop.v1", &["Order"]);
        let opts = || OutputOptions {
            output_dir: dir.path(),
            dry_run: false,
        };

        let first = generate(&[&fd], &options(), opts()).unwrap();
        let second = generate(&[&fd], &options(), opts()).unwrap();

        let path = dir.path().join("shop/v1/order.pb.json.go");
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("package shop_v1\n"));

        match (first.result, second.result) {
            (GenerationResult::Written(first), GenerationResult::Written(second)) => {
                assert_eq!(first.written, ["shop/v1/order.pb.json.go"]);
                assert!(second.written.is_empty());
                assert_eq!(second.unchanged, ["shop/v1/order.pb.json.go"]);
            }
            other => panic!("unexpected results: {other:?}"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let fd = file("a.proto", "foo", &["bar"]);

        let report = generate(
            &[&fd],
            &options(),
            OutputOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert!(!dir.path().join("a.pb.json.go").exists());
        match report.result {
            GenerationResult::Preview(preview) => {
                assert_eq!(preview.files.len(), 1);
                assert!(preview.files[0].content.contains("func (msg *Bar) UnmarshalJSON"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_names_become_warnings() {
        let dir = TempDir::new().unwrap();
        let mut fd = file("a.proto", "foo", &["A_B", "A"]);
        fd.message_type[1].nested_type.push(DescriptorProto {
            name: Some("B".to_string()),
            ..Default::default()
        });

        let report = generate(
            &[&fd],
            &options(),
            OutputOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'A_B'"));
    }
}
