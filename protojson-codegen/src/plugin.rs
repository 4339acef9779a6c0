//! protoc plugin request handling.

use eyre::{Result, WrapErr, eyre};
use prost_types::compiler::{
    CodeGeneratorRequest, CodeGeneratorResponse, code_generator_response,
};
use protojson_core::GeneratedFile;
use protojson_ir::GenerationOptions;
use tracing::debug;

use crate::{Diagnostic, Generator, lower::lower_file};

/// Output of a plugin run.
#[derive(Debug)]
pub struct PluginOutput {
    pub response: CodeGeneratorResponse,
    pub diagnostics: Vec<Diagnostic>,
}

/// Generate one `.pb.json.go` file per requested proto file.
///
/// Any failure aborts the whole request; no partial response is produced.
pub fn generate_response(
    request: &CodeGeneratorRequest,
    options: &GenerationOptions,
) -> Result<PluginOutput> {
    let mut files = Vec::with_capacity(request.file_to_generate.len());
    let mut diagnostics = Vec::new();

    for target in &request.file_to_generate {
        let descriptor = request
            .proto_file
            .iter()
            .find(|f| f.name() == target.as_str())
            .ok_or_else(|| eyre!("no descriptor for requested file '{}'", target))?;

        debug!(file = %target, "lowering descriptor");
        let unit = lower_file(descriptor)?;
        let generated = Generator::new(&unit, options)
            .generate()
            .wrap_err_with(|| format!("failed to generate code for '{}'", target))?;

        files.push(code_generator_response::File {
            name: Some(generated.file.name()),
            content: Some(generated.file.render()),
            ..Default::default()
        });
        diagnostics.extend(generated.diagnostics);
    }

    let response = CodeGeneratorResponse {
        supported_features: Some(code_generator_response::Feature::Proto3Optional as u64),
        file: files,
        ..Default::default()
    };

    Ok(PluginOutput {
        response,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use prost_types::{DescriptorProto, FileDescriptorProto};

    use super::*;

    fn descriptor(name: &str, messages: &[&str]) -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some(name.to_string()),
            package: Some("foo".to_string()),
            message_type: messages
                .iter()
                .map(|m| DescriptorProto {
                    name: Some(m.to_string()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn request(targets: &[&str], files: Vec<FileDescriptorProto>) -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: targets.iter().map(|t| t.to_string()).collect(),
            proto_file: files,
            ..Default::default()
        }
    }

    #[test]
    fn test_only_requested_files_generated() {
        let req = request(
            &["b.proto"],
            vec![descriptor("dep.proto", &["Dep"]), descriptor("b.proto", &["thing"])],
        );
        let out = generate_response(&req, &GenerationOptions::new("jsonpb.Unmarshal")).unwrap();

        assert_eq!(out.response.file.len(), 1);
        let file = &out.response.file[0];
        assert_eq!(file.name(), "b.pb.json.go");
        assert!(file.content().contains("func (msg *Thing) MarshalJSON()"));
        assert!(!file.content().contains("Dep"));
        assert!(out.response.error.is_none());
    }

    #[test]
    fn test_proto3_optional_advertised() {
        let req = request(&[], vec![]);
        let out = generate_response(&req, &GenerationOptions::new("jsonpb.Unmarshal")).unwrap();

        assert_eq!(out.response.supported_features, Some(1));
        assert!(out.response.file.is_empty());
    }

    #[test]
    fn test_missing_descriptor_is_fatal() {
        let req = request(&["a.proto", "missing.proto"], vec![descriptor("a.proto", &["A"])]);
        let result = generate_response(&req, &GenerationOptions::new("jsonpb.Unmarshal"));

        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_names_reported() {
        let mut fd = descriptor("a.proto", &["A_B", "A"]);
        fd.message_type[1].nested_type.push(DescriptorProto {
            name: Some("B".to_string()),
            ..Default::default()
        });
        let req = request(&["a.proto"], vec![fd]);
        let out = generate_response(&req, &GenerationOptions::new("jsonpb.Unmarshal")).unwrap();

        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.response.file.len(), 1);
    }
}
