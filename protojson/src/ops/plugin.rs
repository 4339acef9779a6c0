//! Plugin operation - protoc request in, response out.

use eyre::{Context, Result};
use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;
use protojson_codegen::generate_response;
use protojson_ir::GenerationOptions;
use tracing::debug;

/// Decode the request protoc writes to the plugin's stdin.
pub fn decode_request(bytes: &[u8]) -> Result<CodeGeneratorRequest> {
    let request =
        CodeGeneratorRequest::decode(bytes).wrap_err("Failed to decode CodeGeneratorRequest")?;
    debug!(
        files = request.file_to_generate.len(),
        parameter = request.parameter(),
        "decoded request"
    );
    Ok(request)
}

/// Generate every requested file and encode the response for stdout.
pub fn respond(request: &CodeGeneratorRequest, options: &GenerationOptions) -> Result<Vec<u8>> {
    let output = generate_response(request, options)?;
    debug!(
        files = output.response.file.len(),
        warnings = output.diagnostics.len(),
        "encoding response"
    );
    Ok(output.response.encode_to_vec())
}
