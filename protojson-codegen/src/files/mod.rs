//! Generated Go source file and its building blocks.

mod header;
mod json_go;
mod message;

pub use header::Header;
pub use json_go::JsonGoFile;
pub use message::MessageMethods;

/// Tool name written into the provenance comment.
pub const GENERATOR_NAME: &str = "protoc-gen-go-json";

/// Suffix replacing `.proto` in output file names.
pub const FILE_SUFFIX: &str = ".pb.json.go";

/// Standard library import used for the byte buffer and reader.
pub const BYTES_IMPORT: &str = "bytes";

/// Runtime JSON codec called by the generated methods.
pub const JSONPB_IMPORT: &str = "github.com/golang/protobuf/jsonpb";
