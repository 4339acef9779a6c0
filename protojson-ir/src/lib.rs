//! Intermediate representation types for protoc-gen-go-json.
//!
//! These types are the contract between the descriptor lowering step and the
//! generation engine:
//!
//! ```text
//! FileDescriptorProto → SchemaUnit (lowering) → NamedType (namer) → Go source
//! ```
//!
//! The IR is deliberately plain data: no protobuf types, no Go rendering
//! concerns, nothing that needs a registry to resolve.

mod options;
mod unit;

pub use options::GenerationOptions;
pub use unit::{NamedType, RecordType, SchemaUnit};
