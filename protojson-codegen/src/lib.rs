//! Go JSON method generation for protobuf messages.
//!
//! Given a [`SchemaUnit`](protojson_ir::SchemaUnit) and
//! [`GenerationOptions`](protojson_ir::GenerationOptions), this crate emits a
//! Go file with a `MarshalJSON`/`UnmarshalJSON` pair per message, delegating
//! to `jsonpb` at runtime.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ast`] - Go syntax nodes (ImportBlock, Method)
//! - [`naming`] - Map-entry filtering and Go type naming
//! - [`files`] - The generated `.pb.json.go` file (header + method blocks)
//! - [`lint`] - Diagnostics over the named types
//! - [`lower`] - FileDescriptorProto to SchemaUnit
//! - [`plugin`] - protoc CodeGeneratorRequest handling

pub mod ast;
pub mod builder;
pub mod files;
pub mod lint;
pub mod lower;
pub mod naming;
pub mod plugin;

mod generator;

pub use generator::{Generated, Generator, render_unit};
pub use lint::{Diagnostic, Severity};
pub use plugin::{PluginOutput, generate_response};
