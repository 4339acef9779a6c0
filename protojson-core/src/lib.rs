//! Core utilities for protoc-gen-go-json.
//!
//! This crate provides the naming transform and file-writing primitives
//! shared by the engine and the command-line front end.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// String utilities
pub use utils::{file_stem, to_go_camel_case};
