//! Parsing of the protoc plugin parameter string into [`GenerationOptions`].
//!
//! The parameter is a comma-separated list of `key[=value]` entries, e.g.
//! `emit_defaults,orig_name=true,additional_imports=example.com/types`.
//!
//! [`GenerationOptions`]: protojson_ir::GenerationOptions

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod parse;

pub use error::{Error, PARAMETER_SOURCE_NAME, ParamSource, Result};
pub use parse::{ALLOW_UNKNOWN_UNMARSHALER, DEFAULT_UNMARSHALER, parse};
