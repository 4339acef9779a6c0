//! Code generation building blocks.
//!
//! This module provides the core primitives for generating Go source:
//! - [`CodeBuilder`] - Incremental builder for tab-indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
