//! Go AST builders for the pieces of syntax the generator emits.
//!
//! These provide a small, typed API for constructing Go declarations,
//! which are rendered through [`CodeBuilder`](crate::builder::CodeBuilder).

mod imports;
mod methods;

pub use imports::ImportBlock;
pub use methods::{Method, Param};
