//! pgprobe CLI library.
//!
//! This module exposes internal types for testing purposes.
//! The entry points are the `pgprobe-codegen` and `pgprobe-fields` binaries.

pub mod cli;
pub mod logging;
pub mod output;
pub mod run;

// Re-export commonly used types
pub use cli::{CodegenArgs, FieldsArgs};
