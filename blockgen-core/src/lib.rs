//! Core utilities and types for the PrettyBlocks block generator.
//!
//! This crate provides the output file type shared by the generator and the
//! CLI, zip bundling of generated files, and naming helpers.

mod archive;
mod file;
mod utils;

// File operations
pub use archive::{ARCHIVE_EXTENSION, Archive};
pub use file::{FileRules, GeneratedFile, OutputFile, Overwrite, WriteResult};
// String utilities
pub use utils::{to_kebab_case, to_pascal_case, to_snake_case};
