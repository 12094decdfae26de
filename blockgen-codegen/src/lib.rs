//! Code generation for PrettyBlocks blocks.
//!
//! A validated [`BlockDescription`](blockgen_schema::BlockDescription) is
//! lowered into two files:
//!
//! - [`definition`] - the PHP class whose `getDefinition()` returns the block
//!   metadata and field schema as a nested array literal
//! - [`template`] - the Smarty template rendering the block
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, Indent)
//! - [`php`] - PHP literal escaping and the array-literal IR
//! - [`fields`] - Per-field-type lowering rules
//! - [`naming`] - Derived names (class, CSS basename, archive)
//! - [`generator`] - Assembles both files, previews, writes and archives

pub mod builder;
pub mod definition;
pub mod fields;
pub mod generator;
pub mod naming;
pub mod php;
pub mod template;

pub use builder::{CodeBuilder, Indent};
pub use definition::DefinitionPhp;
pub use generator::{GeneratedBlock, Generator};
pub use naming::{archive_filename, css_basename};
pub use php::{PhpArray, PhpValue, escape_php, indent};
pub use template::TemplateTpl;
