//! Block description model for the PrettyBlocks block generator.
//!
//! The shape of a block description ([`BlockDescription`], [`Field`]) is kept
//! apart from the rules it must satisfy ([`validate`], [`lint`]). Code
//! generation depends on the shape only and trusts that parsing went through
//! [`BlockDescription::from_json_str`] and friends, which validate.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod block;
mod error;
mod field;
mod parse;
mod validate;

pub use block::{BlockDescription, DEFAULT_ICON, DEFAULT_TAB, Repeater};
pub use error::{Error, Issue, Result};
pub use field::{
    CheckboxOptions, Choice, ChoiceOptions, EditorOptions, EditorProvider, Field, FieldKind,
    FileuploadOptions, MultiselectOptions, SelectorOptions, SliderOptions, TextOptions,
    TitleDefault, TitleOptions,
};
pub use parse::Format;
pub use validate::{lint, validate};
