//! Core operations.
//!
//! This module contains the business logic for blockgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod init;
pub mod library;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use init::{InitOptions, init};
