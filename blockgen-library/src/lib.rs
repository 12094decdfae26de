//! Library of saved block descriptions.
//!
//! Records are keyed by a generated id and unique by block `code`. The
//! [`LibraryStore`] trait is the seam between the CLI and a backend:
//!
//! - [`MemoryStore`] keeps records in process memory
//! - [`JsonFileStore`] persists them in a single JSON document
//!
//! Stores are constructed by the host and passed down explicitly.

mod error;
mod json_file;
mod memory;
mod record;
mod store;
mod table;

pub use error::{Error, Result};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{LibraryItem, LibraryItemSummary, SavedItem};
pub use store::LibraryStore;
