//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod init;
mod library;
mod output;

pub use bake::{BakeReport, GenerationResult};
pub use check::CheckReport;
pub use init::InitReport;
pub use library::{DeletedReport, LibraryListReport, SavedReport, ShowReport};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
