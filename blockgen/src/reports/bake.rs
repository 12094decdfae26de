//! Bake command report data structures.

use std::path::PathBuf;

use blockgen_core::OutputFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Block name from the description.
    pub block_name: String,
    /// Block code from the description.
    pub code: String,
    /// Warning messages from lint.
    pub warnings: Vec<String>,
    /// Generation result (files written, archive written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to a directory.
    Written(Vec<PathBuf>),
    /// A zip archive was written.
    Archived(PathBuf),
    /// Dry-run preview.
    Preview(Vec<OutputFile>),
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(paths) => {
                out.preformatted(&format!("{} ({})", self.block_name, self.code));
                out.newline();
                out.section("Generated");
                for path in paths {
                    out.added_item(&path.display().to_string());
                }
            }
            GenerationResult::Archived(path) => {
                out.preformatted(&format!("{} ({})", self.block_name, self.code));
                out.newline();
                out.key_value("Archive", &path.display().to_string());
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(file.filename());
                    out.preformatted(file.content().trim_end_matches('\n'));
                }

                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}
