//! Init command report data structures.

use std::path::PathBuf;

use blockgen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from scaffolding a block description.
#[derive(Debug)]
pub struct InitReport {
    /// Path of the description file.
    pub path: PathBuf,
    /// Whether the file was created or already existed.
    pub result: WriteResult,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        match self.result {
            WriteResult::Written => {
                out.preformatted("Created block description");
                out.added_item(&path);
            }
            WriteResult::Skipped => {
                out.warning(&format!("{} already exists, left untouched", path));
            }
        }
        out.newline();
        out.section("Next steps");
        out.list_item(&format!("blockgen check -i {}", path));
        out.list_item(&format!("blockgen bake -i {} -o dist", path));
    }
}
