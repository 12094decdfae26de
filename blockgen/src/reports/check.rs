//! Check command report data structures.

use std::path::PathBuf;

use blockgen_schema::Issue;

use super::output::{Output, Report};

/// Report data from description validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the description file.
    pub input_path: PathBuf,
    /// Block name, when the description parsed.
    pub block_name: Option<String>,
    /// Rule violations.
    pub errors: Vec<Issue>,
    /// Non-fatal findings.
    pub warnings: Vec<Issue>,
    /// Field counts: (config fields, repeater fields).
    pub field_counts: (usize, Option<usize>),
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(&error.to_string());
        }

        for warning in &self.warnings {
            out.warning(&warning.to_string());
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.input_path.display()));
        if let Some(name) = &self.block_name {
            out.newline();
            out.key_value_indented("block", name);
            let (fields, repeater) = self.field_counts;
            out.key_value_indented("fields", &fields.to_string());
            if let Some(repeater) = repeater {
                out.key_value_indented("repeater fields", &repeater.to_string());
            }
        }
    }
}
