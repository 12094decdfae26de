//! Check operation - description validation.

use std::path::Path;

use blockgen_schema::{BlockDescription, Error, lint};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Rule violations end up in the report; read and syntax errors are returned
/// for rendering as diagnostics.
pub fn check(input: &Path) -> blockgen_schema::Result<CheckReport> {
    let mut report = CheckReport {
        input_path: input.to_path_buf(),
        block_name: None,
        errors: Vec::new(),
        warnings: Vec::new(),
        field_counts: (0, None),
    };

    match BlockDescription::from_file(input) {
        Ok(block) => {
            report.warnings = lint(&block);
            report.field_counts = (
                block.fields.len(),
                block.active_repeater().map(|r| r.fields.len()),
            );
            report.block_name = Some(block.block_name);
        }
        Err(err) => match *err {
            Error::Invalid { issues } => report.errors = issues,
            other => return Err(Box::new(other)),
        },
    }

    Ok(report)
}
