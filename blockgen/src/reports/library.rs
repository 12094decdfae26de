//! Library command report data structures.

use blockgen_library::{LibraryItemSummary, SavedItem};

use super::output::{Output, Report};

/// Report of a save or update.
#[derive(Debug)]
pub struct SavedReport {
    pub saved: SavedItem,
}

impl Report for SavedReport {
    fn render(&self, out: &mut dyn Output) {
        let verb = if self.saved.replaced { "Updated" } else { "Saved" };
        out.preformatted(&format!("{} {}", verb, self.saved.code));
        out.key_value_indented("id", &self.saved.id);
        out.key_value_indented("updated", &self.saved.updated_at.to_rfc3339());
    }
}

/// Report listing library records.
#[derive(Debug)]
pub struct LibraryListReport {
    pub items: Vec<LibraryItemSummary>,
}

impl Report for LibraryListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.items.is_empty() {
            out.preformatted("Library is empty");
            return;
        }

        out.section(&format!("Blocks ({})", self.items.len()));
        for (i, item) in self.items.iter().enumerate() {
            let repeater = if item.has_repeater { ", repeater" } else { "" };
            out.numbered_item(
                i + 1,
                &format!(
                    "{} ({}{}) {}",
                    item.display_name, item.code, repeater, item.template_filename
                ),
            );
            out.key_value_indented("   id", &item.id);
            out.key_value_indented(
                "   updated",
                &item.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            );
        }
    }
}

/// Report showing a stored payload.
#[derive(Debug)]
pub struct ShowReport {
    pub payload: String,
}

impl Report for ShowReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.payload);
    }
}

/// Report of a deletion.
#[derive(Debug)]
pub struct DeletedReport {
    pub id: String,
    pub code: String,
}

impl Report for DeletedReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted("Deleted");
        out.removed_item(&format!("{} ({})", self.code, self.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_empty_list() {
        let mut out = RecordingOutput::default();
        LibraryListReport { items: Vec::new() }.render(&mut out);
        assert_eq!(out.text(), "Library is empty");
    }

    #[test]
    fn test_deleted() {
        let mut out = RecordingOutput::default();
        DeletedReport {
            id: "42".into(),
            code: "cpb_hero".into(),
        }
        .render(&mut out);
        assert_eq!(out.lines, vec!["Deleted", "  - cpb_hero (42)"]);
    }
}
