use blockgen_schema::BlockDescription;

use crate::{LibraryItem, LibraryItemSummary, Result, SavedItem};

/// Trait for library storage backends.
///
/// Every method is atomic with respect to other calls on the same store.
pub trait LibraryStore: Send + Sync {
    /// Insert a description, or overwrite the record holding the same code.
    ///
    /// Overwriting keeps the record id and creation time and is reported
    /// through [`SavedItem::replaced`].
    fn upsert(&self, block: &BlockDescription) -> Result<SavedItem>;

    /// Replace the record `id`.
    ///
    /// ## Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) for an unknown id,
    /// [`Error::Conflict`](crate::Error::Conflict) when another record owns
    /// the new code.
    fn update(&self, id: &str, block: &BlockDescription) -> Result<LibraryItem>;

    fn get(&self, id: &str) -> Result<LibraryItem>;

    fn get_by_code(&self, code: &str) -> Result<LibraryItem>;

    /// Summaries of every record, most recently updated first.
    fn list(&self) -> Result<Vec<LibraryItemSummary>>;

    fn delete(&self, id: &str) -> Result<()>;

    /// Load record `id` and re-validate its saved description.
    fn description(&self, id: &str) -> Result<BlockDescription> {
        self.get(id)?.description()
    }
}
