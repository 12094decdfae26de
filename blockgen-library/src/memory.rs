use std::sync::{Mutex, MutexGuard, PoisonError};

use blockgen_schema::BlockDescription;
use chrono::Utc;

use crate::{LibraryItem, LibraryItemSummary, LibraryStore, Result, SavedItem, table::Table};

/// Library kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LibraryStore for MemoryStore {
    fn upsert(&self, block: &BlockDescription) -> Result<SavedItem> {
        self.table().upsert(block, Utc::now())
    }

    fn update(&self, id: &str, block: &BlockDescription) -> Result<LibraryItem> {
        self.table().update(id, block, Utc::now())
    }

    fn get(&self, id: &str) -> Result<LibraryItem> {
        self.table().get(id)
    }

    fn get_by_code(&self, code: &str) -> Result<LibraryItem> {
        self.table().get_by_code(code)
    }

    fn list(&self) -> Result<Vec<LibraryItemSummary>> {
        Ok(self.table().list())
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.table().delete(id)
    }
}
