//! In-memory record table shared by every backend.

use blockgen_schema::BlockDescription;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, LibraryItem, LibraryItemSummary, Result, SavedItem};

/// Records keyed by id, in mutation order (most recent last).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Table {
    items: IndexMap<String, LibraryItem>,
}

impl Table {
    pub(crate) fn upsert(
        &mut self,
        block: &BlockDescription,
        now: DateTime<Utc>,
    ) -> Result<SavedItem> {
        let existing = self.id_of_code(&block.code);
        let replaced = existing.is_some();
        let item = match existing {
            Some(id) => {
                let mut item = self.take(&id)?;
                item.replace(block, now)?;
                tracing::info!(id = %item.id, code = %item.code, "updated library item");
                item
            }
            None => {
                let item = LibraryItem::new(Uuid::new_v4().to_string(), block, now)?;
                tracing::info!(id = %item.id, code = %item.code, "created library item");
                item
            }
        };
        let saved = item.saved(replaced);
        self.items.insert(item.id.clone(), item);
        Ok(saved)
    }

    pub(crate) fn update(
        &mut self,
        id: &str,
        block: &BlockDescription,
        now: DateTime<Utc>,
    ) -> Result<LibraryItem> {
        if !self.items.contains_key(id) {
            return Err(Error::not_found(id));
        }
        if let Some(owner) = self.id_of_code(&block.code).filter(|owner| owner != id) {
            return Err(Error::Conflict {
                code: block.code.clone(),
                owner,
            });
        }

        let mut item = self.take(id)?;
        item.replace(block, now)?;
        tracing::info!(id = %item.id, code = %item.code, "replaced library item");
        self.items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    pub(crate) fn get(&self, id: &str) -> Result<LibraryItem> {
        self.items.get(id).cloned().ok_or_else(|| Error::not_found(id))
    }

    pub(crate) fn get_by_code(&self, code: &str) -> Result<LibraryItem> {
        self.items
            .values()
            .find(|item| item.code == code)
            .cloned()
            .ok_or_else(|| Error::not_found(code))
    }

    /// Summaries, most recently updated first.
    pub(crate) fn list(&self) -> Vec<LibraryItemSummary> {
        // Newest mutation is last; reversing before the stable sort breaks
        // timestamp ties in favor of the latest write.
        let mut summaries: Vec<_> = self.items.values().rev().map(LibraryItem::summary).collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        summaries
    }

    pub(crate) fn delete(&mut self, id: &str) -> Result<()> {
        let item = self.take(id)?;
        tracing::info!(id = %item.id, code = %item.code, "deleted library item");
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    fn id_of_code(&self, code: &str) -> Option<String> {
        self.items
            .values()
            .find(|item| item.code == code)
            .map(|item| item.id.clone())
    }

    fn take(&mut self, id: &str) -> Result<LibraryItem> {
        self.items.shift_remove(id).ok_or_else(|| Error::not_found(id))
    }
}
