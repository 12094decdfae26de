use std::{
    ffi::OsString,
    fs::{File, OpenOptions},
    path::{Path, PathBuf},
};

use blockgen_schema::BlockDescription;
use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::{
    Error, LibraryItem, LibraryItemSummary, LibraryStore, Result, SavedItem, table::Table,
};

/// Current version of the library document layout.
const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    version: u32,
    #[serde(flatten)]
    table: Table,
}

/// Library persisted as a single JSON document.
///
/// Every operation holds an `fs2` lock on a `<library>.lock` file next to
/// the document: shared while reading, exclusive from load to rewrite when
/// mutating. Handles and processes sharing a path therefore never lose each
/// other's writes. The document is rewritten through a temporary file
/// renamed over the library file, so a failed write never leaves a
/// truncated library behind. A missing file is an empty library.
///
/// ## Examples
///
/// ```no_run
/// use blockgen_library::{JsonFileStore, LibraryStore};
///
/// let store = JsonFileStore::new(".blockgen/library.json");
/// for item in store.list().unwrap() {
///     println!("{} {}", item.id, item.code);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

/// Lock held on the library lock file, released on drop.
struct LockGuard {
    file: File,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the library file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<library><suffix>`, next to the library file.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }

    fn create_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        Ok(())
    }

    fn lock(&self, exclusive: bool) -> Result<LockGuard> {
        let path = self.sibling(".lock");
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| Error::io(&path, e))?;

        let locked = if exclusive {
            FileExt::lock_exclusive(&file)
        } else {
            FileExt::lock_shared(&file)
        };
        locked.map_err(|source| Error::Lock { path, source })?;
        Ok(LockGuard { file })
    }

    fn load(&self) -> Result<Table> {
        if !self.path.exists() {
            return Ok(Table::default());
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let document: Document = serde_json::from_str(&content)?;
        if document.version != DOCUMENT_VERSION {
            tracing::warn!(
                path = %self.path.display(),
                version = document.version,
                "unexpected library document version"
            );
        }
        Ok(document.table)
    }

    /// Rewrite the document. Callers hold the exclusive lock.
    fn save(&self, table: Table) -> Result<()> {
        let items = table.len();
        let document = Document {
            version: DOCUMENT_VERSION,
            table,
        };
        let content = serde_json::to_string_pretty(&document)?;

        let tmp = self.sibling(".tmp");
        std::fs::write(&tmp, content).map_err(|e| Error::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), items, "saved library");
        Ok(())
    }

    /// Read the table under a shared lock.
    fn read<T>(&self, f: impl FnOnce(&Table) -> Result<T>) -> Result<T> {
        if !self.path.exists() {
            return f(&Table::default());
        }
        let _lock = self.lock(false)?;
        f(&self.load()?)
    }

    /// Read, modify and rewrite the table under an exclusive lock.
    ///
    /// Nothing is written when `f` fails.
    fn write<T>(&self, f: impl FnOnce(&mut Table) -> Result<T>) -> Result<T> {
        self.create_parent()?;
        let _lock = self.lock(true)?;
        let mut table = self.load()?;
        let value = f(&mut table)?;
        self.save(table)?;
        Ok(value)
    }
}

impl LibraryStore for JsonFileStore {
    fn upsert(&self, block: &BlockDescription) -> Result<SavedItem> {
        self.write(|table| table.upsert(block, Utc::now()))
    }

    fn update(&self, id: &str, block: &BlockDescription) -> Result<LibraryItem> {
        self.write(|table| table.update(id, block, Utc::now()))
    }

    fn get(&self, id: &str) -> Result<LibraryItem> {
        self.read(|table| table.get(id))
    }

    fn get_by_code(&self, code: &str) -> Result<LibraryItem> {
        self.read(|table| table.get_by_code(code))
    }

    fn list(&self) -> Result<Vec<LibraryItemSummary>> {
        self.read(|table| Ok(table.list()))
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.write(|table| table.delete(id))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn block(code: &str) -> BlockDescription {
        BlockDescription::from_json_str(&format!(
            r#"{{"blockName":"Hero","tplFilename":"hero.tpl","code":"{code}",
                "nameLabel":"Hero","description":"Top","hasRepeater":false}}"#
        ))
        .unwrap()
    }

    fn create_test_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested").join("library.json"));
        (store, temp_dir)
    }

    #[test]
    fn test_missing_file_is_empty_library() {
        let (store, _dir) = create_test_store();
        assert!(store.list().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_records_persist_across_instances() {
        let (store, _dir) = create_test_store();
        let saved = store.upsert(&block("cpb_hero")).unwrap();

        let reopened = JsonFileStore::new(store.path());
        let item = reopened.get(&saved.id).unwrap();
        assert_eq!(item.code, "cpb_hero");
        assert_eq!(reopened.description(&saved.id).unwrap(), block("cpb_hero"));
    }

    #[test]
    fn test_upsert_same_code_overwrites_on_disk() {
        let (store, _dir) = create_test_store();
        let first = store.upsert(&block("cpb_hero")).unwrap();
        let second = store.upsert(&block("cpb_hero")).unwrap();

        assert_eq!(first.id, second.id);
        let reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.list().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_update_leaves_file_untouched() {
        let (store, _dir) = create_test_store();
        let a = store.upsert(&block("cpb_a")).unwrap();
        store.upsert(&block("cpb_b")).unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let err = store.update(&a.id, &block("cpb_b")).unwrap_err();

        assert!(matches!(err, Error::Conflict { .. }));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_tampered_payload_is_invalid_saved_config() {
        let (store, _dir) = create_test_store();
        let saved = store.upsert(&block("cpb_hero")).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let tampered = content.replace("\"tplFilename\": \"hero.tpl\"", "\"tplFilename\": \"Hero.TPL\"");
        std::fs::write(store.path(), tampered).unwrap();

        let err = store.description(&saved.id).unwrap_err();
        assert!(matches!(err, Error::InvalidSavedConfig { .. }));
        assert!(store.description("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let (store, _dir) = create_test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.list().unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn test_handles_on_one_path_keep_every_write() {
        let (store, _dir) = create_test_store();
        let threads: Vec<_> = (0..8)
            .map(|t| {
                let store = JsonFileStore::new(store.path());
                std::thread::spawn(move || {
                    for i in 0..10 {
                        store.upsert(&block(&format!("cpb_t{t}_{i}"))).unwrap();
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        assert_eq!(store.list().unwrap().len(), 80);
        assert!(!store.sibling(".tmp").exists());
    }

    #[test]
    fn test_reading_missing_library_creates_nothing() {
        let (store, dir) = create_test_store();
        assert!(store.get("missing").unwrap_err().is_not_found());
        assert!(!dir.path().join("nested").exists());
    }

    #[test]
    fn test_delete_persists() {
        let (store, _dir) = create_test_store();
        let saved = store.upsert(&block("cpb_hero")).unwrap();
        store.delete(&saved.id).unwrap();

        assert!(JsonFileStore::new(store.path()).list().unwrap().is_empty());
    }
}
