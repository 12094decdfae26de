//! Library operations - saved descriptions.

use std::path::Path;

use blockgen_library::{LibraryStore, Result};
use blockgen_schema::BlockDescription;

use super::{BakeOptions, bake};
use crate::reports::{BakeReport, DeletedReport, LibraryListReport, SavedReport, ShowReport};

/// Insert or overwrite the record holding the description's code.
pub fn save(store: &dyn LibraryStore, block: &BlockDescription) -> Result<SavedReport> {
    Ok(SavedReport {
        saved: store.upsert(block)?,
    })
}

/// Replace record `id`.
pub fn update(
    store: &dyn LibraryStore,
    id: &str,
    block: &BlockDescription,
) -> Result<SavedReport> {
    let item = store.update(id, block)?;
    Ok(SavedReport {
        saved: item.saved(true),
    })
}

pub fn list(store: &dyn LibraryStore) -> Result<LibraryListReport> {
    Ok(LibraryListReport {
        items: store.list()?,
    })
}

/// The stored payload of record `id`, as pretty JSON.
pub fn show(store: &dyn LibraryStore, id: &str) -> Result<ShowReport> {
    let item = store.get(id)?;
    Ok(ShowReport {
        payload: serde_json::to_string_pretty(&item.input)?,
    })
}

pub fn delete(store: &dyn LibraryStore, id: &str) -> Result<DeletedReport> {
    let item = store.get(id)?;
    store.delete(id)?;
    Ok(DeletedReport {
        id: item.id,
        code: item.code,
    })
}

/// Regenerate the archive of record `id` into `output_dir`.
pub fn bake_saved(
    store: &dyn LibraryStore,
    id: &str,
    output_dir: &Path,
) -> eyre::Result<BakeReport> {
    let block = store.description(id)?;
    bake(
        &block,
        BakeOptions {
            output_dir,
            zip: true,
            dry_run: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use blockgen_library::{Error, MemoryStore};
    use tempfile::TempDir;

    use super::*;
    use crate::reports::GenerationResult;

    fn block(code: &str) -> BlockDescription {
        BlockDescription::from_json_str(&format!(
            r#"{{"blockName":"Hero","tplFilename":"hero.tpl","code":"{code}",
                "nameLabel":"Hero","description":"Top","hasRepeater":false}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_save_reports_replacement() {
        let store = MemoryStore::new();
        let first = save(&store, &block("cpb_hero")).unwrap();
        let second = save(&store, &block("cpb_hero")).unwrap();

        assert!(!first.saved.replaced);
        assert!(second.saved.replaced);
        assert_eq!(first.saved.id, second.saved.id);
        assert_eq!(list(&store).unwrap().items.len(), 1);
    }

    #[test]
    fn test_update_conflict() {
        let store = MemoryStore::new();
        let a = save(&store, &block("cpb_a")).unwrap();
        save(&store, &block("cpb_b")).unwrap();

        let err = update(&store, &a.saved.id, &block("cpb_b")).unwrap_err();
        assert!(matches!(err, Error::Conflict { .. }));
    }

    #[test]
    fn test_show_and_delete() {
        let store = MemoryStore::new();
        let saved = save(&store, &block("cpb_hero")).unwrap().saved;

        let shown = show(&store, &saved.id).unwrap();
        assert!(shown.payload.contains("\"code\": \"cpb_hero\""));

        let deleted = delete(&store, &saved.id).unwrap();
        assert_eq!(deleted.code, "cpb_hero");
        assert!(show(&store, &saved.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_bake_saved_writes_zip() {
        let store = MemoryStore::new();
        let saved = save(&store, &block("cpb_hero")).unwrap().saved;
        let dir = TempDir::new().unwrap();

        let report = bake_saved(&store, &saved.id, dir.path()).unwrap();

        assert!(matches!(report.result, GenerationResult::Archived(_)));
        assert!(dir.path().join("hero.zip").exists());
    }

    #[test]
    fn test_bake_saved_unknown_id() {
        let store = MemoryStore::new();
        let dir = TempDir::new().unwrap();

        let err = bake_saved(&store, "missing", dir.path()).unwrap_err();
        let err = err.downcast_ref::<Error>().unwrap();
        assert!(err.is_not_found());
    }
}
