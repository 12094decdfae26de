//! Stored records and their projections.

use blockgen_schema::{BlockDescription, Error as SchemaError, Issue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A saved block description.
///
/// The summary columns are copied out of the payload when it is saved; the
/// payload itself is kept as raw JSON and only trusted after re-validation
/// through [`LibraryItem::description`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub id: String,
    pub block_name: String,
    pub code: String,
    #[serde(rename = "tplFilename")]
    pub template_filename: String,
    #[serde(rename = "nameLabel")]
    pub display_name: String,
    pub description: String,
    pub tab: String,
    pub icon: String,
    pub has_repeater: bool,
    /// The description as it was saved
    pub input: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LibraryItem {
    pub(crate) fn new(
        id: String,
        block: &BlockDescription,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            id,
            block_name: block.block_name.clone(),
            code: block.code.clone(),
            template_filename: block.template_filename.clone(),
            display_name: block.display_name.clone(),
            description: block.description.clone(),
            tab: block.tab.clone(),
            icon: block.icon.clone(),
            has_repeater: block.has_repeater,
            input: serde_json::to_value(block)?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the payload and summary columns, keeping id and creation time.
    pub(crate) fn replace(&mut self, block: &BlockDescription, now: DateTime<Utc>) -> Result<()> {
        let created_at = self.created_at;
        *self = Self::new(self.id.clone(), block, now)?;
        self.created_at = created_at;
        Ok(())
    }

    /// Decode and re-validate the saved payload.
    ///
    /// A payload that no longer matches the schema is reported as
    /// [`Error::InvalidSavedConfig`].
    pub fn description(&self) -> Result<BlockDescription> {
        BlockDescription::from_value(&self.input).map_err(|err| {
            let issues = match *err {
                SchemaError::Invalid { issues } => issues,
                other => vec![Issue::new("input", other.to_string())],
            };
            Error::InvalidSavedConfig {
                id: self.id.clone(),
                issues,
            }
        })
    }

    pub fn summary(&self) -> LibraryItemSummary {
        LibraryItemSummary {
            id: self.id.clone(),
            block_name: self.block_name.clone(),
            code: self.code.clone(),
            template_filename: self.template_filename.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            has_repeater: self.has_repeater,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Identity of this record after a save; `replaced` tells whether the
    /// save overwrote an existing record.
    pub fn saved(&self, replaced: bool) -> SavedItem {
        SavedItem {
            id: self.id.clone(),
            code: self.code.clone(),
            updated_at: self.updated_at,
            replaced,
        }
    }
}

/// Listing projection of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItemSummary {
    pub id: String,
    pub block_name: String,
    pub code: String,
    #[serde(rename = "tplFilename")]
    pub template_filename: String,
    #[serde(rename = "nameLabel")]
    pub display_name: String,
    pub description: String,
    pub has_repeater: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity returned by a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: String,
    pub code: String,
    pub updated_at: DateTime<Utc>,
    /// Whether an existing record was overwritten
    pub replaced: bool,
}
