//! Block description: the root input of code generation.

use serde::{Deserialize, Serialize};

use crate::Field;

/// Back-office tab used when none is given.
pub const DEFAULT_TAB: &str = "general";

/// Back-office icon used when none is given.
pub const DEFAULT_ICON: &str = "DocumentIcon";

/// Complete description of a block.
///
/// Keys keep the camelCase names used by stored payloads (`blockName`,
/// `tplFilename`, `nameLabel`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDescription {
    /// PascalCase name; the PHP class is `<blockName>Block`
    pub block_name: String,

    /// Smarty template file name, e.g. `hero-banner.tpl`
    #[serde(rename = "tplFilename", alias = "templateFilename")]
    pub template_filename: String,

    /// Unique code (`cpb_...`), also the CSS class basename source
    pub code: String,

    /// Human-readable name shown in the back office
    #[serde(rename = "nameLabel", alias = "displayName")]
    pub display_name: String,

    pub description: String,

    #[serde(default = "default_tab")]
    pub tab: String,

    #[serde(default = "default_icon")]
    pub icon: String,

    /// Whether the block carries a repeater; must agree with `repeater`
    pub has_repeater: bool,

    /// Config fields, in emission order
    #[serde(default)]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeater: Option<Repeater>,
}

fn default_tab() -> String {
    DEFAULT_TAB.to_string()
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl BlockDescription {
    /// Name of the generated PHP class.
    pub fn class_name(&self) -> String {
        format!("{}Block", self.block_name)
    }

    /// The repeater, if the block is flagged as having one.
    pub fn active_repeater(&self) -> Option<&Repeater> {
        if self.has_repeater {
            self.repeater.as_ref()
        } else {
            None
        }
    }

    /// Turn the repeater on or off.
    ///
    /// Enabling keeps an existing repeater or installs [`Repeater::empty`];
    /// disabling drops it, so the flag and the payload always agree.
    pub fn set_repeater_enabled(&mut self, enabled: bool) {
        self.has_repeater = enabled;
        if enabled {
            self.repeater.get_or_insert_with(Repeater::empty);
        } else {
            self.repeater = None;
        }
    }
}

/// Repeatable group of fields (one set per list item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeater {
    /// Label of the item list
    #[serde(rename = "nameLabel", alias = "label")]
    pub label: String,

    /// Field whose value names each item in the back office
    pub name_from: String,

    /// Item fields; at least one is required
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Repeater {
    /// A blank repeater, as installed when a block first enables one.
    pub fn empty() -> Self {
        Self {
            label: String::new(),
            name_from: String::new(),
            fields: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> BlockDescription {
        serde_json::from_str(
            r#"{
                "blockName": "Hero",
                "tplFilename": "hero.tpl",
                "code": "cpb_hero",
                "nameLabel": "Hero",
                "description": "Hero block",
                "hasRepeater": false
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let block = minimal();
        assert_eq!(block.tab, "general");
        assert_eq!(block.icon, "DocumentIcon");
        assert!(block.fields.is_empty());
        assert!(block.repeater.is_none());
        assert_eq!(block.class_name(), "HeroBlock");
    }

    #[test]
    fn test_spec_aliases_accepted() {
        let block: BlockDescription = serde_json::from_str(
            r#"{
                "blockName": "Hero",
                "templateFilename": "hero.tpl",
                "code": "cpb_hero",
                "displayName": "Hero",
                "description": "Hero block",
                "hasRepeater": true,
                "repeater": {"label": "Slides", "nameFrom": "title", "fields": []}
            }"#,
        )
        .unwrap();
        assert_eq!(block.template_filename, "hero.tpl");
        assert_eq!(block.display_name, "Hero");
        assert_eq!(block.repeater.unwrap().label, "Slides");
    }

    #[test]
    fn test_serializes_with_stored_key_names() {
        let value = serde_json::to_value(minimal()).unwrap();
        assert_eq!(value["tplFilename"], "hero.tpl");
        assert_eq!(value["nameLabel"], "Hero");
        assert!(value.get("repeater").is_none());
    }

    #[test]
    fn test_set_repeater_enabled_installs_empty_repeater() {
        let mut block = minimal();

        block.set_repeater_enabled(true);
        assert!(block.has_repeater);
        assert_eq!(block.repeater, Some(Repeater::empty()));

        block.set_repeater_enabled(false);
        assert!(!block.has_repeater);
        assert!(block.repeater.is_none());
        assert!(block.active_repeater().is_none());
    }

    #[test]
    fn test_active_repeater_requires_flag() {
        let mut block = minimal();
        block.repeater = Some(Repeater::empty());
        assert!(block.active_repeater().is_none());
    }
}
