//! Init operation - scaffold a block description file.

use std::path::Path;

use blockgen_core::{FileRules, OutputFile, Overwrite, to_kebab_case, to_pascal_case, to_snake_case};
use blockgen_schema::{
    BlockDescription, DEFAULT_ICON, DEFAULT_TAB, Field, FieldKind, Format, validate,
};
use eyre::{Context, Result};

use crate::reports::InitReport;

/// Options for the init operation.
pub struct InitOptions<'a> {
    /// Block name, in any case (`hero banner`, `hero_banner`, `HeroBanner`).
    pub name: &'a str,
    /// Directory the description is written to.
    pub output_dir: &'a Path,
    pub format: Format,
    /// Start with a repeater.
    pub repeater: bool,
}

/// Build a starter description for `name`.
///
/// The template file name and the code are derived from the PascalCase
/// block name: `HeroBanner` gives `hero-banner.tpl` and `cpb_hero_banner`.
pub fn scaffold(name: &str, repeater: bool) -> BlockDescription {
    let block_name = to_pascal_case(name);
    let mut block = BlockDescription {
        template_filename: format!("{}.tpl", to_kebab_case(&block_name)),
        code: format!("cpb_{}", to_snake_case(&block_name)),
        display_name: block_name.clone(),
        description: format!("{} block", block_name),
        tab: DEFAULT_TAB.to_string(),
        icon: DEFAULT_ICON.to_string(),
        has_repeater: false,
        fields: vec![starter_field()],
        repeater: None,
        block_name,
    };

    if repeater {
        block.set_repeater_enabled(true);
        if let Some(repeater) = block.repeater.as_mut() {
            repeater.label = "Items".to_string();
            repeater.name_from = "title".to_string();
            repeater.fields.push(starter_field());
        }
    }

    block
}

fn starter_field() -> Field {
    Field::new("title", "Title", FieldKind::text())
}

/// Execute the init operation.
///
/// An existing description file is never overwritten.
pub fn init(opts: InitOptions) -> Result<InitReport> {
    let block = scaffold(opts.name, opts.repeater);
    let issues = validate(&block);
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(ToString::to_string).collect();
        eyre::bail!(
            "'{}' does not make a valid block: {}",
            opts.name,
            details.join("; ")
        );
    }

    let content = match opts.format {
        Format::Json => format!("{}\n", block.to_json_pretty()),
        Format::Toml => block.to_toml().wrap_err("Failed to encode description")?,
    };
    let filename = format!("{}.{}", to_kebab_case(&block.block_name), opts.format);
    let file = OutputFile::new(filename, content).with_rules(FileRules {
        overwrite: Overwrite::IfMissing,
    });
    let result = file
        .write(opts.output_dir)
        .wrap_err("Failed to write block description")?;

    Ok(InitReport {
        path: file.path(opts.output_dir),
        result,
    })
}

#[cfg(test)]
mod tests {
    use blockgen_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_scaffold_derives_names() {
        let block = scaffold("hero banner", false);
        assert_eq!(block.block_name, "HeroBanner");
        assert_eq!(block.template_filename, "hero-banner.tpl");
        assert_eq!(block.code, "cpb_hero_banner");
        assert!(validate(&block).is_empty());
    }

    #[test]
    fn test_scaffold_with_repeater_is_valid() {
        let block = scaffold("Testimonials", true);
        assert!(block.has_repeater);
        assert_eq!(block.active_repeater().map(|r| r.fields.len()), Some(1));
        assert!(validate(&block).is_empty());
    }

    #[test]
    fn test_init_writes_parseable_file_once() {
        let dir = TempDir::new().unwrap();
        for format in [Format::Json, Format::Toml] {
            let opts = InitOptions {
                name: "HeroBanner",
                output_dir: dir.path(),
                format,
                repeater: true,
            };
            let report = init(opts).unwrap();
            assert_eq!(report.result, WriteResult::Written);

            let parsed = BlockDescription::from_file(&report.path).unwrap();
            assert_eq!(parsed, scaffold("HeroBanner", true));
        }

        let again = init(InitOptions {
            name: "HeroBanner",
            output_dir: dir.path(),
            format: Format::Json,
            repeater: false,
        })
        .unwrap();
        assert_eq!(again.result, WriteResult::Skipped);
    }

    #[test]
    fn test_init_rejects_unusable_names() {
        let dir = TempDir::new().unwrap();
        let err = init(InitOptions {
            name: "9lives",
            output_dir: dir.path(),
            format: Format::Json,
            repeater: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("blockName"));
    }
}
