//! Bake operation - code generation from a block description.

use std::path::Path;

use blockgen_codegen::Generator;
use blockgen_schema::{BlockDescription, lint};
use eyre::{Context, Result};

use crate::reports::{BakeReport, GenerationResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated files or the archive.
    pub output_dir: &'a Path,
    /// Bundle both files into a zip archive instead of writing them.
    pub zip: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
pub fn bake(block: &BlockDescription, opts: BakeOptions) -> Result<BakeReport> {
    let warnings = lint(block).iter().map(ToString::to_string).collect();
    let generator = Generator::new(block);

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview())
    } else if opts.zip {
        let archive = generator.archive().wrap_err("Failed to build archive")?;
        let path = archive
            .write(opts.output_dir)
            .wrap_err("Failed to write archive")?;
        GenerationResult::Archived(path)
    } else {
        let paths = generator
            .write(opts.output_dir)
            .wrap_err("Failed to write generated files")?;
        GenerationResult::Written(paths)
    };

    Ok(BakeReport {
        block_name: block.block_name.clone(),
        code: block.code.clone(),
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn block() -> BlockDescription {
        BlockDescription::from_json_str(
            r#"{"blockName":"Hero","tplFilename":"hero.tpl","code":"cpb_hero",
                "nameLabel":"Hero","description":"Top","hasRepeater":false}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let opts = BakeOptions {
            output_dir: dir.path(),
            zip: false,
            dry_run: true,
        };

        let report = bake(&block(), opts).unwrap();

        assert!(matches!(report.result, GenerationResult::Preview(ref files) if files.len() == 2));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_zip_writes_archive() {
        let dir = TempDir::new().unwrap();
        let opts = BakeOptions {
            output_dir: dir.path(),
            zip: true,
            dry_run: false,
        };

        let report = bake(&block(), opts).unwrap();

        match report.result {
            GenerationResult::Archived(path) => {
                assert_eq!(path, dir.path().join("hero.zip"));
                assert!(path.exists());
            }
            other => panic!("expected archive, got {other:?}"),
        }
    }

    #[test]
    fn test_write_both_files() {
        let dir = TempDir::new().unwrap();
        let opts = BakeOptions {
            output_dir: dir.path(),
            zip: false,
            dry_run: false,
        };

        bake(&block(), opts).unwrap();

        assert!(dir.path().join("HeroBlock.php").exists());
        assert!(dir.path().join("hero.tpl").exists());
    }
}
