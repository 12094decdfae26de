use std::path::{Path, PathBuf};

use blockgen_core::{Archive, GeneratedFile, OutputFile};
use blockgen_schema::BlockDescription;
use eyre::Result;

use crate::{DefinitionPhp, TemplateTpl, naming::archive_filename};

/// The two files generated for a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    /// `<BlockName>Block.php`
    pub definition: OutputFile,
    /// The Smarty template, named after `tplFilename`
    pub template: OutputFile,
    archive_filename: String,
}

impl GeneratedBlock {
    /// Both files, definition first.
    pub fn files(&self) -> [&OutputFile; 2] {
        [&self.definition, &self.template]
    }

    /// File name the archive is delivered under.
    pub fn archive_filename(&self) -> &str {
        &self.archive_filename
    }

    /// Bundle both files into a zip archive.
    pub fn archive(&self) -> Result<Archive> {
        Archive::bundle(self.archive_filename.as_str(), self.files())
    }

    /// Write both files into `dir`, overwriting existing ones.
    pub fn write(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.files()
            .into_iter()
            .map(|file| {
                file.write(dir)?;
                tracing::debug!(path = %file.path(dir).display(), "wrote generated file");
                Ok(file.path(dir))
            })
            .collect()
    }

    pub fn into_files(self) -> Vec<OutputFile> {
        vec![self.definition, self.template]
    }
}

/// Block code generator.
///
/// Pure: rendering depends on the description only, so the same description
/// always yields byte-identical files.
pub struct Generator<'a> {
    block: &'a BlockDescription,
}

impl<'a> Generator<'a> {
    pub fn new(block: &'a BlockDescription) -> Self {
        Self { block }
    }

    pub fn definition(&self) -> DefinitionPhp<'a> {
        DefinitionPhp::new(self.block)
    }

    pub fn template(&self) -> TemplateTpl<'a> {
        TemplateTpl::new(self.block)
    }

    /// Render both files.
    pub fn generate(&self) -> GeneratedBlock {
        let definition = self.definition().to_output();
        let template = self.template().to_output();
        tracing::debug!(
            code = %self.block.code,
            definition = definition.filename(),
            template = template.filename(),
            "generated block files"
        );
        GeneratedBlock {
            definition,
            template,
            archive_filename: archive_filename(&self.block.template_filename, &self.block.code),
        }
    }

    /// Preview generated files without writing to disk.
    pub fn preview(&self) -> Vec<OutputFile> {
        self.generate().into_files()
    }

    /// Generate and bundle into a zip archive.
    pub fn archive(&self) -> Result<Archive> {
        self.generate().archive()
    }

    /// Generate and write both files into `dir`.
    pub fn write(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.generate().write(dir)
    }
}
