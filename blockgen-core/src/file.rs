use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file name, relative to the output directory or archive root
    fn filename(&self) -> String;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Render into an owned output file
    fn to_output(&self) -> OutputFile {
        OutputFile::new(self.filename(), self.render()).with_rules(self.rules())
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A rendered file: a name and its textual content.
///
/// Output files are immutable once rendered. Archiving and writing preserve
/// the content byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    filename: String,
    content: String,
    rules: FileRules,
}

impl OutputFile {
    /// Create a new file with the given name and content (default rules: always overwrite)
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file name
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the path this file would be written to under `base`
    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.filename)
    }

    /// Write the file under `base` according to its rules
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    tracing::debug!(path = %path.display(), "file exists, skipping");
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    #[default]
    Always,
    /// Only create if file doesn't exist (user-authored descriptions)
    IfMissing,
}
