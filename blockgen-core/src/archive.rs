//! Zip bundling of generated files.

use std::{
    io::{Cursor, Write},
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use crate::OutputFile;

/// Extension of bundled archives.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// An in-memory zip archive and the name it should be delivered under.
#[derive(Debug, Clone)]
pub struct Archive {
    filename: String,
    bytes: Vec<u8>,
}

impl Archive {
    /// Bundle files into a zip archive, one entry per file.
    ///
    /// Entry names are the file names; content is stored byte-for-byte.
    pub fn bundle<'a>(
        filename: impl Into<String>,
        files: impl IntoIterator<Item = &'a OutputFile>,
    ) -> Result<Self> {
        let filename = filename.into();
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for file in files {
            tracing::debug!(archive = %filename, entry = file.filename(), "adding archive entry");
            zip.start_file(file.filename(), options)
                .wrap_err_with(|| format!("Failed to start entry '{}'", file.filename()))?;
            zip.write_all(file.content().as_bytes())?;
        }

        let bytes = zip.finish().wrap_err("Failed to finish archive")?.into_inner();
        Ok(Self { filename, bytes })
    }

    /// Download file name (e.g. `hero-banner.zip`).
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Raw archive bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the archive and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write the archive into `dir` under its file name.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
