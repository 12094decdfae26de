//! Block description parsing from files, strings and stored payloads.
//!
//! Every entry point validates after deserializing, so a successfully parsed
//! [`BlockDescription`] is safe to generate from.

use std::{fmt, path::Path, str::FromStr};

use miette::SourceSpan;

use crate::{BlockDescription, Error, Result, validate};

/// Serialization format of a block description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Returns the format identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }

    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse().map_err(|_| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            })
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            _ => Err(format!("unknown format '{}', expected 'json' or 'toml'", s)),
        }
    }
}

impl BlockDescription {
    /// Parse and validate a block description file (`.json` or `.toml`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_format(&content, format, &path.display().to_string())
    }

    /// Parse and validate a JSON description.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, Format::Json, "block.json")
    }

    /// Parse and validate a TOML description.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, Format::Toml, "block.toml")
    }

    /// Parse and validate with a custom filename for error reporting.
    pub fn from_str_with_format(content: &str, format: Format, filename: &str) -> Result<Self> {
        let block: BlockDescription = match format {
            Format::Json => serde_json::from_str(content).map_err(|e| {
                let span = json_offset(content, e.line(), e.column()).map(SourceSpan::from);
                Error::parse(e.to_string(), content, filename, span)
            })?,
            Format::Toml => toml::from_str(content).map_err(|e| {
                let span = e.span().map(SourceSpan::from);
                Error::parse(e.message(), content, filename, span)
            })?,
        };
        tracing::debug!(filename, %format, code = %block.code, "parsed block description");
        block.into_validated()
    }

    /// Decode and validate a stored JSON payload.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let block = BlockDescription::deserialize_value(value)?;
        block.into_validated()
    }

    /// Render as pretty JSON, the format stored payloads use.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn deserialize_value(value: &serde_json::Value) -> Result<Self> {
        serde::Deserialize::deserialize(value).map_err(|e: serde_json::Error| {
            Box::new(Error::Payload {
                message: e.to_string(),
            })
        })
    }

    fn into_validated(self) -> Result<Self> {
        let issues = validate(&self);
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(Error::invalid(issues))
        }
    }
}

/// Byte offset of a 1-based line/column position reported by serde_json.
fn json_offset(content: &str, line: usize, column: usize) -> Option<(usize, usize)> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(content.len());
    Some((offset, 0))
}
