use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for blockgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// One rule violation (or warning) found in a block description.
///
/// `path` points at the offending value with dotted segments, e.g.
/// `repeater.fields.0.name`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{path}: {message}")]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'blockgen init <BlockName>' to create a block description"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported description format '{extension}'")]
    #[diagnostic(
        code(blockgen::unsupported_format),
        help("block descriptions are read from .json or .toml files")
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to parse block description")]
    #[diagnostic(code(blockgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("block description payload does not match the schema: {message}")]
    #[diagnostic(code(blockgen::payload_error))]
    Payload { message: String },

    #[error("invalid block description ({})", count_issues(.issues))]
    #[diagnostic(
        code(blockgen::invalid),
        help("fix the listed fields and run 'blockgen check' again")
    )]
    Invalid {
        #[related]
        issues: Vec<Issue>,
    },
}

fn count_issues(issues: &[Issue]) -> String {
    match issues.len() {
        1 => "1 issue".to_string(),
        n => format!("{} issues", n),
    }
}

impl Error {
    /// Create a parse error with source context
    pub fn parse(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    /// Create a validation error from collected issues
    pub fn invalid(issues: Vec<Issue>) -> Box<Self> {
        Box::new(Error::Invalid { issues })
    }

    /// Issues behind a validation error; empty for other errors.
    pub fn issues(&self) -> &[Issue] {
        match self {
            Error::Invalid { issues } => issues,
            _ => &[],
        }
    }
}
