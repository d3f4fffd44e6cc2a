use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for stringcheese-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(stringcheese::io),
        help("pass an existing stringcheese.toml with --config, or drop the flag")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stringcheese.toml")]
    #[diagnostic(code(stringcheese::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required input: {option}")]
    #[diagnostic(code(stringcheese::missing_input), help("{hint}"))]
    MissingRequiredInput { option: String, hint: String },

    #[error("'{present}' was given without '{missing}'")]
    #[diagnostic(
        code(stringcheese::incomplete_target),
        help("the Dart target needs both an output file and a header, e.g. --dart lib/strings.dart --dart-header \"part of core.strings;\"")
    )]
    IncompleteTarget { present: String, missing: String },

    #[error("failed to list resource directory '{path}'")]
    #[diagnostic(
        code(stringcheese::directory_access),
        help("--android must point at a readable res folder")
    )]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a missing input error with usage guidance
    pub fn missing_input(option: impl Into<String>, hint: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingRequiredInput {
            option: option.into(),
            hint: hint.into(),
        })
    }

    /// Create an error for a half-specified target
    pub fn incomplete_target(present: impl Into<String>, missing: impl Into<String>) -> Box<Self> {
        Box::new(Error::IncompleteTarget {
            present: present.into(),
            missing: missing.into(),
        })
    }

    /// Create a directory listing error for the given path
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::DirectoryAccess {
            path: path.into(),
            source,
        })
    }

    /// Whether this error reports a missing required input.
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredInput { .. } | Error::IncompleteTarget { .. }
        )
    }
}
