use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the manifest content and filename so error constructors only need
/// the details specific to each failure.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for a manifest without a `[features]` table.
    pub fn missing_features_error(&self) -> Box<Error> {
        Box::new(Error::MissingFeatures {
            src: self.named_source(),
            filename: self.filename.clone(),
        })
    }

    /// Create an error for a `features` key that is not a table.
    pub fn invalid_features_error(
        &self,
        found: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidFeatures {
            src: self.named_source(),
            span: span.into(),
            found: found.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(every::io),
        help("pass --manifest-file <path> to point at a Cargo.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(every::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("'{filename}' has no [features] table")]
    #[diagnostic(
        code(every::missing_features),
        help("declare features under [features], or point --manifest-file at a package manifest")
    )]
    MissingFeatures {
        #[source_code]
        src: NamedSource<String>,
        filename: String,
    },

    #[error("'features' must be a table, found {found}")]
    #[diagnostic(code(every::invalid_features))]
    InvalidFeatures {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a table of feature names")]
        span: SourceSpan,
        found: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
