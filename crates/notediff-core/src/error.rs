use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotediffError {
    /// A document could not be read or turned into footnotes.
    #[error("Failed to {operation} '{}': {cause}", path.display())]
    Parse {
        path: PathBuf,
        operation: String,
        #[source]
        cause: Box<NotediffError>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No variant documents found in '{}'", directory.display())]
    NoDocuments { directory: PathBuf },

    #[error("Invalid OOXML package: {message}")]
    InvalidPackage { message: String },

    #[error("Missing required part '{part_path}' in {document_type} document")]
    MissingPart { part_path: String, document_type: String },

    #[error("XML parsing error at {location}: {message}")]
    XmlParse { message: String, location: String },

    #[error("Unsupported footnote structure: {message}")]
    UnsupportedStructure { message: String },

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl NotediffError {
    /// Wraps a lower-level failure with the document path and the operation that failed.
    pub fn parse(path: impl Into<PathBuf>, operation: &str, cause: NotediffError) -> Self {
        Self::Parse {
            path: path.into(),
            operation: operation.to_string(),
            cause: Box::new(cause),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Path of the document or directory the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Parse { path, .. } | Self::Io { path, .. } => Some(path),
            Self::NoDocuments { directory } => Some(directory),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotediffError>;
