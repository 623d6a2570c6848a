use std::fmt;
use std::path::PathBuf;

/// What: Error type for catalog loading and validation failures.
///
/// Inputs: Produced by catalog loading and [`crate::catalog::validate`].
///
/// Output: Implements `Display`/`Error` for propagation up to `main`.
///
/// Details:
/// - Filtering never fails; these errors only happen while the catalog is
///   being read at startup.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Catalog content is not valid JSON/YAML for the schema.
    Parse {
        /// Where the content came from (file path or "builtin").
        origin: String,
        /// Deserializer message.
        message: String,
    },
    /// File extension is neither JSON nor YAML.
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },
    /// Two records share the same id.
    DuplicateId {
        /// The repeated id.
        id: String,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },
    /// A required text field is missing or blank.
    MissingField {
        /// Position of the record in the catalog.
        index: usize,
        /// Field name as written in catalog files.
        field: &'static str,
    },
    /// `designedFor` is empty.
    EmptyDesignedFor {
        /// Id of the offending record.
        id: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog {}: {source}", path.display())
            }
            Self::Parse { origin, message } => {
                write!(f, "invalid catalog in {origin}: {message}")
            }
            Self::UnsupportedFormat { path } => write!(
                f,
                "unsupported catalog format for {} (expected .json, .yaml or .yml)",
                path.display()
            ),
            Self::DuplicateId { id, first, second } => write!(
                f,
                "duplicate app id \"{id}\" at entries {first} and {second}"
            ),
            Self::MissingField { index, field } => {
                write!(f, "app entry {index} is missing required field \"{field}\"")
            }
            Self::EmptyDesignedFor { id } => {
                write!(f, "app \"{id}\" has an empty designedFor list")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. }
            | Self::UnsupportedFormat { .. }
            | Self::DuplicateId { .. }
            | Self::MissingField { .. }
            | Self::EmptyDesignedFor { .. } => None,
        }
    }
}
