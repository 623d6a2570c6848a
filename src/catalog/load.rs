//! Reading catalog files from disk or from the embedded default.

use std::path::Path;

use serde::Deserialize;

use super::error::CatalogError;
use super::types::{AppRecord, CategoryInfo, PlatformInfo, TeamInfo};

/// Serialization format of a catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl CatalogFormat {
    /// What: Pick the format from a file extension.
    ///
    /// Inputs:
    /// - `path`: Catalog file path
    ///
    /// Output:
    /// - `Some(format)` for `.json`, `.yaml`, `.yml` (case-insensitive); `None` otherwise.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Full catalog document with optional lookup tables.
#[derive(Debug, Deserialize)]
pub(super) struct CatalogDocument {
    /// App records.
    pub apps: Vec<AppRecord>,
    /// Category table override.
    #[serde(default)]
    pub categories: Option<Vec<CategoryInfo>>,
    /// Platform table override.
    #[serde(default)]
    pub platforms: Option<Vec<PlatformInfo>>,
    /// Team table override.
    #[serde(default)]
    pub teams: Option<Vec<TeamInfo>>,
}

impl From<Vec<AppRecord>> for CatalogDocument {
    fn from(apps: Vec<AppRecord>) -> Self {
        Self {
            apps,
            categories: None,
            platforms: None,
            teams: None,
        }
    }
}

/// What: Deserialize catalog text into a document.
///
/// Inputs:
/// - `content`: Raw file contents
/// - `format`: JSON or YAML
/// - `origin`: Label used in error messages (path or "builtin")
///
/// Output:
/// - Parsed document, or `CatalogError::Parse` carrying the deserializer message.
///
/// Details:
/// - The top-level shape (bare list or document) is read first, then the
///   content is decoded into that concrete type so errors keep their field
///   name and line/column.
pub(super) fn parse_document(
    content: &str,
    format: CatalogFormat,
    origin: &str,
) -> Result<CatalogDocument, CatalogError> {
    let parsed = match format {
        CatalogFormat::Json => parse_json(content),
        CatalogFormat::Yaml => parse_yaml(content),
    };
    parsed.map_err(|message| CatalogError::Parse {
        origin: origin.to_string(),
        message,
    })
}

fn parse_json(content: &str) -> Result<CatalogDocument, String> {
    let shape: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    if shape.is_array() {
        serde_json::from_str::<Vec<AppRecord>>(content)
            .map(CatalogDocument::from)
            .map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }
}

fn parse_yaml(content: &str) -> Result<CatalogDocument, String> {
    let shape: serde_norway::Value = serde_norway::from_str(content).map_err(|e| e.to_string())?;
    if shape.is_sequence() {
        serde_norway::from_str::<Vec<AppRecord>>(content)
            .map(CatalogDocument::from)
            .map_err(|e| e.to_string())
    } else {
        serde_norway::from_str(content).map_err(|e| e.to_string())
    }
}

/// What: Read and parse a catalog file.
///
/// Inputs:
/// - `path`: `.json`, `.yaml` or `.yml` file
///
/// Output:
/// - Parsed document; `UnsupportedFormat`, `Io` or `Parse` errors otherwise.
pub(super) fn read_document(path: &Path) -> Result<CatalogDocument, CatalogError> {
    let format = CatalogFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), ?format, "read catalog file");
    parse_document(&content, format, &path.display().to_string())
}
