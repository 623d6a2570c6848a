//! The app catalog: records, lookup tables, loading and validation.
//!
//! A [`Catalog`] is built once at startup, either from the embedded default
//! or from a JSON/YAML file, and is read-only afterwards. Filtering lives in
//! [`crate::logic`]; this module only owns the data.

use std::path::Path;

mod builtin;
mod error;
mod load;
mod tables;
mod types;
mod validate;

pub use builtin::BUILTIN_CATALOG_JSON;
pub use error::CatalogError;
pub use load::CatalogFormat;
pub use tables::{default_categories, default_platforms, derive_teams};
pub use types::{
    ALL, AppRecord, AppUpdate, CategoryInfo, EVERYONE, NEUTRAL_BADGE, PlatformInfo, TeamInfo,
    VersionEntry,
};
pub use validate::validate;

use load::CatalogDocument;

/// What: Immutable collection of app records plus selector tables.
///
/// Inputs:
/// - Built via [`Catalog::builtin`], [`Catalog::from_path`] or [`Catalog::from_parts`].
///
/// Output:
/// - Read-only accessors used by the filter engine and the UI.
///
/// Details:
/// - Every constructor validates the records, so holders of a `Catalog` can
///   rely on unique ids and non-empty `designedFor` lists.
/// - Lookup tables always start with the `all` wildcard entry.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// App records in catalog order.
    apps: Vec<AppRecord>,
    /// Category selector entries.
    categories: Vec<CategoryInfo>,
    /// Platform selector entries.
    platforms: Vec<PlatformInfo>,
    /// Team selector entries.
    teams: Vec<TeamInfo>,
}

impl Catalog {
    /// What: Load the catalog compiled into the binary.
    ///
    /// # Errors
    /// - Returns `CatalogError` if the embedded JSON fails to parse or validate.
    pub fn builtin() -> Result<Self, CatalogError> {
        let doc = load::parse_document(BUILTIN_CATALOG_JSON, CatalogFormat::Json, "builtin")?;
        Self::from_document(doc)
    }

    /// What: Load a catalog from a JSON or YAML file.
    ///
    /// Inputs:
    /// - `path`: File ending in `.json`, `.yaml` or `.yml`
    ///
    /// # Errors
    /// - `UnsupportedFormat` for other extensions, `Io` when unreadable,
    ///   `Parse` for malformed content, or a validation error.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let doc = load::read_document(path)?;
        let catalog = Self::from_document(doc)?;
        tracing::info!(
            path = %path.display(),
            apps = catalog.apps.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// What: Assemble a catalog from records and optional tables.
    ///
    /// Inputs:
    /// - `apps`: Records in display order
    /// - `categories`/`platforms`/`teams`: Table overrides; `None` uses the
    ///   stock tables (teams are derived from the records)
    ///
    /// # Errors
    /// - Returns the first validation failure from [`validate`].
    pub fn from_parts(
        apps: Vec<AppRecord>,
        categories: Option<Vec<CategoryInfo>>,
        platforms: Option<Vec<PlatformInfo>>,
        teams: Option<Vec<TeamInfo>>,
    ) -> Result<Self, CatalogError> {
        validate(&apps)?;
        let categories = tables::ensure_wildcard_first(
            categories.unwrap_or_else(default_categories),
            |c| c.id.as_str(),
            || CategoryInfo {
                id: ALL.to_string(),
                name: "All Apps".to_string(),
                icon: String::new(),
            },
        );
        let platforms = tables::ensure_wildcard_first(
            platforms.unwrap_or_else(default_platforms),
            |p| p.id.as_str(),
            || PlatformInfo {
                id: ALL.to_string(),
                name: "All Platforms".to_string(),
                badge: NEUTRAL_BADGE.to_string(),
            },
        );
        let teams = tables::ensure_wildcard_first(
            teams.unwrap_or_else(|| derive_teams(&apps)),
            |t| t.id.as_str(),
            || TeamInfo {
                id: ALL.to_string(),
                name: "All Teams".to_string(),
            },
        );
        Ok(Self {
            apps,
            categories,
            platforms,
            teams,
        })
    }

    /// What: Shortcut for a catalog with stock tables.
    ///
    /// # Errors
    /// - Returns the first validation failure from [`validate`].
    pub fn from_apps(apps: Vec<AppRecord>) -> Result<Self, CatalogError> {
        Self::from_parts(apps, None, None, None)
    }

    fn from_document(doc: CatalogDocument) -> Result<Self, CatalogError> {
        Self::from_parts(doc.apps, doc.categories, doc.platforms, doc.teams)
    }

    /// All records in catalog order.
    #[must_use]
    pub fn apps(&self) -> &[AppRecord] {
        &self.apps
    }

    /// Category selector entries, `all` first.
    #[must_use]
    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Platform selector entries, `all` first.
    #[must_use]
    pub fn platforms(&self) -> &[PlatformInfo] {
        &self.platforms
    }

    /// Team selector entries, `all` first.
    #[must_use]
    pub fn teams(&self) -> &[TeamInfo] {
        &self.teams
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AppRecord> {
        self.apps.iter().find(|a| a.id == id)
    }

    /// What: Resolve the badge color name for a platform.
    ///
    /// Output:
    /// - The table's badge for a known platform; [`NEUTRAL_BADGE`] otherwise.
    #[must_use]
    pub fn platform_badge(&self, platform: &str) -> &str {
        self.platforms
            .iter()
            .find(|p| p.id == platform)
            .map_or(NEUTRAL_BADGE, |p| p.badge.as_str())
    }

    /// Icon of a category, empty when unknown.
    #[must_use]
    pub fn category_icon(&self, category: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == category)
            .map_or("", |c| c.icon.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Embedded catalog parses, validates and derives its tables
    ///
    /// - Input: `BUILTIN_CATALOG_JSON`
    /// - Output: Five apps, stock categories/platforms, teams derived from records
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("builtin catalog must be valid");
        assert_eq!(catalog.apps().len(), 5);
        assert_eq!(catalog.apps()[0].id, "transcript-cleaner");
        assert_eq!(catalog.categories()[0].id, ALL);
        assert_eq!(catalog.platforms().len(), 4);
        let teams: Vec<&str> = catalog.teams().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(teams, vec!["all", "Digital Media", "Operations", "Analytics"]);
    }

    #[test]
    /// What: Platform badge lookup falls back to the neutral color
    fn platform_badge_lookup_and_fallback() {
        let catalog = Catalog::builtin().expect("builtin");
        assert_eq!(catalog.platform_badge("Slack"), "purple");
        assert_eq!(catalog.platform_badge("Teams"), NEUTRAL_BADGE);
        assert_eq!(catalog.category_icon("Media"), "🎬");
        assert_eq!(catalog.category_icon("Nope"), "");
    }

    #[test]
    /// What: Record lookup by id
    fn get_finds_records_by_id() {
        let catalog = Catalog::builtin().expect("builtin");
        assert_eq!(
            catalog.get("example-slack-1").map(|a| a.name.as_str()),
            Some("Status Bot")
        );
        assert!(catalog.get("missing").is_none());
    }
}
