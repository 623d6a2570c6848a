//! Core value types of the app catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel `designedFor` entry that matches every person filter.
pub const EVERYONE: &str = "Everyone";

/// Wildcard selector value meaning "no restriction" for a filter field.
pub const ALL: &str = "all";

/// One entry of an app's changelog.
///
/// The catalog lists these newest first by convention; nothing enforces it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUpdate {
    /// Version label of the update (e.g., "1.2").
    pub version: String,
    /// Release date of the update.
    pub date: NaiveDate,
    /// Free-text release notes.
    #[serde(default)]
    pub notes: String,
    /// Link to the build that this update replaced, when it is still hosted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
}

/// Historical version pointer kept alongside the changelog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    /// Version label.
    pub version: String,
    /// Date this version went live.
    pub date: NaiveDate,
    /// Where this version can still be reached, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Optional short notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single app listed in the store.
///
/// Field names serialize in camelCase so hand-maintained catalog files keep
/// their familiar `designedFor`/`dateAdded` spelling. Presence of `id`, `name`
/// and `designedFor` is checked by [`crate::catalog::validate`] rather than by
/// serde so that a bad entry produces a precise error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    /// Unique key across the catalog.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Short description used for search and list display.
    #[serde(default)]
    pub description: String,
    /// Icon glyph (usually an emoji).
    #[serde(default)]
    pub icon: String,
    /// Icon background hint carried over from the catalog; display only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_bg: String,
    /// Category id (e.g., "Media").
    #[serde(default)]
    pub category: String,
    /// Platform id (e.g., "Slack").
    #[serde(default)]
    pub platform: String,
    /// Owning team; empty when the catalog does not say.
    #[serde(default)]
    pub team: String,
    /// People the app was built for, or the single [`EVERYONE`] sentinel.
    #[serde(default)]
    pub designed_for: Vec<String>,
    /// Launch link. `#` marks a placeholder entry.
    #[serde(default)]
    pub url: String,
    /// Date the app was added to the store.
    pub date_added: NaiveDate,
    /// Whether the app is highlighted in the featured strip.
    #[serde(default)]
    pub featured: bool,
    /// Changelog, newest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<AppUpdate>,
    /// Older versions that remain reachable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub version_history: Vec<VersionEntry>,
}

impl AppRecord {
    /// What: Report whether the record is meant for everybody.
    ///
    /// Output: `true` when `designed_for` contains the [`EVERYONE`] sentinel.
    #[must_use]
    pub fn is_for_everyone(&self) -> bool {
        self.designed_for.iter().any(|p| p == EVERYONE)
    }

    /// What: Report whether the launch link points somewhere real.
    ///
    /// Output: `false` for empty links and the `#` placeholder.
    #[must_use]
    pub fn has_launch_url(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && url != "#"
    }
}

/// Category entry of the lookup table used to populate the category selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Value compared against [`AppRecord::category`], or [`ALL`].
    pub id: String,
    /// Human label.
    pub name: String,
    /// Icon glyph shown next to the label.
    #[serde(default)]
    pub icon: String,
}

/// Platform entry of the lookup table; carries the badge color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Value compared against [`AppRecord::platform`], or [`ALL`].
    pub id: String,
    /// Human label.
    pub name: String,
    /// Badge color name (`gray`, `orange`, `blue`, `purple`, `green`, `red`).
    #[serde(default = "default_badge")]
    pub badge: String,
}

/// Team entry of the lookup table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    /// Value compared against [`AppRecord::team`], or [`ALL`].
    pub id: String,
    /// Human label.
    pub name: String,
}

/// Badge used for platforms missing from the lookup table.
pub const NEUTRAL_BADGE: &str = "gray";

fn default_badge() -> String {
    NEUTRAL_BADGE.to_string()
}
