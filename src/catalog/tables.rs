//! Lookup tables backing the category, platform and team selectors.

use std::collections::HashSet;

use super::types::{ALL, AppRecord, CategoryInfo, PlatformInfo, TeamInfo};

/// What: Build the stock category table.
///
/// Output: `all` first, then the known categories in display order.
#[must_use]
pub fn default_categories() -> Vec<CategoryInfo> {
    [
        (ALL, "All Apps", "🏠"),
        ("Productivity", "Productivity", "⚡"),
        ("Media", "Media", "🎬"),
        ("Data", "Data", "📊"),
        ("Communication", "Communication", "💬"),
        ("Utilities", "Utilities", "🔧"),
        ("Documentation", "Documentation", "📚"),
    ]
    .into_iter()
    .map(|(id, name, icon)| CategoryInfo {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// What: Build the stock platform table with badge colors.
#[must_use]
pub fn default_platforms() -> Vec<PlatformInfo> {
    [
        (ALL, "All Platforms", "gray"),
        ("Claude Artifact", "Claude Artifact", "orange"),
        ("VS Code/GitHub", "VS Code/GitHub", "blue"),
        ("Slack", "Slack", "purple"),
    ]
    .into_iter()
    .map(|(id, name, badge)| PlatformInfo {
        id: id.to_string(),
        name: name.to_string(),
        badge: badge.to_string(),
    })
    .collect()
}

/// What: Derive the team table from the records themselves.
///
/// Inputs:
/// - `apps`: Catalog records
///
/// Output:
/// - `all` entry followed by each distinct non-empty team in first-seen order.
#[must_use]
pub fn derive_teams(apps: &[AppRecord]) -> Vec<TeamInfo> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut teams = vec![TeamInfo {
        id: ALL.to_string(),
        name: "All Teams".to_string(),
    }];
    for app in apps {
        let team = app.team.as_str();
        if !team.is_empty() && seen.insert(team) {
            teams.push(TeamInfo {
                id: team.to_string(),
                name: team.to_string(),
            });
        }
    }
    teams
}

/// What: Make sure a table starts with the wildcard entry.
///
/// Details:
/// - Hand-written catalog files often omit `all`; the selectors rely on it
///   being the first option.
pub(super) fn ensure_wildcard_first<T>(
    mut table: Vec<T>,
    id_of: impl Fn(&T) -> &str,
    wildcard: impl FnOnce() -> T,
) -> Vec<T> {
    if let Some(pos) = table.iter().position(|t| id_of(t) == ALL) {
        if pos != 0 {
            let entry = table.remove(pos);
            table.insert(0, entry);
        }
    } else {
        table.insert(0, wildcard());
    }
    table
}
