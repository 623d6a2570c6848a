//! The catalog predicate and result recomputation.

use serde::{Deserialize, Serialize};

use crate::catalog::{ALL, AppRecord, EVERYONE};
use crate::state::AppState;

/// One of the four selector-style filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Exact match on [`AppRecord::category`].
    Category,
    /// Exact match on [`AppRecord::platform`].
    Platform,
    /// Exact match on [`AppRecord::team`].
    Team,
    /// Membership in [`AppRecord::designed_for`], with the Everyone sentinel.
    Person,
}

impl FilterField {
    /// Selector order used by the filter bar.
    pub const ALL_FIELDS: [Self; 4] = [Self::Category, Self::Platform, Self::Team, Self::Person];

    /// Label shown in front of the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Platform => "Platform",
            Self::Team => "Team",
            Self::Person => "Designed for",
        }
    }

    /// Next field in the filter bar, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Category => Self::Platform,
            Self::Platform => Self::Team,
            Self::Team => Self::Person,
            Self::Person => Self::Category,
        }
    }

    /// Previous field in the filter bar, wrapping.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Category => Self::Person,
            Self::Platform => Self::Category,
            Self::Team => Self::Platform,
            Self::Person => Self::Team,
        }
    }
}

/// What: The five criteria a viewer can apply to the catalog.
///
/// Inputs:
/// - Edited by the search box, the filter bar, or CLI flags.
///
/// Output:
/// - Evaluated per record by [`FilterState::matches`].
///
/// Details:
/// - Selector fields hold `"all"` when unrestricted; the query is unrestricted
///   when empty.
/// - The query is compared as typed, case-insensitively, without trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search over name and description.
    pub query: String,
    /// Category id or `"all"`.
    pub category: String,
    /// Platform id or `"all"`.
    pub platform: String,
    /// Team id or `"all"`.
    pub team: String,
    /// Person name or `"all"`.
    pub person: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL.to_string(),
            platform: ALL.to_string(),
            team: ALL.to_string(),
            person: ALL.to_string(),
        }
    }
}

impl FilterState {
    /// What: Report whether any criterion restricts the catalog.
    ///
    /// Output:
    /// - `true` if the query is non-empty or any selector is not `"all"`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.category != ALL
            || self.platform != ALL
            || self.team != ALL
            || self.person != ALL
    }

    /// Reset every criterion to its unrestricted value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Current value of a selector field.
    #[must_use]
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Category => &self.category,
            FilterField::Platform => &self.platform,
            FilterField::Team => &self.team,
            FilterField::Person => &self.person,
        }
    }

    /// Replace the value of a selector field.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Category => &mut self.category,
            FilterField::Platform => &mut self.platform,
            FilterField::Team => &mut self.team,
            FilterField::Person => &mut self.person,
        };
        *slot = value.into();
    }

    /// What: Evaluate all five criteria against one record.
    ///
    /// Output:
    /// - `true` only when every criterion holds.
    #[must_use]
    pub fn matches(&self, app: &AppRecord) -> bool {
        self.matches_with_query(app, &self.query.to_lowercase())
    }

    /// Predicate with the query already lowercased, so bulk filtering lowers it once.
    fn matches_with_query(&self, app: &AppRecord, query_lower: &str) -> bool {
        let matches_search = query_lower.is_empty()
            || app.name.to_lowercase().contains(query_lower)
            || app.description.to_lowercase().contains(query_lower);
        let matches_category = self.category == ALL || app.category == self.category;
        let matches_platform = self.platform == ALL || app.platform == self.platform;
        let matches_team = self.team == ALL || app.team == self.team;
        let matches_person = self.person == ALL
            || app.designed_for.iter().any(|p| *p == self.person)
            || app.designed_for.iter().any(|p| p == EVERYONE);
        matches_search && matches_category && matches_platform && matches_team && matches_person
    }
}

/// What: Select the records matching every criterion of `state`.
///
/// Inputs:
/// - `apps`: Records to filter (a catalog slice or an earlier result)
/// - `state`: Active criteria
///
/// Output:
/// - Matching records in their input order.
///
/// Details:
/// - Pure; unknown selector values simply match nothing.
#[must_use]
pub fn filter<'a, I>(apps: I, state: &FilterState) -> Vec<&'a AppRecord>
where
    I: IntoIterator<Item = &'a AppRecord>,
{
    let query_lower = state.query.to_lowercase();
    apps.into_iter()
        .filter(|app| state.matches_with_query(app, &query_lower))
        .collect()
}

/// What: Select the records flagged as featured, in input order.
#[must_use]
pub fn featured<'a, I>(apps: I) -> Vec<&'a AppRecord>
where
    I: IntoIterator<Item = &'a AppRecord>,
{
    apps.into_iter().filter(|app| app.featured).collect()
}

/// What: Human count for the results heading.
///
/// Output:
/// - `"1 app"` for one, `"N apps"` otherwise.
#[must_use]
pub fn result_count_label(n: usize) -> String {
    if n == 1 {
        "1 app".to_string()
    } else {
        format!("{n} apps")
    }
}

/// What: Recompute `app.results` from the catalog and current filter state.
///
/// Inputs:
/// - `app`: Mutable application state containing the catalog, filter and selection
///
/// Output:
/// - Updates `app.results` (catalog indices) and preserves selection when possible.
///
/// Details:
/// - Selection is restored by app id when the record is still listed; otherwise
///   clamped, or cleared if the list is empty.
pub fn apply_filters_preserve_selection(app: &mut AppState) {
    let prev_id = app.selected_app().map(|a| a.id.clone());

    let query_lower = app.filter.query.to_lowercase();
    app.results = app
        .catalog
        .apps()
        .iter()
        .enumerate()
        .filter(|(_, rec)| app.filter.matches_with_query(rec, &query_lower))
        .map(|(i, _)| i)
        .collect();
    tracing::debug!(
        results = app.results.len(),
        active = app.filter.is_active(),
        "recomputed results"
    );

    let restored = prev_id.and_then(|id| {
        app.results
            .iter()
            .position(|&i| app.catalog.apps()[i].id == id)
    });
    if let Some(pos) = restored {
        app.selected = pos;
        app.list_state.select(Some(pos));
    } else if app.results.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
    } else {
        app.selected = app.selected.min(app.results.len() - 1);
        app.list_state.select(Some(app.selected));
    }
}
