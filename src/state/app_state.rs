//! Central `AppState` container for one browsing session.

use chrono::NaiveDate;
use ratatui::widgets::ListState;

use crate::catalog::{ALL, AppRecord, Catalog};
use crate::logic::{FilterField, FilterState, apply_filters_preserve_selection, distinct_people};
use crate::state::types::{Focus, Toast};
use crate::theme::Settings;

/// Application state shared by the event and UI layers.
///
/// Owns the read-only catalog and the session's mutable [`FilterState`].
/// Every mutation of the filter must be followed by
/// [`apply_filters_preserve_selection`] so `results` stays in sync.
#[derive(Debug)]
pub struct AppState {
    /// Loaded catalog; never mutated.
    pub catalog: Catalog,
    /// Active search and selector criteria.
    pub filter: FilterState,
    /// Indices into `catalog.apps()` of the records currently listed.
    pub results: Vec<usize>,
    /// Indices of featured records, computed once at startup.
    pub featured: Vec<usize>,
    /// Options for the person selector (`Everyone` first, then names).
    pub people: Vec<String>,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// Which part of the screen receives keys.
    pub focus: Focus,
    /// Reference date for the recent-update badge.
    pub today: NaiveDate,
    /// Recent-update window in days.
    pub recent_update_days: i64,
    /// Whether the featured strip may be shown.
    pub show_featured: bool,
    /// Whether the keybinds footer is shown.
    pub show_keybinds_footer: bool,
    /// Transient footer message.
    pub toast: Option<Toast>,
}

impl AppState {
    /// What: Start a session over `catalog` with default settings and no filters.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_settings(catalog, &Settings::default(), crate::util::today())
    }

    /// What: Start a session honoring user settings.
    ///
    /// Inputs:
    /// - `catalog`: Loaded catalog
    /// - `settings`: Parsed settings (featured strip, footer, recent window)
    /// - `today`: Reference date for the recent-update badge
    ///
    /// Output:
    /// - State with every catalog record listed and the first one selected.
    #[must_use]
    pub fn with_settings(catalog: Catalog, settings: &Settings, today: NaiveDate) -> Self {
        let featured = catalog
            .apps()
            .iter()
            .enumerate()
            .filter(|(_, a)| a.featured)
            .map(|(i, _)| i)
            .collect();
        let people = distinct_people(catalog.apps());
        let mut state = Self {
            catalog,
            filter: FilterState::default(),
            results: Vec::new(),
            featured,
            people,
            selected: 0,
            list_state: ListState::default(),
            focus: Focus::default(),
            today,
            recent_update_days: settings.recent_update_days,
            show_featured: settings.show_featured,
            show_keybinds_footer: settings.show_keybinds_footer,
            toast: None,
        };
        apply_filters_preserve_selection(&mut state);
        state
    }

    /// Replace the filter (e.g., from CLI flags) and recompute results.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        apply_filters_preserve_selection(self);
    }

    /// Currently highlighted record, if any.
    #[must_use]
    pub fn selected_app(&self) -> Option<&AppRecord> {
        self.results
            .get(self.selected)
            .and_then(|&i| self.catalog.apps().get(i))
    }

    /// Records currently listed, in catalog order.
    #[must_use]
    pub fn result_apps(&self) -> impl Iterator<Item = &AppRecord> {
        self.results
            .iter()
            .filter_map(|&i| self.catalog.apps().get(i))
    }

    /// Featured records, in catalog order.
    #[must_use]
    pub fn featured_apps(&self) -> impl Iterator<Item = &AppRecord> {
        self.featured
            .iter()
            .filter_map(|&i| self.catalog.apps().get(i))
    }

    /// Whether the featured strip should be drawn right now.
    #[must_use]
    pub fn featured_visible(&self) -> bool {
        self.show_featured && !self.filter.is_active() && !self.featured.is_empty()
    }

    /// What: Option ids for a selector, `all` first.
    #[must_use]
    pub fn filter_options(&self, field: FilterField) -> Vec<String> {
        match field {
            FilterField::Category => self.catalog.categories().iter().map(|c| c.id.clone()).collect(),
            FilterField::Platform => self.catalog.platforms().iter().map(|p| p.id.clone()).collect(),
            FilterField::Team => self.catalog.teams().iter().map(|t| t.id.clone()).collect(),
            FilterField::Person => std::iter::once(ALL.to_string())
                .chain(self.people.iter().cloned())
                .collect(),
        }
    }

    /// What: Human label for the current value of a selector.
    ///
    /// Details:
    /// - Falls back to the raw value when the tables do not know it.
    #[must_use]
    pub fn filter_value_label(&self, field: FilterField) -> String {
        let value = self.filter.get(field);
        match field {
            FilterField::Category => self
                .catalog
                .categories()
                .iter()
                .find(|c| c.id == value)
                .map_or_else(|| value.to_string(), |c| {
                    if c.icon.is_empty() {
                        c.name.clone()
                    } else {
                        format!("{} {}", c.icon, c.name)
                    }
                }),
            FilterField::Platform => self
                .catalog
                .platforms()
                .iter()
                .find(|p| p.id == value)
                .map_or_else(|| value.to_string(), |p| p.name.clone()),
            FilterField::Team => self
                .catalog
                .teams()
                .iter()
                .find(|t| t.id == value)
                .map_or_else(|| value.to_string(), |t| t.name.clone()),
            FilterField::Person => {
                if value == ALL {
                    "All Team Members".to_string()
                } else {
                    value.to_string()
                }
            }
        }
    }

    /// Show a transient footer message.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast::new(text));
    }

    /// Age the toast by one tick, dropping it when expired.
    pub fn tick(&mut self) {
        if let Some(t) = self.toast.as_mut() {
            t.ttl = t.ttl.saturating_sub(1);
            if t.ttl == 0 {
                self.toast = None;
            }
        }
    }
}
