//! Selection movement and selector cycling on a live session.

use crate::logic::filter::{FilterField, apply_filters_preserve_selection};
use crate::state::AppState;

/// Move the selection by `delta`, clamped to the current results.
///
/// Behavior:
/// - No-op on an empty result list.
/// - Updates both `app.selected` and the list widget state.
pub fn move_selection(app: &mut AppState, delta: isize) {
    if app.results.is_empty() {
        return;
    }
    let last = app.results.len() - 1;
    let idx = app.selected.saturating_add_signed(delta).min(last);
    app.selected = idx;
    app.list_state.select(Some(idx));
}

/// Jump the selection to the first (`to_end == false`) or last result.
pub fn jump_selection(app: &mut AppState, to_end: bool) {
    if app.results.is_empty() {
        return;
    }
    app.selected = if to_end { app.results.len() - 1 } else { 0 };
    app.list_state.select(Some(app.selected));
}

/// What: Step a selector field to the next or previous option.
///
/// Inputs:
/// - `app`: Application state
/// - `field`: Selector to change
/// - `forward`: Direction; options wrap around
///
/// Output:
/// - Updates the filter and recomputes results.
///
/// Details:
/// - A current value missing from the option list (e.g., a CLI value the
///   catalog does not know) steps to the first option going forward and the
///   last going backward.
pub fn cycle_filter(app: &mut AppState, field: FilterField, forward: bool) {
    let options = app.filter_options(field);
    if options.is_empty() {
        return;
    }
    let n = options.len();
    let current = options.iter().position(|o| o == app.filter.get(field));
    let next = match (current, forward) {
        (Some(i), true) => (i + 1) % n,
        (Some(i), false) => (i + n - 1) % n,
        (None, true) => 0,
        (None, false) => n - 1,
    };
    tracing::debug!(?field, value = %options[next], "filter changed");
    app.filter.set(field, options[next].clone());
    apply_filters_preserve_selection(app);
}

/// Reset every filter and recompute results.
pub fn clear_filters(app: &mut AppState) {
    app.filter.clear();
    apply_filters_preserve_selection(app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn new_app() -> AppState {
        AppState::new(Catalog::builtin().expect("builtin"))
    }

    #[test]
    /// What: Selection clamps at both ends
    fn move_selection_clamps() {
        let mut app = new_app();
        move_selection(&mut app, -3);
        assert_eq!(app.selected, 0);
        move_selection(&mut app, 100);
        assert_eq!(app.selected, app.results.len() - 1);
        jump_selection(&mut app, false);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    /// What: Category cycling walks the table in order and wraps
    ///
    /// - Input: Builtin catalog, cycle forward from "all"
    /// - Output: Productivity, then wrap back to all after the last entry
    fn cycle_filter_category_wraps() {
        let mut app = new_app();
        cycle_filter(&mut app, FilterField::Category, true);
        assert_eq!(app.filter.category, "Productivity");
        assert_eq!(app.results.len(), 1);
        cycle_filter(&mut app, FilterField::Category, false);
        cycle_filter(&mut app, FilterField::Category, false);
        assert_eq!(app.filter.category, "Documentation");
        assert!(app.results.is_empty());
        cycle_filter(&mut app, FilterField::Category, true);
        assert_eq!(app.filter.category, "all");
        assert_eq!(app.results.len(), app.catalog.apps().len());
    }

    #[test]
    /// What: Person options start with all, then Everyone, then names
    fn cycle_filter_person_options() {
        let mut app = new_app();
        cycle_filter(&mut app, FilterField::Person, true);
        assert_eq!(app.filter.person, "Everyone");
        cycle_filter(&mut app, FilterField::Person, true);
        assert_eq!(app.filter.person, "Analytics Team");
        // Analytics-only app plus the three Everyone apps
        assert_eq!(app.results.len(), 4);
    }

    #[test]
    /// What: Unknown current value steps to the first option
    fn cycle_filter_from_unknown_value() {
        let mut app = new_app();
        app.filter.team = "Ghosts".into();
        cycle_filter(&mut app, FilterField::Team, true);
        assert_eq!(app.filter.team, "all");
    }

    #[test]
    /// What: Clearing resets every field and restores the full list
    fn clear_filters_restores_everything() {
        let mut app = new_app();
        app.filter.query = "csv".into();
        apply_filters_preserve_selection(&mut app);
        assert_eq!(app.results.len(), 1);
        clear_filters(&mut app);
        assert!(!app.filter.is_active());
        assert_eq!(app.results.len(), 5);
    }
}
