//! Event handling layer for the app store TUI.
//!
//! Global chords are handled here; focus-specific keys are delegated to
//! `search` and `filters`.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::logic::{FilterField, clear_filters, cycle_filter, move_selection};
use crate::state::{AppState, Focus};

mod filters;
mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(*ke, app)
        }
        CEvent::Mouse(m) => {
            match m.kind {
                MouseEventKind::ScrollDown => move_selection(app, 1),
                MouseEventKind::ScrollUp => move_selection(app, -1),
                _ => {}
            }
            false
        }
        _ => false,
    }
}

/// What: Apply one key press.
///
/// Details:
/// - `Esc`/`Ctrl+C` quit, `Ctrl+R` clears every filter, `Tab` toggles between
///   the search box and the filter bar, F2-F5 step the four selectors forward
///   (backward with Shift) from either focus.
fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    let shift = ke.modifiers.contains(KeyModifiers::SHIFT);
    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('r') if ctrl => {
            clear_filters(app);
            return false;
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Search => Focus::Filters(FilterField::Category),
                Focus::Filters(_) => Focus::Search,
            };
            return false;
        }
        KeyCode::BackTab => {
            app.focus = match app.focus {
                Focus::Search => Focus::Filters(FilterField::Person),
                Focus::Filters(_) => Focus::Search,
            };
            return false;
        }
        KeyCode::F(n @ 2..=5) => {
            let field = FilterField::ALL_FIELDS[usize::from(n - 2)];
            cycle_filter(app, field, !shift);
            return false;
        }
        _ => {}
    }
    match app.focus {
        Focus::Search => search::handle_search_key(ke, app),
        Focus::Filters(field) => filters::handle_filters_key(ke, app, field),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn new_app() -> AppState {
        AppState::new(Catalog::builtin().expect("builtin"))
    }

    fn key(code: KeyCode, mods: KeyModifiers) -> CEvent {
        CEvent::Key(KeyEvent {
            code,
            modifiers: mods,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        })
    }

    fn typed(app: &mut AppState, s: &str) {
        for ch in s.chars() {
            let _ = handle_event(&key(KeyCode::Char(ch), KeyModifiers::NONE), app);
        }
    }

    #[test]
    /// What: Typing edits the query and narrows results; Backspace widens them again
    fn events_typing_filters_results() {
        let mut app = new_app();
        typed(&mut app, "csv");
        assert_eq!(app.filter.query, "csv");
        assert_eq!(app.results.len(), 1);
        let _ = handle_event(&key(KeyCode::Backspace, KeyModifiers::NONE), &mut app);
        assert_eq!(app.filter.query, "cs");
    }

    #[test]
    /// What: Esc and Ctrl+C request exit; release events are ignored
    fn events_exit_keys() {
        let mut app = new_app();
        assert!(handle_event(&key(KeyCode::Esc, KeyModifiers::NONE), &mut app));
        assert!(handle_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app));
        let release = CEvent::Key(KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        });
        assert!(!handle_event(&release, &mut app));
    }

    #[test]
    /// What: F-keys step selectors and Ctrl+R clears everything
    fn events_function_keys_and_clear() {
        let mut app = new_app();
        let _ = handle_event(&key(KeyCode::F(3), KeyModifiers::NONE), &mut app);
        assert_eq!(app.filter.platform, "Claude Artifact");
        assert_eq!(app.results.len(), 2);
        let _ = handle_event(&key(KeyCode::F(3), KeyModifiers::SHIFT), &mut app);
        assert_eq!(app.filter.platform, "all");
        typed(&mut app, "zzz");
        assert!(app.results.is_empty());
        let _ = handle_event(&key(KeyCode::Char('r'), KeyModifiers::CONTROL), &mut app);
        assert!(!app.filter.is_active());
        assert_eq!(app.results.len(), 5);
    }

    #[test]
    /// What: Tab moves focus into the filter bar, where arrows change values
    fn events_filter_bar_focus() {
        let mut app = new_app();
        let _ = handle_event(&key(KeyCode::Tab, KeyModifiers::NONE), &mut app);
        assert_eq!(app.focus, Focus::Filters(FilterField::Category));
        let _ = handle_event(&key(KeyCode::Down, KeyModifiers::NONE), &mut app);
        assert_eq!(app.focus, Focus::Filters(FilterField::Platform));
        let _ = handle_event(&key(KeyCode::Right, KeyModifiers::NONE), &mut app);
        assert_eq!(app.filter.platform, "Claude Artifact");
        // Letters do not edit the query while the filter bar has focus
        typed(&mut app, "x");
        assert!(app.filter.query.is_empty());
        let _ = handle_event(&key(KeyCode::Tab, KeyModifiers::NONE), &mut app);
        assert_eq!(app.focus, Focus::Search);
    }

    #[test]
    /// What: Arrow keys and mouse wheel move the selection
    fn events_selection_movement() {
        let mut app = new_app();
        let _ = handle_event(&key(KeyCode::Down, KeyModifiers::NONE), &mut app);
        assert_eq!(app.selected, 1);
        let _ = handle_event(&key(KeyCode::End, KeyModifiers::NONE), &mut app);
        assert_eq!(app.selected, 4);
        let wheel = CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        let _ = handle_event(&wheel, &mut app);
        assert_eq!(app.selected, 3);
    }

    #[test]
    /// What: Enter on a placeholder link shows a toast instead of launching
    fn events_enter_on_placeholder_link() {
        let mut app = new_app();
        // Quick Calculator has a "#" link
        let _ = handle_event(&key(KeyCode::Down, KeyModifiers::NONE), &mut app);
        let _ = handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        assert!(app.toast.is_some());
    }
}
