use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{FilterField, cycle_filter};
use crate::state::{AppState, Focus};

/// What: Handle a key while the filter bar has focus.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Session state
/// - `field`: Selector currently under focus
///
/// Details:
/// - Up/Down (and `k`/`j`) pick the selector, Left/Right (and `h`/`l`)
///   step through its options, Enter returns to the search box.
pub fn handle_filters_key(ke: KeyEvent, app: &mut AppState, field: FilterField) {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.focus = Focus::Filters(field.prev()),
        KeyCode::Down | KeyCode::Char('j') => app.focus = Focus::Filters(field.next()),
        KeyCode::Left | KeyCode::Char('h') => cycle_filter(app, field, false),
        KeyCode::Right | KeyCode::Char('l') => cycle_filter(app, field, true),
        KeyCode::Enter => app.focus = Focus::Search,
        _ => {}
    }
}
