use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{apply_filters_preserve_selection, jump_selection, move_selection};
use crate::state::AppState;

/// Rows moved by PageUp/PageDown.
const PAGE: isize = 10;

/// What: Handle a key while the search box has focus.
///
/// Details:
/// - Printable characters append to the query and Backspace removes the last
///   one; either recomputes results.
/// - Navigation keys move the selection; Enter opens the selected link.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.filter.query.push(ch);
            apply_filters_preserve_selection(app);
        }
        KeyCode::Backspace => {
            if app.filter.query.pop().is_some() {
                apply_filters_preserve_selection(app);
            }
        }
        KeyCode::Up => move_selection(app, -1),
        KeyCode::Down => move_selection(app, 1),
        KeyCode::PageUp => move_selection(app, -PAGE),
        KeyCode::PageDown => move_selection(app, PAGE),
        KeyCode::Home => jump_selection(app, false),
        KeyCode::End => jump_selection(app, true),
        KeyCode::Enter => open_selected(app),
        _ => {}
    }
}

/// Open the selected record's link, or explain why it cannot be opened.
fn open_selected(app: &mut AppState) {
    let Some(rec) = app.selected_app() else {
        return;
    };
    if rec.has_launch_url() {
        let url = rec.url.clone();
        let name = rec.name.clone();
        crate::util::open_url(&url);
        app.notify(format!("Opening {name}..."));
    } else {
        let msg = format!("{} has no link yet", rec.name);
        tracing::debug!(id = %rec.id, "launch link is a placeholder");
        app.notify(msg);
    }
}
