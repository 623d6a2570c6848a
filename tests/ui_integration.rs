//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests verify that the TUI renders correctly across different session states
//! without requiring a real terminal.

use chrono::NaiveDate;
use ratatui::{Terminal, backend::TestBackend};

use appstore::catalog::Catalog;
use appstore::logic::{FilterField, FilterState, cycle_filter};
use appstore::state::{AppState, Focus};
use appstore::theme::Settings;

/// Build a session over the builtin catalog with a fixed reference date.
fn new_app(today: NaiveDate) -> AppState {
    AppState::with_settings(
        Catalog::builtin().expect("builtin catalog"),
        &Settings::default(),
        today,
    )
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Flatten the rendered buffer into newline-separated rows.
fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn render(app: &mut AppState) -> String {
    let terminal = appstore::app::draw_once(app, 160, 40).expect("draw");
    screen_text(&terminal)
}

#[test]
/// What: Unfiltered view shows the featured strip, all apps and the count
fn ui_renders_featured_strip_without_filters() {
    let mut app = new_app(day(2025, 12, 10));
    let text = render(&mut app);
    assert!(text.contains("Featured"));
    assert!(text.contains("All Apps"));
    assert!(text.contains("5 apps"));
    assert!(text.contains("Status Bot"));
}

#[test]
/// What: Any active filter hides the featured strip and retitles the list
fn ui_hides_featured_strip_with_filters() {
    let mut app = new_app(day(2025, 12, 10));
    app.set_filter(FilterState {
        query: "bot".into(),
        ..FilterState::default()
    });
    let text = render(&mut app);
    assert!(!text.contains("Featured"));
    assert!(text.contains("Results"));
    assert!(text.contains("1 app"));

    let mut app = new_app(day(2025, 12, 10));
    cycle_filter(&mut app, FilterField::Team, true);
    assert!(!render(&mut app).contains("Featured"));
}

#[test]
/// What: No matches renders the empty state message
fn ui_renders_empty_state() {
    let mut app = new_app(day(2025, 12, 10));
    app.set_filter(FilterState {
        query: "no such app anywhere".into(),
        ..FilterState::default()
    });
    let text = render(&mut app);
    assert!(text.contains("No apps found"));
    assert!(text.contains("Try adjusting your search or filters"));
    assert!(text.contains("0 apps"));
    assert!(text.contains("Nothing selected"));
}

#[test]
/// What: Recently-updated badge follows the reference date
///
/// - Input: Transcript Cleaner (updated Dec 4, 2025) selected
/// - Output: Badge shown six days later, absent half a year later
fn ui_details_recent_update_badge() {
    let mut app = new_app(day(2025, 12, 10));
    let text = render(&mut app);
    assert!(text.contains("Transcript Cleaner"));
    assert!(text.contains("Recently updated"));
    assert!(text.contains("Dec 4, 2025"));

    let mut app = new_app(day(2026, 6, 10));
    assert!(!render(&mut app).contains("Recently updated"));
}

#[test]
/// What: Filter bar shows selector labels and the focused state
fn ui_filter_bar_labels_and_focus() {
    let mut app = new_app(day(2025, 12, 10));
    let text = render(&mut app);
    assert!(text.contains("Designed for"));
    assert!(text.contains("All Team Members"));

    app.focus = Focus::Filters(FilterField::Platform);
    cycle_filter(&mut app, FilterField::Platform, true);
    let text = render(&mut app);
    assert!(text.contains("Filters (focused)"));
    assert!(text.contains("Claude Artifact"));
}

#[test]
/// What: Settings can turn off the featured strip and the keybinds footer
fn ui_respects_settings_toggles() {
    let settings = Settings {
        show_featured: false,
        show_keybinds_footer: false,
        ..Settings::default()
    };
    let mut app = AppState::with_settings(
        Catalog::builtin().expect("builtin catalog"),
        &settings,
        day(2025, 12, 10),
    );
    let text = render(&mut app);
    assert!(!text.contains("Featured"));
    assert!(!text.contains("Ctrl+R"));
}
