//! Formatting helpers shared by the UI panes.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::catalog::{AppRecord, EVERYONE};
use crate::theme::Theme;

/// Names shown in list rows before the designed-for label is cut off.
const LIST_PEOPLE_LIMIT: usize = 2;

/// What: Map a platform badge name to a theme color.
///
/// Inputs:
/// - `th`: Active theme
/// - `badge`: Badge color name from the platform table (`orange`, `blue`, ...)
///
/// Output:
/// - Theme color; unknown names fall back to the neutral gray tone.
#[must_use]
pub fn badge_color(th: &Theme, badge: &str) -> Color {
    match badge.trim().to_ascii_lowercase().as_str() {
        "orange" => th.peach,
        "blue" => th.blue,
        "purple" => th.mauve,
        "green" => th.green,
        "red" => th.red,
        "yellow" => th.yellow,
        _ => th.overlay1,
    }
}

/// What: Label for the "designed for" badge.
///
/// Inputs:
/// - `app`: Record to describe
/// - `list_view`: `true` for result rows, where long lists are shortened
///
/// Output:
/// - `None` when the first entry is the Everyone sentinel; otherwise the joined names.
///
/// Details:
/// - List rows show at most two names followed by `...`.
#[must_use]
pub fn designed_for_label(app: &AppRecord, list_view: bool) -> Option<String> {
    if app.designed_for.is_empty() || app.designed_for[0] == EVERYONE {
        return None;
    }
    if list_view && app.designed_for.len() > LIST_PEOPLE_LIMIT {
        let head = app.designed_for[..LIST_PEOPLE_LIMIT].join(", ");
        return Some(format!("{head}..."));
    }
    Some(app.designed_for.join(", "))
}

/// What: Cut `s` to at most `max` terminal cells, appending `…` when shortened.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Themed `key: value` line for the details pane.
#[must_use]
pub fn kv(key: &str, val: String, th: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{key}: "),
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(val, Style::default().fg(th.text)),
    ])
}
