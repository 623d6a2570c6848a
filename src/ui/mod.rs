//! Terminal layout for the app store browser.
//!
//! Top to bottom: search, filter bar, featured strip (only without active
//! filters), results beside details, and a one-line footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};

mod details;
mod filters;
pub mod helpers;
mod results;

pub use details::format_details_lines;

/// What: Draw one full frame.
///
/// Inputs:
/// - `f`: Frame from the terminal backend
/// - `app`: Session state; the results list state is updated in place
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let featured_h: u16 = if app.featured_visible() { 3 } else { 0 };
    let footer_h: u16 = 1;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(featured_h),
            Constraint::Min(3),
            Constraint::Length(footer_h),
        ])
        .split(area);

    filters::render_search(f, app, chunks[0], &th);
    filters::render_filter_bar(f, app, chunks[1], &th);
    if featured_h > 0 {
        results::render_featured(f, app, chunks[2], &th);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);
    results::render_results(f, app, body[0], &th);
    details::render_details(f, app, body[1], &th);

    render_footer(f, app, chunks[4], &th);
}

/// Footer: toast if one is pending, otherwise the keybind hints.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let line = if let Some(toast) = &app.toast {
        Line::from(Span::styled(
            toast.text.clone(),
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ))
    } else if app.show_keybinds_footer {
        let hints: &[(&str, &str)] = match app.focus {
            Focus::Search => &[
                ("↑/↓", "move"),
                ("Enter", "open"),
                ("F2-F5", "filters"),
                ("Tab", "filter bar"),
                ("Ctrl+R", "clear"),
                ("Esc", "quit"),
            ],
            Focus::Filters(_) => &[
                ("↑/↓", "field"),
                ("←/→", "value"),
                ("Tab", "search"),
                ("Ctrl+R", "clear"),
                ("Esc", "quit"),
            ],
        };
        let mut segs = Vec::new();
        for (key, what) in hints {
            segs.push(Span::styled(
                format!(" {key} "),
                Style::default().fg(th.crust).bg(th.overlay2),
            ));
            segs.push(Span::styled(format!(" {what}  "), Style::default().fg(th.subtext0)));
        }
        Line::from(segs)
    } else {
        Line::from("")
    };
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.mantle)),
        area,
    );
}
