use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::{FilterField, result_count_label};
use crate::state::{AppState, Focus};
use crate::theme::Theme;

/// What: Render the search input with the result count on the right.
///
/// Details:
/// - Places the terminal cursor after the query while the search box is focused.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = matches!(app.focus, Focus::Search);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(area);

    let input_line = if app.filter.query.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(
                "Search apps...",
                Style::default().fg(th.overlay1).add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(th.sapphire)),
            Span::styled(app.filter.query.clone(), Style::default().fg(th.text)),
        ])
    };
    let input = Paragraph::new(input_line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    "Search",
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
        );
    f.render_widget(input, cols[0]);

    let count = Paragraph::new(Line::from(Span::styled(
        result_count_label(app.results.len()),
        Style::default().fg(th.subtext1),
    )))
    .style(Style::default().bg(th.base))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(count, cols[1]);

    if focused {
        let query_w = u16::try_from(app.filter.query.width()).unwrap_or(u16::MAX);
        let right = cols[0].x + cols[0].width.saturating_sub(2);
        let x = (cols[0].x + 1 + 2).saturating_add(query_w).min(right);
        f.set_cursor_position(Position::new(x, cols[0].y + 1));
    }
}

/// What: Render the four selectors in one bordered row.
///
/// Details:
/// - The selector under focus is highlighted; non-default values are accented.
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused_field = match app.focus {
        Focus::Filters(field) => Some(field),
        Focus::Search => None,
    };
    let mut segs: Vec<Span> = Vec::new();
    for (i, field) in FilterField::ALL_FIELDS.into_iter().enumerate() {
        if i > 0 {
            segs.push(Span::styled("  ", Style::default()));
        }
        let is_focus = focused_field == Some(field);
        let is_set = app.filter.get(field) != crate::catalog::ALL;
        let label_style = Style::default().fg(if is_focus { th.mauve } else { th.overlay1 });
        let mut value_style = Style::default().fg(if is_set { th.sapphire } else { th.text });
        if is_focus {
            value_style = value_style
                .bg(th.surface1)
                .add_modifier(Modifier::BOLD);
        }
        segs.push(Span::styled(format!("{}: ", field.label()), label_style));
        segs.push(Span::styled(
            format!("‹ {} ›", app.filter_value_label(field)),
            value_style,
        ));
    }
    let title = if focused_field.is_some() {
        "Filters (focused)"
    } else {
        "Filters"
    };
    let bar = Paragraph::new(Line::from(segs))
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(if focused_field.is_some() {
                        th.mauve
                    } else {
                        th.overlay1
                    }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused_field.is_some() {
                    th.mauve
                } else {
                    th.surface1
                })),
        );
    f.render_widget(bar, area);
}
