use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::logic::result_count_label;
use crate::state::{AppState, Focus};
use crate::theme::Theme;
use crate::ui::helpers::{badge_color, designed_for_label, truncate_to_width};

/// What: Render the results list, or the empty state when nothing matches.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Session state; the list widget state is updated in place
/// - `area`: Target rectangle
/// - `th`: Active theme
///
/// Details:
/// - The title reads "All Apps" without filters and "Results" with them,
///   followed by the count label.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let heading = if app.filter.is_active() {
        "Results"
    } else {
        "All Apps"
    };
    let focused = matches!(app.focus, Focus::Search);
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!("{heading} "),
                Style::default()
                    .fg(if focused { th.mauve } else { th.overlay1 })
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({})", result_count_label(app.results.len())),
                Style::default().fg(th.overlay1),
            ),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));

    if app.results.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No apps found",
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try adjusting your search or filters",
                Style::default().fg(th.subtext0),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(th.base))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner_w = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = app
        .result_apps()
        .map(|a| {
            let badge = badge_color(th, app.catalog.platform_badge(&a.platform));
            let mut segs = vec![
                Span::raw(format!("{} ", a.icon)),
                Span::styled(
                    a.name.clone(),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("[{}]", a.platform), Style::default().fg(badge)),
            ];
            if let Some(people) = designed_for_label(a, true) {
                segs.push(Span::raw(" "));
                segs.push(Span::styled(
                    format!("👤 {people}"),
                    Style::default().fg(th.yellow),
                ));
            }
            let desc = Line::from(Span::styled(
                format!("   {}", truncate_to_width(&a.description, inner_w.saturating_sub(3))),
                Style::default().fg(th.overlay2),
            ));
            ListItem::new(vec![Line::from(segs), desc])
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// What: Render the featured strip as one row of name cards.
///
/// Details:
/// - Callers only draw this when [`AppState::featured_visible`] holds.
pub fn render_featured(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let mut segs: Vec<Span> = Vec::new();
    for (i, a) in app.featured_apps().enumerate() {
        if i > 0 {
            segs.push(Span::styled("  │  ", Style::default().fg(th.surface2)));
        }
        segs.push(Span::raw(format!("{} ", a.icon)));
        segs.push(Span::styled(
            a.name.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ));
        let badge = badge_color(th, app.catalog.platform_badge(&a.platform));
        segs.push(Span::styled(format!(" [{}]", a.platform), Style::default().fg(badge)));
    }
    let strip = Paragraph::new(Line::from(segs))
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    "⭐ Featured",
                    Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(strip, area);
}
