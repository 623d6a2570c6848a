use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::catalog::AppRecord;
use crate::logic::has_update_within;
use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::helpers::{badge_color, designed_for_label, kv};
use crate::util::display_date;

/// What: Build the details lines for one record.
///
/// Inputs:
/// - `app`: Session state (catalog tables, reference date, recent window)
/// - `rec`: Record to describe
/// - `th`: Active theme
///
/// Output:
/// - Header line with badges, the description, key/value fields, and the
///   update log newest first with links to earlier builds.
#[must_use]
pub fn format_details_lines(app: &AppState, rec: &AppRecord, th: &Theme) -> Vec<Line<'static>> {
    let badge = badge_color(th, app.catalog.platform_badge(&rec.platform));
    let mut header = vec![
        Span::raw(format!("{} ", rec.icon)),
        Span::styled(
            rec.name.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", rec.platform), Style::default().fg(badge)),
    ];
    if rec.featured {
        header.push(Span::styled(" ⭐", Style::default().fg(th.yellow)));
    }
    if has_update_within(rec, app.today, app.recent_update_days) {
        header.push(Span::styled(
            "  Recently updated",
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        ));
    }

    let category = {
        let icon = app.catalog.category_icon(&rec.category);
        if icon.is_empty() {
            rec.category.clone()
        } else {
            format!("{icon} {}", rec.category)
        }
    };
    let mut lines = vec![
        Line::from(header),
        Line::from(""),
        Line::from(Span::styled(
            rec.description.clone(),
            Style::default().fg(th.subtext1),
        )),
        Line::from(""),
        kv("Category", category, th),
    ];
    if !rec.team.is_empty() {
        lines.push(kv("Team", rec.team.clone(), th));
    }
    lines.push(kv(
        "Designed for",
        designed_for_label(rec, false).unwrap_or_else(|| "Everyone".to_string()),
        th,
    ));
    lines.push(kv("Added", display_date(rec.date_added), th));
    lines.push(kv(
        "Link",
        if rec.has_launch_url() {
            rec.url.clone()
        } else {
            "not available".to_string()
        },
        th,
    ));

    if !rec.updates.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Updates",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
        for u in &rec.updates {
            lines.push(Line::from(vec![
                Span::styled(format!("v{} ", u.version), Style::default().fg(th.peach)),
                Span::styled(display_date(u.date), Style::default().fg(th.overlay1)),
            ]));
            if !u.notes.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", u.notes),
                    Style::default().fg(th.subtext0),
                )));
            }
            if let Some(prev) = u.previous_url.as_deref()
                && !prev.is_empty()
            {
                lines.push(Line::from(vec![
                    Span::styled("  previous: ", Style::default().fg(th.overlay1)),
                    Span::styled(prev.to_string(), Style::default().fg(th.sapphire)),
                ]));
            }
        }
    }
    if !rec.version_history.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Version history",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )));
        for v in &rec.version_history {
            let mut segs = vec![
                Span::styled(format!("v{} ", v.version), Style::default().fg(th.peach)),
                Span::styled(display_date(v.date), Style::default().fg(th.overlay1)),
            ];
            if let Some(notes) = v.notes.as_deref()
                && !notes.is_empty()
            {
                segs.push(Span::styled(format!("  {notes}"), Style::default().fg(th.subtext0)));
            }
            if let Some(url) = v.url.as_deref()
                && !url.is_empty()
            {
                segs.push(Span::styled(format!("  {url}"), Style::default().fg(th.sapphire)));
            }
            lines.push(Line::from(segs));
        }
    }
    lines
}

/// Render the details pane for the selected record.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let lines = app.selected_app().map_or_else(
        || {
            vec![Line::from(Span::styled(
                "Nothing selected",
                Style::default().fg(th.overlay1),
            ))]
        },
        |rec| format_details_lines(app, rec, th),
    );
    let p = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled("Details", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AppUpdate, Catalog, VersionEntry};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    /// What: Update and version entries show the links to earlier builds
    fn details_lines_show_previous_links() {
        let app = AppState::new(Catalog::builtin().expect("builtin"));
        let mut rec = app.catalog.apps()[0].clone();
        rec.updates = vec![AppUpdate {
            version: "2.0".into(),
            date: day(2025, 11, 1),
            notes: "Rewrite".into(),
            previous_url: Some("https://example.invalid/v1".into()),
        }];
        rec.version_history = vec![
            VersionEntry {
                version: "1.0".into(),
                date: day(2025, 9, 1),
                url: Some("https://example.invalid/v1".into()),
                notes: None,
            },
            VersionEntry {
                version: "0.9".into(),
                date: day(2025, 8, 1),
                url: None,
                notes: None,
            },
        ];
        let lines = text(&format_details_lines(&app, &rec, &Theme::default()));
        assert!(lines.contains(&"  previous: https://example.invalid/v1".to_string()));
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("v1.0 ") && l.ends_with("  https://example.invalid/v1"))
        );
        assert!(
            lines
                .iter()
                .any(|l| l.starts_with("v0.9 ") && !l.contains("https://"))
        );
    }
}
