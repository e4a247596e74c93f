//! The home page: greeting, rotating tagline, bio, featured projects, and
//! the embedded terminal.

use super::render_terminal;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // Side-by-side on wide terminals, stacked on narrow ones.
    if area.width >= 100 {
        let [intro_area, terminal_area] =
            Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)])
                .areas(area);
        render_intro(frame, app, intro_area);
        render_terminal(frame, app, terminal_area);
    } else {
        let [intro_area, terminal_area] =
            Layout::vertical([Constraint::Length(14), Constraint::Min(8)]).areas(area);
        render_intro(frame, app, intro_area);
        render_terminal(frame, app, terminal_area);
    }
}

fn render_intro(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let site = &app.store.site;
    let splash = &site.splash;

    let tagline = splash
        .taglines
        .get(app.tagline_index)
        .map(String::as_str)
        .unwrap_or("");

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("$ ", Style::default().fg(theme.prompt)),
            Span::styled(splash.greeting.clone(), Style::default().fg(theme.accent)),
        ]),
        Line::from(vec![
            Span::styled(
                site.name.clone(),
                Style::default()
                    .fg(theme.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(theme.highlight)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            tagline.to_string(),
            Style::default()
                .fg(theme.accent_alt)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(
            splash.bio.clone(),
            Style::default().fg(theme.muted),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[Tab] ", Style::default().fg(theme.accent)),
            Span::styled(splash.cta_primary.clone(), Style::default().fg(theme.fg)),
            Span::styled("   [Tab Tab] ", Style::default().fg(theme.accent)),
            Span::styled(splash.cta_secondary.clone(), Style::default().fg(theme.fg)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "$ ls -la projects/ --featured",
            Style::default().fg(theme.muted),
        )),
    ];

    let featured: Vec<_> = app.store.featured_projects().collect();
    if featured.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No featured projects found.",
            Style::default().fg(theme.muted),
        )));
    }
    for project in featured {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", project.title),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("[featured] ", Style::default().fg(theme.highlight)),
            Span::styled(
                project.tags.join(", "),
                Style::default().fg(theme.muted),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
