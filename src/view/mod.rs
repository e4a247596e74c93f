//! Rendering. Every function here is a pure projection of `App` state onto
//! the frame; nothing in the view mutates state.

pub mod theme;

mod about;
mod overlay;
mod projects;
mod splash;
mod terminal;

use crate::app::{App, OverlayState, Page};
use crate::content::LineKind;
use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use theme::Theme;

pub use terminal::render_terminal;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    let [nav_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    render_nav(frame, app, nav_area);

    match app.page {
        Page::Home => splash::render(frame, app, body_area),
        Page::Projects => projects::render(frame, app, body_area),
        Page::About => about::render(frame, app, body_area),
    }

    render_footer(frame, app, footer_area);

    if app.overlay != OverlayState::Idle {
        overlay::render(frame, app, area);
    }
}

/// The fixed nav bar: logo, page tabs, theme indicator.
fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let site = &app.store.site;

    let mut spans = vec![
        Span::styled(
            site.name.clone(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled("@", Style::default().fg(theme.accent)),
        Span::styled("dev", Style::default().fg(theme.accent_alt)),
        Span::styled("_", Style::default().fg(theme.highlight)),
        Span::raw("    "),
    ];

    let tabs = [
        (Page::Home, site.nav.home.as_str()),
        (Page::Projects, site.nav.projects.as_str()),
        (Page::About, site.nav.about.as_str()),
    ];
    for (page, label) in tabs {
        let style = if app.page == page {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {label} "), style));
    }

    spans.push(Span::styled(
        format!("   [{}]", app.theme_choice.name()),
        Style::default().fg(theme.muted),
    ));

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(ratatui::widgets::Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(nav, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let site = &app.store.site;

    let hints = Line::from(vec![
        Span::styled("$ ", Style::default().fg(theme.prompt)),
        Span::styled(site.description.clone(), Style::default().fg(theme.muted)),
        Span::styled(
            "   Tab pages · Ctrl+T theme · Ctrl+Q quit",
            Style::default().fg(theme.muted),
        ),
    ]);

    let year = chrono::Local::now().year();
    let copyright = Line::from(vec![
        Span::styled(
            format!("© {} {}. All rights reserved.", year, site.about.name),
            Style::default().fg(theme.status_fg),
        ),
        Span::raw("  "),
        Span::styled(
            site.footer.tagline.clone(),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(vec![hints, copyright]).style(Style::default().bg(theme.status_bg)),
        area,
    );
}

/// Style for one response line class.
pub(crate) fn line_style(kind: LineKind, theme: &Theme) -> Style {
    match kind {
        LineKind::Text => Style::default().fg(theme.fg),
        LineKind::Heading => Style::default().fg(theme.accent_alt),
        LineKind::ProjectRef => Style::default().fg(theme.accent),
        LineKind::ProgramRef => Style::default().fg(theme.fg),
        LineKind::Source => Style::default().fg(theme.source),
        LineKind::Emphasis => Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD),
        LineKind::Muted => Style::default().fg(theme.muted),
    }
}

/// A centered rectangle no larger than the requested size.
pub(crate) fn centered_rect(width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    Rect {
        x: bounds.x + (bounds.width - width) / 2,
        y: bounds.y + (bounds.height - height) / 2,
        width,
        height,
    }
}
