//! The project detail overlay: a centered modal card over the current page.

use super::centered_rect;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App, bounds: Rect) {
    let theme = &app.theme;
    let Some(project) = app.overlay_project() else {
        return;
    };

    let area = centered_rect(bounds.width.min(64), 14, bounds);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg))
        .title(Span::styled(
            format!(" {} ", project.title),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ));

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(theme.fg),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Technologies",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(
            project
                .tags
                .iter()
                .flat_map(|tag| {
                    [
                        Span::styled(
                            format!(" {tag} "),
                            Style::default().fg(theme.tag_fg).bg(theme.tag_bg),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
        Line::default(),
    ];

    let link = project.demo_link.as_deref().unwrap_or(&project.link);
    if !link.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("View Project ", Style::default().fg(theme.accent)),
            Span::styled(link.to_string(), Style::default().fg(theme.muted)),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "[Esc] Close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
