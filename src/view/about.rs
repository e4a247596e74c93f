//! The about page: bio header and the Skills / Experience / Education tabs.

use crate::app::{AboutTab, App};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const TABS: [AboutTab; 3] = [AboutTab::Skills, AboutTab::Experience, AboutTab::Education];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [header_area, bio_area, tab_bar_area, content_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    render_header(frame, app, header_area);
    render_long_bio(frame, app, bio_area);
    render_tab_bar(frame, app, tab_bar_area);
    render_tab_content(frame, app, content_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let site = &app.store.site;
    let about = &site.about;

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            about.name.clone(),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("$ ", Style::default().fg(theme.highlight)),
            Span::styled(about.title.clone(), Style::default().fg(theme.accent)),
        ]),
        Line::from(Span::styled(
            about.bio.clone(),
            Style::default().fg(theme.muted),
        )),
    ];

    if !site.social.is_empty() {
        let mut spans = Vec::new();
        for link in &site.social {
            spans.push(Span::styled(
                format!("{} ", link.platform),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::styled(
                format!("{}   ", link.url),
                Style::default().fg(theme.muted),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_long_bio(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            app.store.site.about.long_bio.clone(),
            Style::default().fg(theme.fg),
        )))
        .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut spans = Vec::new();
    for tab in TABS {
        let style = if tab == app.about_tab {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("  ←/→", Style::default().fg(theme.muted)));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(bar, area);
}

fn render_tab_content(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let about = &app.store.site.about;

    let mut lines: Vec<Line> = vec![Line::default()];
    match app.about_tab {
        AboutTab::Skills => {
            for group in &about.skills {
                lines.push(Line::from(Span::styled(
                    group.category.clone(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(
                    group
                        .technologies
                        .iter()
                        .flat_map(|tech| {
                            [
                                Span::styled(
                                    format!(" {tech} "),
                                    Style::default().fg(theme.tag_fg).bg(theme.tag_bg),
                                ),
                                Span::raw(" "),
                            ]
                        })
                        .collect::<Vec<_>>(),
                ));
                lines.push(Line::default());
            }
        }
        AboutTab::Experience => {
            for job in &about.experience {
                lines.push(Line::from(vec![
                    Span::styled(
                        job.position.clone(),
                        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  @ {}", job.company),
                        Style::default().fg(theme.accent),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    job.period.clone(),
                    Style::default().fg(theme.muted),
                )));
                lines.push(Line::from(Span::styled(
                    job.description.clone(),
                    Style::default().fg(theme.fg),
                )));
                lines.push(Line::default());
            }
        }
        AboutTab::Education => {
            for entry in &about.education {
                lines.push(Line::from(Span::styled(
                    entry.institution.clone(),
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(vec![
                    Span::styled(entry.degree.clone(), Style::default().fg(theme.accent)),
                    Span::styled(
                        format!("  {}", entry.period),
                        Style::default().fg(theme.muted),
                    ),
                ]));
                lines.push(Line::default());
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
