//! The projects page: tag filter bar, filtered grid, selection.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [header_area, filter_area, status_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    render_header(frame, app, header_area);
    render_filter_bar(frame, app, filter_area);
    render_status(frame, app, status_area);
    render_list(frame, app, list_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "My Projects",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A collection of my work, side projects, and experiments",
            Style::default().fg(theme.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut spans = vec![Span::styled(
        "Filter by: ",
        Style::default().fg(theme.muted),
    )];

    for (i, tag) in app.store.all_tags().iter().enumerate() {
        let selected = app.selected_tags.iter().any(|t| t == tag);
        let under_cursor = i == app.tag_cursor;

        let mut style = if selected {
            Style::default().fg(theme.tag_fg).bg(theme.tag_bg)
        } else {
            Style::default().fg(theme.muted)
        };
        if under_cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {tag} "), style));
        spans.push(Span::raw(" "));
    }

    if !app.selected_tags.is_empty() {
        spans.push(Span::styled(
            " [Backspace] clear filters",
            Style::default().fg(theme.highlight),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    if app.selected_tags.is_empty() {
        return;
    }
    let shown = app.visible_projects().len();
    let total = app.store.projects().len();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Showing {shown} of {total} projects"),
            Style::default().fg(theme.muted),
        ))),
        area,
    );
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let visible = app.visible_projects();

    if visible.is_empty() {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "No projects found",
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "No projects match your selected filters. Try clearing some filters.",
                Style::default().fg(theme.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let max_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .map(|project| {
            let mut title_spans = vec![Span::styled(
                project.title.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )];
            if project.featured {
                title_spans.push(Span::styled(
                    "  Featured",
                    Style::default().fg(theme.highlight),
                ));
            }

            let mut link_spans = Vec::new();
            if !project.link.is_empty() {
                link_spans.push(Span::styled("Code ", Style::default().fg(theme.accent)));
                link_spans.push(Span::styled(
                    project.link.clone(),
                    Style::default().fg(theme.muted),
                ));
            }
            if let Some(demo) = &project.demo_link {
                link_spans.push(Span::styled(
                    "   Live Demo ",
                    Style::default().fg(theme.accent),
                ));
                link_spans.push(Span::styled(demo.clone(), Style::default().fg(theme.muted)));
            }

            let lines = vec![
                Line::from(title_spans),
                Line::from(Span::styled(
                    truncate(&project.description, max_width),
                    Style::default().fg(theme.muted),
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
                Line::from(link_spans),
                Line::default(),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(theme.selection_bg))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.project_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Cut a string to a display width, appending an ellipsis when cut.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_cuts_to_width_with_ellipsis() {
        let cut = truncate("a rather long description line", 12);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 12);
    }
}
