//! The simulated terminal panel: transcript, input line, suggestions.

use super::line_style;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_terminal(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " ~/projects ",
            Style::default().fg(theme.muted),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let [transcript_area, suggestions_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

    render_transcript(frame, app, transcript_area);
    render_suggestions(frame, app, suggestions_area);
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let site = &app.store.site;
    let prompt = site.terminal.prompt_symbol.as_str();

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        site.terminal.initial_message.clone(),
        Style::default().fg(theme.muted),
    )));
    lines.push(Line::default());

    for entry in app.history.entries() {
        lines.push(Line::from(vec![
            Span::styled(format!("{prompt} "), Style::default().fg(theme.prompt)),
            Span::styled(entry.input.clone(), Style::default().fg(theme.fg)),
        ]));
        // Animated entries show only their revealed prefix.
        for response_line in entry.response.lines.iter().take(entry.revealed) {
            lines.push(Line::from(Span::styled(
                format!("  {}", response_line.text),
                line_style(response_line.kind, theme),
            )));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(format!("{prompt} "), Style::default().fg(theme.prompt)),
        Span::styled(app.input.clone(), Style::default().fg(theme.fg)),
        Span::styled("█", Style::default().fg(theme.muted)),
    ]));

    // Pin the input line to view: scroll past older transcript lines.
    let overflow = (lines.len() as u16).saturating_sub(area.height);
    frame.render_widget(Paragraph::new(lines).scroll((overflow, 0)), area);
}

fn render_suggestions(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut spans = vec![Span::styled(
        "try: ",
        Style::default().fg(theme.muted),
    )];
    let mut used = 5usize;
    for suggestion in app.store.suggested_commands() {
        let chip = format!(" {suggestion} ");
        // Drop suggestions that would overflow the row.
        if used + chip.width() + 1 > area.width as usize {
            break;
        }
        used += chip.width() + 1;
        spans.push(Span::styled(
            chip,
            Style::default()
                .fg(theme.tag_fg)
                .bg(theme.tag_bg)
                .add_modifier(Modifier::DIM),
        ));
        spans.push(Span::raw(" "));
    }

    let strip = Paragraph::new(vec![Line::default(), Line::from(spans)]);
    frame.render_widget(strip, area);
}
