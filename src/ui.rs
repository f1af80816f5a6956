use crate::format;
use crate::panel::{Outcome, QueryPanel, UiState, EXAMPLES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, panel: &QueryPanel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // input box
            Constraint::Length(1),  // status line
            Constraint::Min(0),     // outcome area
        ])
        .split(f.area());

    render_input(f, panel, chunks[0]);
    render_status(f, panel, chunks[1]);
    render_outcome(f, panel, chunks[2]);
}

fn render_input(f: &mut Frame, panel: &QueryPanel, area: Rect) {
    let input_text = match panel.state {
        UiState::Idle => format!("{}_", panel.input),
        UiState::Loading => "Loading...".to_string(),
    };

    let style = match panel.state {
        UiState::Idle => Style::default().fg(Color::Green),
        UiState::Loading => Style::default().fg(Color::Yellow),
    };

    let input = Paragraph::new(input_text).style(style).block(
        Block::default()
            .title("🌍 Where are you going?")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, panel: &QueryPanel, area: Rect) {
    let status_text = if let Some(status) = &panel.status {
        status.clone()
    } else {
        "Ready".to_string()
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(status, area);
}

// The outcome area shows exactly one of: the hint screen, the formatted
// reply, or the error message.
fn render_outcome(f: &mut Frame, panel: &QueryPanel, area: Rect) {
    let (text, title, border) = match &panel.outcome {
        None => (hint_text(), "💡 Trip plan", Color::Cyan),
        Some(Outcome::Response(response)) => (
            format::format_response(response),
            "💡 Trip plan",
            Color::Cyan,
        ),
        Some(Outcome::Error(message)) => (
            Text::from(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))),
            "⚠ Error",
            Color::Red,
        ),
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: true })
        .scroll((panel.scroll_offset, 0));

    f.render_widget(paragraph, area);
}

fn hint_text() -> Text<'static> {
    let dim = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("✈️  Ask about a trip and press Enter", dim)),
        Line::from(""),
        Line::from(Span::styled("Examples (F1-F3 to fill):", dim)),
    ];
    for example in EXAMPLES {
        lines.push(Line::from(Span::styled(
            format!("  \"{}\"", example),
            dim.add_modifier(Modifier::ITALIC),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Ctrl-L clears the plan, Esc clears input or quits, ↑↓ scroll",
        dim,
    )));
    Text::from(lines)
}
