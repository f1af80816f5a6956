use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use regex::Regex;
use std::sync::OnceLock;

// "In <place>" up to (not including) the next comma, e.g. the
// "In Bangalore" prefix of the agent's weather sentences.
fn emphasis_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"In [^,]+").expect("emphasis pattern is valid"))
}

/// Turn reply text into styled display text: newlines become separate
/// lines, and every `In <place>` run renders bold. The styling is applied
/// as spans, so reply content is never interpreted as markup.
pub fn format_response(text: &str) -> Text<'static> {
    let lines: Vec<Line<'static>> = text.split('\n').map(format_line).collect();
    Text::from(lines)
}

fn format_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut last = 0;
    for m in emphasis_pattern().find_iter(line) {
        if m.start() > last {
            spans.push(Span::raw(line[last..m.start()].to_string()));
        }
        spans.push(Span::styled(
            m.as_str().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        last = m.end();
    }
    if last < line.len() {
        spans.push(Span::raw(line[last..].to_string()));
    }
    Line::from(spans)
}
