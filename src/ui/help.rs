use crate::theme::Theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

const KEYS: &[(&str, &str)] = &[
    ("i", "edit the JSON buffer"),
    ("Esc", "back to normal mode"),
    ("p", "paste from clipboard (auto-formats)"),
    ("f", "format the buffer"),
    ("c", "clear buffer, highlights and results"),
    ("/", "open search, Enter to search"),
    ("Enter / n", "next match (same term cycles)"),
    ("Tab", "switch to the results panel"),
    ("j/k", "move / scroll"),
    ("y / Enter", "copy selected result path"),
    ("t", "toggle light/dark theme"),
    ("Ctrl+←/→", "resize results panel"),
    ("Ctrl+Q", "quit"),
];

pub fn render(frame: &mut Frame, size: Rect, theme: &Theme) {
    let width = 52.min(size.width.saturating_sub(4));
    let height = (KEYS.len() as u16 + 2).min(size.height.saturating_sub(2));
    let area = Rect::new(
        (size.width.saturating_sub(width)) / 2,
        (size.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.ui.border_focused.to_color()))
        .title(Span::styled(
            " Help ",
            Style::default().fg(theme.ui.title_focused.to_color()),
        ))
        .style(Style::default().bg(theme.ui.background.to_color()));

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>10}  ", key),
                    Style::default()
                        .fg(theme.ui.title_focused.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(theme.ui.foreground.to_color())),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
