use crate::app::{App, Mode, ViewMode};
use crate::search::Overlay;
use crate::theme::Theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// The document pane: either the editable buffer with line numbers and a
/// cursor, or the read-only highlighted overlay.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App, focused: bool, theme: &Theme) {
    let border_color = if focused {
        theme.ui.border_focused.to_color()
    } else {
        theme.ui.border.to_color()
    };
    let title_color = if focused {
        theme.ui.title_focused.to_color()
    } else {
        theme.ui.title.to_color()
    };
    let title = match app.view {
        ViewMode::Editable => " JSON ",
        ViewMode::Highlighted => " JSON (highlighted) ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(title_color)))
        .style(Style::default().bg(theme.ui.background.to_color()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.view {
        ViewMode::Editable => render_editable(frame, inner, app, focused, theme),
        ViewMode::Highlighted => render_overlay(frame, inner, app, theme),
    }
}

fn render_editable(frame: &mut Frame, area: Rect, app: &mut App, focused: bool, theme: &Theme) {
    let height = area.height as usize;
    app.buffer.ensure_cursor_visible(height);

    let show_numbers = app.config.editor.show_line_numbers;
    let number_width = if show_numbers {
        app.buffer.len_lines().to_string().len() + 1
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::new();
    let start = app.buffer.scroll_offset;
    for line_idx in start..(start + height).min(app.buffer.len_lines()) {
        let Some(text) = app.buffer.line(line_idx) else {
            break;
        };
        let mut spans = Vec::new();
        if show_numbers {
            spans.push(Span::styled(
                format!("{:>width$} ", line_idx + 1, width = number_width - 1),
                Style::default().fg(theme.ui.line_numbers.to_color()),
            ));
        }
        let style = if line_idx == app.buffer.cursor_y && focused {
            Style::default()
                .fg(theme.ui.foreground.to_color())
                .bg(theme.ui.cursor_line.to_color())
        } else {
            Style::default().fg(theme.ui.foreground.to_color())
        };
        spans.push(Span::styled(text, style));
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);

    if focused && app.mode == Mode::Insert && area.width > 0 {
        let cursor_x = cursor_screen_x(area, number_width, app.buffer.cursor_x);
        let cursor_y = area.y + (app.buffer.cursor_y - app.buffer.scroll_offset) as u16;
        if cursor_y < area.y + area.height {
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }
    }
}

/// Screen column for the buffer cursor. Lines wider than the pane have no
/// horizontal scroll, so the cursor pins to the last visible column
/// instead of being drawn outside the pane.
fn cursor_screen_x(area: Rect, gutter: usize, cursor_x: usize) -> u16 {
    let col = (gutter + cursor_x).min(area.width.saturating_sub(1) as usize);
    area.x + col as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_inside_the_pane() {
        let area = Rect::new(2, 0, 10, 5);
        // Within the pane: gutter plus column
        assert_eq!(cursor_screen_x(area, 3, 4), 9);
        // Past the pane edge: pinned to the last visible column
        assert_eq!(cursor_screen_x(area, 3, 100), 11);
        // Degenerate width never positions left of the pane
        let narrow = Rect::new(5, 0, 1, 5);
        assert_eq!(cursor_screen_x(narrow, 3, 0), 5);
    }
}

fn render_overlay(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let Some(overlay) = &app.overlay else {
        return;
    };
    let height = area.height as usize;
    let lines = overlay_lines(overlay, app.session.cursor.current(), theme);

    // Clamp so scrolling past the end leaves the last page visible.
    let max_scroll = lines.len().saturating_sub(height);
    if app.overlay_scroll > max_scroll {
        app.overlay_scroll = max_scroll;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.overlay_scroll)
        .take(height)
        .collect();
    frame.render_widget(Paragraph::new(visible), area);
}

/// Flatten overlay segments into styled lines. The focused marker gets the
/// emphasis treatment; every other marker gets the plain match style.
fn overlay_lines(overlay: &Overlay, current: Option<usize>, theme: &Theme) -> Vec<Line<'static>> {
    let plain = Style::default().fg(theme.ui.foreground.to_color());
    let matched = Style::default()
        .bg(theme.search.match_bg.to_color())
        .fg(theme.search.match_fg.to_color());
    let emphasized = Style::default()
        .bg(theme.search.current_bg.to_color())
        .fg(theme.search.current_fg.to_color())
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();

    for segment in overlay.segments() {
        let style = match segment.marker {
            Some(id) if Some(id) == current => emphasized,
            Some(_) => matched,
            None => plain,
        };
        let mut parts = segment.text.split('\n');
        if let Some(first) = parts.next() {
            if !first.is_empty() {
                spans.push(Span::styled(first.to_string(), style));
            }
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut spans)));
            if !part.is_empty() {
                spans.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(spans));
    lines
}
