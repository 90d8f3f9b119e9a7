use crate::search::SearchSession;
use crate::theme::Theme;
use ratatui::{prelude::*, widgets::Paragraph};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    session: &SearchSession,
    theme: &Theme,
) {
    let text = match session.cursor.position() {
        Some((current, total)) => format!("/{}  [{}/{}]", input, current, total),
        None => format!("/{}", input),
    };

    let paragraph = Paragraph::new(text).style(
        Style::default()
            .fg(theme.ui.foreground.to_color())
            .bg(theme.ui.status_bar_bg.to_color()),
    );
    frame.render_widget(paragraph, area);

    // Position cursor after the slash and input
    frame.set_cursor_position(Position::new(area.x + cursor_column(input), area.y));
}

/// Column just past the slash and input, counting chars so multibyte
/// terms do not push the cursor too far right.
fn cursor_column(input: &str) -> u16 {
    1 + input.chars().count() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_counts_chars_not_bytes() {
        assert_eq!(cursor_column(""), 1);
        assert_eq!(cursor_column("city"), 5);
        // "héllo" is 6 bytes but 5 chars
        assert_eq!(cursor_column("héllo"), 6);
    }
}
