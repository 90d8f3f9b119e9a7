use crate::app::{App, Mode, ViewMode};
use ratatui::{prelude::*, text::Span, widgets::Paragraph};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();

    let mode_str = match app.mode {
        Mode::Normal => " NORMAL ",
        Mode::Insert => " INSERT ",
        Mode::Search => " SEARCH ",
    };

    let mode_style = match app.mode {
        Mode::Normal => Style::default()
            .bg(theme.ui.mode_normal_bg.to_color())
            .fg(theme.ui.mode_normal_fg.to_color())
            .add_modifier(Modifier::BOLD),
        Mode::Insert => Style::default()
            .bg(theme.ui.mode_insert_bg.to_color())
            .fg(theme.ui.mode_insert_fg.to_color())
            .add_modifier(Modifier::BOLD),
        Mode::Search => Style::default()
            .bg(theme.ui.mode_search_bg.to_color())
            .fg(theme.ui.mode_search_fg.to_color())
            .add_modifier(Modifier::BOLD),
    };

    let status_msg = format!(" {} ", app.status_message);

    // Right side: match position while highlighted, cursor position while editing
    let right_info = match app.view {
        ViewMode::Highlighted => match app.session.cursor.position() {
            Some((current, total)) => format!(" Match {}/{} ", current, total),
            None => format!(" {} matches ", app.session.cursor.total()),
        },
        ViewMode::Editable => format!(
            " Ln {}, Col {} ",
            app.buffer.cursor_y + 1,
            app.buffer.cursor_x + 1
        ),
    };

    let mode_span = Span::styled(mode_str, mode_style);
    let msg_span = Span::styled(
        status_msg.clone(),
        Style::default().fg(theme.ui.status_bar_fg.to_color()),
    );

    // Char counts, not byte lengths: status messages can carry multibyte
    // paths or error text.
    let left_len = mode_str.len() + status_msg.chars().count();
    let right_len = right_info.chars().count();
    let padding = if area.width as usize > left_len + right_len {
        area.width as usize - left_len - right_len
    } else {
        1
    };

    let padding_span = Span::raw(" ".repeat(padding));
    let right_span = Span::styled(
        right_info,
        Style::default()
            .bg(theme.ui.mode_normal_bg.to_color())
            .fg(theme.ui.mode_normal_fg.to_color()),
    );

    let line = Line::from(vec![mode_span, msg_span, padding_span, right_span]);
    let paragraph =
        Paragraph::new(line).style(Style::default().bg(theme.ui.status_bar_bg.to_color()));

    frame.render_widget(paragraph, area);
}
