pub mod document;
pub mod help;
pub mod results;
pub mod search_bar;
pub mod status_bar;

use crate::app::{App, FocusedPanel, Mode};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    let theme = app.config.theme.clone();

    // Main vertical layout: content area + status bar + (optional) search bar
    let bottom_bar_height = if app.mode == Mode::Search { 1 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(bottom_bar_height),
        ])
        .split(size);

    let content_area = main_chunks[0];
    let status_area = main_chunks[1];

    // Content area: document pane | results panel
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(app.results_width)])
        .split(content_area);

    document::render(
        frame,
        h_chunks[0],
        app,
        app.focus == FocusedPanel::Document && app.mode != Mode::Search,
        &theme,
    );

    let results_focused = app.focus == FocusedPanel::Results;
    results::render(frame, h_chunks[1], &mut app.results, results_focused, &theme);

    status_bar::render(frame, status_area, app);

    if app.mode == Mode::Search {
        search_bar::render(
            frame,
            main_chunks[2],
            &app.search_input,
            &app.session,
            &theme,
        );
    }

    if app.show_help {
        help::render(frame, size, &theme);
    }
}
