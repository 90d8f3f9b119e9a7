use crate::app::{App, FocusedPanel, Mode, ViewMode};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
}

pub fn handle_event(app: &mut App) -> Result<Action> {
    if !event::poll(Duration::from_millis(100))? {
        return Ok(Action::None);
    }

    match event::read()? {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            if app.focus == FocusedPanel::Document && app.mode != Mode::Search {
                app.paste_text(&text);
            }
            Ok(Action::None)
        }
        _ => Ok(Action::None),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Result<Action> {
    // Help popup takes priority
    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => app.show_help = false,
            _ => {}
        }
        return Ok(Action::None);
    }

    // Global keybindings
    match key.code {
        KeyCode::F(1) => {
            app.show_help = true;
            return Ok(Action::None);
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(Action::Quit);
        }
        _ => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Result<Action> {
    // Resize the results panel with Ctrl+arrows
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Left => {
                app.increase_results_width();
                return Ok(Action::None);
            }
            KeyCode::Right => {
                app.decrease_results_width();
                return Ok(Action::None);
            }
            _ => {}
        }
    }

    if app.focus == FocusedPanel::Results {
        return handle_results_panel(app, key);
    }

    match key.code {
        KeyCode::Char('i') => app.begin_insert(),
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('n') => app.run_search(),
        KeyCode::Char('c') => app.clear_document(),
        KeyCode::Char('f') => app.format_document(),
        KeyCode::Char('p') => app.paste_from_clipboard(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Tab => app.focus = FocusedPanel::Results,
        KeyCode::Char('j') | KeyCode::Down => match app.view {
            ViewMode::Editable => app.buffer.move_down(),
            ViewMode::Highlighted => app.overlay_scroll = app.overlay_scroll.saturating_add(1),
        },
        KeyCode::Char('k') | KeyCode::Up => match app.view {
            ViewMode::Editable => app.buffer.move_up(),
            ViewMode::Highlighted => app.overlay_scroll = app.overlay_scroll.saturating_sub(1),
        },
        KeyCode::Char('h') | KeyCode::Left => app.buffer.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.buffer.move_right(),
        KeyCode::Char('g') | KeyCode::Home => match app.view {
            ViewMode::Editable => app.buffer.move_top(),
            ViewMode::Highlighted => app.overlay_scroll = 0,
        },
        KeyCode::Char('G') | KeyCode::End => match app.view {
            ViewMode::Editable => app.buffer.move_bottom(),
            ViewMode::Highlighted => {
                if let Some(overlay) = &app.overlay {
                    let lines = overlay.plain_text().lines().count();
                    app.overlay_scroll = lines.saturating_sub(app.visible_height);
                }
            }
        },
        KeyCode::PageDown => app.overlay_scroll = app.overlay_scroll.saturating_add(10),
        KeyCode::PageUp => app.overlay_scroll = app.overlay_scroll.saturating_sub(10),
        _ => {}
    }
    Ok(Action::None)
}

fn handle_results_panel(app: &mut App, key: KeyEvent) -> Result<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.focus = FocusedPanel::Document,
        KeyCode::Char('j') | KeyCode::Down => app.results.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.results.select_prev(),
        KeyCode::Enter | KeyCode::Char('y') => app.copy_selected_result(),
        _ => {}
    }
    Ok(Action::None)
}

fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Result<Action> {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Normal,
        KeyCode::Enter => app.buffer.insert_newline(),
        KeyCode::Backspace => app.buffer.backspace(),
        KeyCode::Tab => {
            for _ in 0..app.config.editor.tab_size {
                app.buffer.insert_char(' ');
            }
        }
        KeyCode::Left => app.buffer.move_left(),
        KeyCode::Right => app.buffer.move_right(),
        KeyCode::Up => app.buffer.move_up(),
        KeyCode::Down => app.buffer.move_down(),
        KeyCode::Home => app.buffer.move_line_start(),
        KeyCode::End => app.buffer.move_line_end(),
        KeyCode::Char(c) => app.buffer.insert_char(c),
        _ => {}
    }
    Ok(Action::None)
}

fn handle_search_mode(app: &mut App, key: KeyEvent) -> Result<Action> {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Normal,
        // Enter with an unchanged term advances to the next match, so
        // pressing it repeatedly cycles through the document.
        KeyCode::Enter => app.run_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
    Ok(Action::None)
}
