use crate::services::SearchHit;
use crate::theme::Theme;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// The results panel: one line per hit (value plus its structural path),
/// or a single message ("No matches found", a service error).
pub struct ResultsState {
    pub hits: Vec<SearchHit>,
    pub selected: usize,
    pub scroll_offset: usize,
    pub message: Option<String>,
}

impl ResultsState {
    pub fn new() -> Self {
        Self {
            hits: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            message: None,
        }
    }

    pub fn clear(&mut self) {
        self.hits.clear();
        self.selected = 0;
        self.scroll_offset = 0;
        self.message = None;
    }

    pub fn set_hits(&mut self, hits: Vec<SearchHit>) {
        self.hits = hits;
        self.selected = 0;
        self.scroll_offset = 0;
        self.message = None;
    }

    pub fn show_message(&mut self, message: &str) {
        self.hits.clear();
        self.selected = 0;
        self.scroll_offset = 0;
        self.message = Some(message.to_string());
    }

    pub fn select_next(&mut self) {
        if !self.hits.is_empty() && self.selected + 1 < self.hits.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.hits.get(self.selected)
    }

    fn ensure_selected_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected + 1 - visible_height;
        }
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    results: &mut ResultsState,
    focused: bool,
    theme: &Theme,
) {
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

    let title = if results.hits.is_empty() {
        String::from(" Results ")
    } else {
        format!(" Results ({}) ", results.hits.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(title_color)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if let Some(message) = &results.message {
        let color = if message.starts_with("Error") {
            theme.ui.message_error.to_color()
        } else {
            theme.ui.message_info.to_color()
        };
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(color),
        )));
    } else if results.hits.is_empty() {
        lines.push(Line::from(Span::styled(
            "Paste JSON and press / to search",
            Style::default().fg(theme.ui.message_info.to_color()),
        )));
    } else {
        results.ensure_selected_visible(inner.height as usize);
        let visible = results
            .hits
            .iter()
            .enumerate()
            .skip(results.scroll_offset)
            .take(inner.height as usize);
        for (i, hit) in visible {
            let base = if i == results.selected && focused {
                Style::default().bg(theme.ui.result_selected.to_color())
            } else {
                Style::default()
            };
            let mut spans = vec![Span::styled(
                hit.value.clone(),
                base.fg(theme.ui.result_value.to_color()),
            )];
            if let Some(path) = &hit.path {
                spans.push(Span::styled(
                    format!("  {}", path),
                    base.fg(theme.ui.result_path.to_color()),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
