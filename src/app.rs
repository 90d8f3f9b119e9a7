use crate::buffer::Buffer;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::search::{Overlay, SearchOutcome, SearchSession};
use crate::services::{FormatRequest, FormatService, JsonBackend};
use crate::theme::Theme;
use crate::ui::results::ResultsState;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Document,
    Results,
}

/// Which surface the document pane shows: the editable buffer or the
/// read-only highlighted overlay. Switching never mutates the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Editable,
    Highlighted,
}

pub struct App {
    pub mode: Mode,
    pub focus: FocusedPanel,
    pub view: ViewMode,
    pub buffer: Buffer,
    pub overlay: Option<Overlay>,
    pub overlay_scroll: usize,
    pub session: SearchSession,
    pub results: ResultsState,
    pub search_input: String,
    pub status_message: String,
    pub show_help: bool,
    pub config: Config,
    pub clipboard: Clipboard,
    pub results_width: u16,
    pub visible_height: usize,
    backend: JsonBackend,
}

impl App {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let config = Config::load()?;
        let results_width = config.layout.results_width;

        let mut app = Self {
            mode: Mode::Normal,
            focus: FocusedPanel::Document,
            view: ViewMode::Editable,
            buffer: Buffer::new(),
            overlay: None,
            overlay_scroll: 0,
            session: SearchSession::new(),
            results: ResultsState::new(),
            search_input: String::new(),
            status_message: String::from("Press F1 for help | / search | p paste | c clear"),
            show_help: false,
            config,
            clipboard: Clipboard::new(),
            results_width,
            visible_height: 24,
            backend: JsonBackend,
        };

        if let Some(path) = path {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            app.buffer.set_content(&content);
            app.format_document();
            app.status_message = format!("Opened: {}", path.display());
        }

        Ok(app)
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub fn toggle_theme(&mut self) {
        let next = if self.config.theme_name == "dark" {
            "light"
        } else {
            "dark"
        };
        self.config.set_theme(next);
        match self.config.save() {
            Ok(()) => self.status_message = format!("Theme changed to: {}", next),
            Err(e) => self.status_message = format!("Theme changed, but not saved: {}", e),
        }
    }

    /// One user-initiated search action: delegate the policy to the session
    /// and apply the outcome to the visible surfaces.
    pub fn run_search(&mut self) {
        let term = self.search_input.clone();
        let document = self.buffer.content();
        let outcome = self.session.submit(&term, &document, &self.backend);

        match outcome {
            SearchOutcome::Cleared => {
                self.clear_highlights();
                self.results.clear();
                self.status_message = String::from("Search cleared");
            }
            SearchOutcome::Advanced { marker } => {
                self.focus_marker(marker);
            }
            SearchOutcome::NothingToNavigate => {
                self.status_message = String::from("Nothing to navigate");
            }
            SearchOutcome::Updated {
                overlay,
                results,
                marker,
            } => {
                // Overlay first, then scroll/emphasis: focus_marker reads
                // the freshly stored overlay.
                self.results.set_hits(results);
                self.overlay = Some(overlay);
                self.view = ViewMode::Highlighted;
                self.focus_marker(marker);
            }
            SearchOutcome::NoMatches => {
                self.clear_highlights();
                self.results.show_message("No matches found");
                self.status_message = String::from("No matches found");
            }
            SearchOutcome::Failed(error) => {
                self.clear_highlights();
                self.results.show_message(&format!("Error: {}", error));
                self.status_message = format!("Search failed: {}", error);
            }
        }
    }

    /// Center the focused marker in the viewport and report the position.
    fn focus_marker(&mut self, marker: usize) {
        if let Some(overlay) = &self.overlay {
            if let Some(line) = overlay.marker_line(marker) {
                self.overlay_scroll = line.saturating_sub(self.visible_height / 2);
            }
        }
        if let Some((current, total)) = self.session.cursor.position() {
            self.status_message = format!("Match {} of {}", current, total);
        }
    }

    /// Drop the overlay and show the editable buffer again. The buffer
    /// itself is untouched.
    pub fn clear_highlights(&mut self) {
        self.overlay = None;
        self.overlay_scroll = 0;
        self.view = ViewMode::Editable;
    }

    /// The buffer is about to change under an active overlay: drop the
    /// overlay and forget the session, so the next search (same term or
    /// not) runs against the edited buffer instead of navigating markers
    /// that no longer exist.
    fn invalidate_search(&mut self) {
        self.clear_highlights();
        self.session.reset();
    }

    /// The clear action: wipe buffer, overlay, results, and session.
    pub fn clear_document(&mut self) {
        self.buffer.clear();
        self.clear_highlights();
        self.results.clear();
        self.session.reset();
        self.status_message = String::from("Cleared");
    }

    /// Round-trip the buffer through the format service. On failure the
    /// buffer is left exactly as it was.
    pub fn format_document(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let request = FormatRequest {
            data: self.buffer.content(),
        };
        match self.backend.format(&request) {
            Ok(response) => {
                if self.view == ViewMode::Highlighted {
                    self.invalidate_search();
                }
                self.buffer.set_content(&response.formatted);
                self.status_message = String::from("Formatted");
            }
            Err(e) => {
                self.status_message = format!("Format failed: {}", e);
            }
        }
    }

    /// Insert pasted text at the cursor and, when configured, run it
    /// through the format service.
    pub fn paste_text(&mut self, text: &str) {
        if self.view == ViewMode::Highlighted {
            self.invalidate_search();
        }
        self.buffer.insert_str(text);
        if self.config.editor.format_on_paste {
            self.format_document();
        }
    }

    pub fn paste_from_clipboard(&mut self) {
        match self.clipboard.paste() {
            Some(text) if !text.is_empty() => self.paste_text(&text),
            _ => self.status_message = String::from("Clipboard is empty"),
        }
    }

    /// Editing happens on the raw buffer, so entering Insert mode while the
    /// overlay is up first falls back to the editable view.
    pub fn begin_insert(&mut self) {
        if self.view == ViewMode::Highlighted {
            self.invalidate_search();
        }
        self.mode = Mode::Insert;
    }

    pub fn copy_selected_result(&mut self) {
        let Some(hit) = self.results.selected_hit() else {
            self.status_message = String::from("No result selected");
            return;
        };
        let text = hit.path.clone().unwrap_or_else(|| hit.value.clone());
        if self.clipboard.copy(&text) {
            self.status_message = format!("Copied: {}", text);
        } else {
            self.status_message = String::from("Clipboard unavailable");
        }
    }

    pub fn update_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    pub fn increase_results_width(&mut self) {
        let max = self.config.layout.results_max_width;
        if self.results_width < max {
            self.results_width += 2;
        }
    }

    pub fn decrease_results_width(&mut self) {
        let min = self.config.layout.results_min_width;
        if self.results_width > min {
            self.results_width -= 2;
        }
    }
}
