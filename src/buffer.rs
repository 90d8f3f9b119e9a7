use ropey::Rope;

/// The document buffer: the user's raw JSON text.
///
/// Mutated only by direct edits, paste, an explicit clear, or a successful
/// format round trip. The highlight overlay is always derived from this text
/// and never writes back into it.
#[derive(Debug, Clone)]
pub struct Buffer {
    text: Rope,
    pub cursor_x: usize, // Char column within the current line
    pub cursor_y: usize, // Line number
    pub scroll_offset: usize,
    pub modified: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            text: Rope::new(),
            cursor_x: 0,
            cursor_y: 0,
            scroll_offset: 0,
            modified: false,
        }
    }

    pub fn content(&self) -> String {
        self.text.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.text.len_chars() == 0
    }

    /// Replace the whole document, e.g. with formatted text from the
    /// format service. Cursor and scroll return to the top.
    pub fn set_content(&mut self, content: &str) {
        self.text = Rope::from_str(content);
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.scroll_offset = 0;
        self.modified = false;
    }

    pub fn clear(&mut self) {
        self.set_content("");
    }

    pub fn len_lines(&self) -> usize {
        self.text.len_lines()
    }

    /// A single line without its trailing newline.
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.text.len_lines() {
            let s = self.text.line(line_idx).to_string();
            Some(s.trim_end_matches(['\n', '\r']).to_string())
        } else {
            None
        }
    }

    /// Char length of a line, excluding the trailing newline.
    fn line_len(&self, line_idx: usize) -> usize {
        let line = self.text.line(line_idx);
        let mut len = line.len_chars();
        for ch in line.chars_at(len).reversed() {
            if ch == '\n' || ch == '\r' {
                len -= 1;
            } else {
                break;
            }
        }
        len
    }

    fn cursor_char_idx(&self) -> usize {
        self.text.line_to_char(self.cursor_y) + self.cursor_x
    }

    fn set_cursor_from_char_idx(&mut self, idx: usize) {
        self.cursor_y = self.text.char_to_line(idx);
        self.cursor_x = idx - self.text.line_to_char(self.cursor_y);
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.cursor_char_idx();
        self.text.insert_char(idx, c);
        self.cursor_x += 1;
        self.modified = true;
    }

    pub fn insert_newline(&mut self) {
        let idx = self.cursor_char_idx();
        self.text.insert_char(idx, '\n');
        self.cursor_y += 1;
        self.cursor_x = 0;
        self.modified = true;
    }

    /// Insert arbitrary (possibly multi-line) text at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let idx = self.cursor_char_idx();
        self.text.insert(idx, s);
        self.set_cursor_from_char_idx(idx + s.chars().count());
        self.modified = true;
    }

    pub fn backspace(&mut self) {
        if self.cursor_x > 0 {
            let idx = self.cursor_char_idx();
            self.text.remove(idx - 1..idx);
            self.cursor_x -= 1;
            self.modified = true;
        } else if self.cursor_y > 0 {
            let prev_len = self.line_len(self.cursor_y - 1);
            let idx = self.cursor_char_idx();
            self.text.remove(idx - 1..idx);
            self.cursor_y -= 1;
            self.cursor_x = prev_len;
            self.modified = true;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_x > 0 {
            self.cursor_x -= 1;
        } else if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.cursor_x = self.line_len(self.cursor_y);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_x < self.line_len(self.cursor_y) {
            self.cursor_x += 1;
        } else if self.cursor_y + 1 < self.text.len_lines() {
            self.cursor_y += 1;
            self.cursor_x = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.cursor_x = self.cursor_x.min(self.line_len(self.cursor_y));
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_y + 1 < self.text.len_lines() {
            self.cursor_y += 1;
            self.cursor_x = self.cursor_x.min(self.line_len(self.cursor_y));
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor_x = 0;
    }

    pub fn move_line_end(&mut self) {
        self.cursor_x = self.line_len(self.cursor_y);
    }

    pub fn move_top(&mut self) {
        self.cursor_y = 0;
        self.cursor_x = 0;
    }

    pub fn move_bottom(&mut self) {
        self.cursor_y = self.text.len_lines().saturating_sub(1);
        self.cursor_x = 0;
    }

    /// Keep the cursor line inside the visible window.
    pub fn ensure_cursor_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor_y < self.scroll_offset {
            self.scroll_offset = self.cursor_y;
        } else if self.cursor_y >= self.scroll_offset + visible_height {
            self.scroll_offset = self.cursor_y + 1 - visible_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_content() {
        let mut buf = Buffer::new();
        buf.insert_char('{');
        buf.insert_newline();
        buf.insert_char('}');
        assert_eq!(buf.content(), "{\n}");
        assert_eq!(buf.cursor_y, 1);
        assert_eq!(buf.cursor_x, 1);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buf = Buffer::new();
        buf.set_content("ab\ncd");
        buf.cursor_y = 1;
        buf.cursor_x = 0;
        buf.backspace();
        assert_eq!(buf.content(), "abcd");
        assert_eq!(buf.cursor_y, 0);
        assert_eq!(buf.cursor_x, 2);
    }

    #[test]
    fn test_insert_str_multiline() {
        let mut buf = Buffer::new();
        buf.insert_str("{\n  \"a\": 1\n}");
        assert_eq!(buf.len_lines(), 3);
        assert_eq!(buf.cursor_y, 2);
        assert_eq!(buf.cursor_x, 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut buf = Buffer::new();
        buf.insert_str("hello");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor_x, 0);
        assert_eq!(buf.cursor_y, 0);
        assert_eq!(buf.scroll_offset, 0);
    }
}
