//! Editor service trait and the lyric text buffer behind the compose screen.
//!
//! This module provides abstractions for text editing operations, allowing
//! the editor logic to be tested independently of the UI.

use crate::constants::ui::DEFAULT_VIEWPORT_HEIGHT;

/// Trait for text editing operations.
///
/// This trait abstracts the core editing functionality, allowing for
/// different implementations (e.g., single-line, multi-line, with undo).
pub trait Editor {
    /// Get the current content as lines.
    fn content(&self) -> &[String];

    /// Get the current cursor position (line, column).
    fn cursor_position(&self) -> (usize, usize);

    /// Set the cursor position.
    fn set_cursor(&mut self, line: usize, column: usize);

    /// Insert a character at the current cursor position.
    fn insert_char(&mut self, c: char);

    /// Insert a string at the current cursor position.
    fn insert_str(&mut self, s: &str);

    /// Delete the character before the cursor (backspace).
    fn delete_backward(&mut self);

    /// Delete the character at the cursor (delete).
    fn delete_forward(&mut self);

    /// Check if there is any non-whitespace content.
    fn has_content(&self) -> bool {
        self.content().iter().any(|line| !line.trim().is_empty())
    }

    /// Get the total number of lines.
    fn line_count(&self) -> usize {
        self.content().len()
    }
}

/// Multi-line text buffer with a character-indexed cursor.
#[derive(Debug, Clone)]
pub struct EditorState {
    content: Vec<String>,
    /// Cursor column in characters.
    pub cursor_x: usize,
    /// Cursor line.
    pub cursor_y: usize,
    /// First visible line.
    pub scroll_offset: usize,
    /// Visible lines, updated by the renderer.
    pub viewport_height: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            content: vec![String::new()],
            cursor_x: 0,
            cursor_y: 0,
            scroll_offset: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Byte offset of character index `col` in `line`, clamped to the end.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

impl EditorState {
    /// Create a buffer holding `text`, cursor at the start.
    pub fn from_text(text: &str) -> Self {
        let mut content: Vec<String> = text.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect();
        if content.is_empty() {
            content.push(String::new());
        }
        Self { content, ..Self::default() }
    }

    /// The whole buffer joined with newlines.
    pub fn text(&self) -> String {
        self.content.join("\n")
    }

    /// Replace the buffer contents, resetting cursor and scroll.
    pub fn set_text(&mut self, text: &str) {
        let viewport_height = self.viewport_height;
        *self = Self::from_text(text);
        self.viewport_height = viewport_height;
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    fn line_chars(&self, y: usize) -> usize {
        self.content.get(y).map_or(0, |l| l.chars().count())
    }

    /// Split the current line at the cursor.
    pub fn insert_newline(&mut self) {
        let line = &mut self.content[self.cursor_y];
        let at = byte_index(line, self.cursor_x);
        let rest = line.split_off(at);
        self.content.insert(self.cursor_y + 1, rest);
        self.cursor_y += 1;
        self.cursor_x = 0;
        self.ensure_cursor_visible();
    }

    /// Move the cursor one character left, wrapping to the previous line.
    pub fn move_left(&mut self) {
        if self.cursor_x > 0 {
            self.cursor_x -= 1;
        } else if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.cursor_x = self.line_chars(self.cursor_y);
        }
        self.ensure_cursor_visible();
    }

    /// Move the cursor one character right, wrapping to the next line.
    pub fn move_right(&mut self) {
        if self.cursor_x < self.line_chars(self.cursor_y) {
            self.cursor_x += 1;
        } else if self.cursor_y + 1 < self.content.len() {
            self.cursor_y += 1;
            self.cursor_x = 0;
        }
        self.ensure_cursor_visible();
    }

    /// Move the cursor up a line, clamping the column.
    pub fn move_up(&mut self) {
        if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.cursor_x = self.cursor_x.min(self.line_chars(self.cursor_y));
        }
        self.ensure_cursor_visible();
    }

    /// Move the cursor down a line, clamping the column.
    pub fn move_down(&mut self) {
        if self.cursor_y + 1 < self.content.len() {
            self.cursor_y += 1;
            self.cursor_x = self.cursor_x.min(self.line_chars(self.cursor_y));
        }
        self.ensure_cursor_visible();
    }

    /// Move to the start of the line.
    pub fn move_home(&mut self) {
        self.cursor_x = 0;
    }

    /// Move to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor_x = self.line_chars(self.cursor_y);
    }

    /// Adjust `scroll_offset` so the cursor line is on screen.
    pub fn ensure_cursor_visible(&mut self) {
        let height = self.viewport_height.max(1);
        if self.cursor_y < self.scroll_offset {
            self.scroll_offset = self.cursor_y;
        } else if self.cursor_y >= self.scroll_offset + height {
            self.scroll_offset = self.cursor_y + 1 - height;
        }
    }
}

impl Editor for EditorState {
    fn content(&self) -> &[String] {
        &self.content
    }

    fn cursor_position(&self) -> (usize, usize) {
        (self.cursor_y, self.cursor_x)
    }

    fn set_cursor(&mut self, line: usize, column: usize) {
        self.cursor_y = line.min(self.content.len().saturating_sub(1));
        self.cursor_x = column.min(self.line_chars(self.cursor_y));
        self.ensure_cursor_visible();
    }

    fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        let line = &mut self.content[self.cursor_y];
        let at = byte_index(line, self.cursor_x);
        line.insert(at, c);
        self.cursor_x += 1;
    }

    fn insert_str(&mut self, s: &str) {
        // Pasted text may carry CRLF line endings
        for c in s.chars().filter(|&c| c != '\r') {
            self.insert_char(c);
        }
    }

    fn delete_backward(&mut self) {
        if self.cursor_x > 0 {
            let line = &mut self.content[self.cursor_y];
            let at = byte_index(line, self.cursor_x - 1);
            line.remove(at);
            self.cursor_x -= 1;
        } else if self.cursor_y > 0 {
            let current = self.content.remove(self.cursor_y);
            self.cursor_y -= 1;
            self.cursor_x = self.line_chars(self.cursor_y);
            self.content[self.cursor_y].push_str(&current);
            self.ensure_cursor_visible();
        }
    }

    fn delete_forward(&mut self) {
        if self.cursor_x < self.line_chars(self.cursor_y) {
            let line = &mut self.content[self.cursor_y];
            let at = byte_index(line, self.cursor_x);
            line.remove(at);
        } else if self.cursor_y + 1 < self.content.len() {
            let next = self.content.remove(self.cursor_y + 1);
            self.content[self.cursor_y].push_str(&next);
        }
    }
}
