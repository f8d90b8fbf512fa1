//! src/model/editor.rs
//! ============================================================================
//! # `EditorState`: plain-text document buffer
//!
//! Character-indexed cursor, positional insert and delete, and a bounded
//! undo history of buffer snapshots. Formatting is not modelled; a document
//! is its text.

use std::collections::VecDeque;

use crate::model::file_record::FileId;

/// Snapshots kept for undo; the oldest is dropped past this.
pub const MAX_UNDOS: usize = 100;

/// Spaces inserted for a tab so the cursor column matches the screen.
pub const TAB_WIDTH: usize = 4;

/// Cursor motions inside the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    buffer: String,
    cursor: usize,
}

/// Buffer of the document editor overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub file_id: FileId,
    pub buffer: String,
    /// Char index into `buffer`, `0..=char_len`.
    cursor: usize,
    pub dirty: bool,
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
}

impl EditorState {
    /// Opens with the cursor at the start of the document.
    #[must_use]
    pub const fn new(file_id: FileId, buffer: String) -> Self {
        Self {
            file_id,
            buffer,
            cursor: 0,
            dirty: false,
            undo: VecDeque::new(),
            redo: Vec::new(),
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// `(start, len)` in chars for every line, including an empty last line
    /// after a trailing newline.
    fn line_spans(&self) -> Vec<(usize, usize)> {
        let mut start = 0;
        self.buffer
            .split('\n')
            .map(|line| {
                let len = line.chars().count();
                let span = (start, len);
                start += len + 1;
                span
            })
            .collect()
    }

    /// Zero-based `(row, column)` of the cursor, in chars.
    #[must_use]
    pub fn cursor_position(&self) -> (usize, usize) {
        let spans = self.line_spans();
        let row = spans
            .iter()
            .rposition(|(start, _)| *start <= self.cursor)
            .unwrap_or(0);
        (row, self.cursor - spans[row].0)
    }

    fn record(&mut self) {
        self.redo.clear();
        self.undo.push_back(Snapshot {
            buffer: self.buffer.clone(),
            cursor: self.cursor,
        });
        if self.undo.len() > MAX_UNDOS {
            self.undo.pop_front();
        }
        self.dirty = true;
    }

    pub fn insert(&mut self, c: char) {
        self.record();
        let at = self.byte_index(self.cursor);
        if c == '\t' {
            self.buffer.insert_str(at, &" ".repeat(TAB_WIDTH));
            self.cursor += TAB_WIDTH;
        } else {
            self.buffer.insert(at, c);
            self.cursor += 1;
        }
    }

    /// Deletes the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.record();
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
    }

    /// Deletes the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        self.record();
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
    }

    pub fn move_cursor(&mut self, motion: CursorMove) {
        let (row, col) = self.cursor_position();
        let spans = self.line_spans();
        let (line_start, line_len) = spans[row];

        self.cursor = match motion {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(self.char_len()),
            CursorMove::Up if row > 0 => {
                let (start, len) = spans[row - 1];
                start + col.min(len)
            }
            CursorMove::Down if row + 1 < spans.len() => {
                let (start, len) = spans[row + 1];
                start + col.min(len)
            }
            CursorMove::Up | CursorMove::Down => self.cursor,
            CursorMove::LineStart => line_start,
            CursorMove::LineEnd => line_start + line_len,
            CursorMove::DocumentStart => 0,
            CursorMove::DocumentEnd => self.char_len(),
        };
    }

    /// Restores the previous snapshot. Returns false with nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        let current = self.swap(previous);
        self.redo.push(current);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let current = self.swap(next);
        self.undo.push_back(current);
        true
    }

    fn swap(&mut self, snapshot: Snapshot) -> Snapshot {
        let current = Snapshot {
            buffer: std::mem::replace(&mut self.buffer, snapshot.buffer),
            cursor: self.cursor,
        };
        self.cursor = snapshot.cursor;
        self.dirty = true;
        current
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.buffer.lines().count().max(1)
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.buffer.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> EditorState {
        EditorState::new(FileId::from("2"), text.into())
    }

    #[test]
    fn test_edits_at_end() {
        let mut ed = editor("one two");
        assert_eq!(ed.word_count(), 2);
        assert!(!ed.dirty);

        ed.move_cursor(CursorMove::DocumentEnd);
        ed.insert('\n');
        ed.insert('x');
        assert_eq!(ed.line_count(), 2);
        ed.backspace();
        ed.backspace();
        assert_eq!(ed.buffer, "one two");
        assert!(ed.dirty);
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut ed = editor("helo world");
        for _ in 0..3 {
            ed.move_cursor(CursorMove::Right);
        }
        ed.insert('l');
        assert_eq!(ed.buffer, "hello world");
        assert_eq!(ed.cursor(), 4);

        ed.move_cursor(CursorMove::LineEnd);
        ed.backspace();
        assert_eq!(ed.buffer, "hello worl");

        ed.move_cursor(CursorMove::LineStart);
        ed.insert('X');
        assert_eq!(ed.buffer, "Xhello worl");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut ed = editor("abc");
        ed.move_cursor(CursorMove::Right);
        ed.delete();
        assert_eq!(ed.buffer, "ac");
        assert_eq!(ed.cursor(), 1);

        ed.move_cursor(CursorMove::DocumentEnd);
        ed.delete();
        assert_eq!(ed.buffer, "ac");
    }

    #[test]
    fn test_vertical_motion_clamps_column() {
        let mut ed = editor("long line\nab\nthird line");
        for _ in 0..6 {
            ed.move_cursor(CursorMove::Right);
        }
        ed.move_cursor(CursorMove::Down);
        assert_eq!(ed.cursor_position(), (1, 2));
        ed.move_cursor(CursorMove::Down);
        assert_eq!(ed.cursor_position(), (2, 2));
        ed.move_cursor(CursorMove::Down);
        assert_eq!(ed.cursor_position(), (2, 2));

        ed.move_cursor(CursorMove::Up);
        ed.move_cursor(CursorMove::Up);
        assert_eq!(ed.cursor_position(), (0, 2));
    }

    #[test]
    fn test_multibyte_chars() {
        let mut ed = editor("héllo");
        ed.move_cursor(CursorMove::Right);
        ed.move_cursor(CursorMove::Right);
        ed.backspace();
        assert_eq!(ed.buffer, "hllo");
        ed.insert('é');
        assert_eq!(ed.buffer, "héllo");
    }

    #[test]
    fn test_tab_inserts_spaces() {
        let mut ed = editor("x");
        ed.insert('\t');
        assert_eq!(ed.buffer, "    x");
        assert_eq!(ed.cursor_position(), (0, TAB_WIDTH));
    }

    #[test]
    fn test_trailing_newline_has_empty_last_line() {
        let mut ed = editor("a\n");
        ed.move_cursor(CursorMove::DocumentEnd);
        assert_eq!(ed.cursor_position(), (1, 0));
    }

    #[test]
    fn test_undo_redo() {
        let mut ed = editor("ab");
        ed.move_cursor(CursorMove::Right);
        ed.insert('X');
        ed.insert('Y');
        assert_eq!(ed.buffer, "aXYb");

        assert!(ed.undo());
        assert_eq!(ed.buffer, "aXb");
        assert_eq!(ed.cursor(), 2);
        assert!(ed.undo());
        assert_eq!(ed.buffer, "ab");
        assert!(!ed.undo());

        assert!(ed.redo());
        assert_eq!(ed.buffer, "aXb");

        // a new edit drops the redo branch
        ed.insert('Z');
        assert!(!ed.can_redo());
        assert_eq!(ed.buffer, "aXZb");
    }

    #[test]
    fn test_undo_history_is_bounded() {
        let mut ed = editor("");
        for _ in 0..MAX_UNDOS + 10 {
            ed.insert('a');
        }
        let mut undone = 0;
        while ed.undo() {
            undone += 1;
        }
        assert_eq!(undone, MAX_UNDOS);
        assert_eq!(ed.buffer.len(), 10);
    }
}
