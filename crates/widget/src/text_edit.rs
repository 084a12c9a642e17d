//! TextEdit is the host-facing widget state.
//!
//! It owns the gap buffer and translates raw key events into buffer
//! operations, one call per event, the way a message-loop dispatch does.
//! Each handled event reports a [`Refresh`] scope so a host draining an
//! event queue can merge them and redraw once per batch.

use mica_edit_buffer::{BufferError, GapBuffer};
use mica_edit_input::{Key, KeyEvent};
use unicode_width::UnicodeWidthChar;

use crate::types::Refresh;

/// An editable text widget backed by a fixed-arena gap buffer.
///
/// The widget holds no layout or platform state; it maintains the text and
/// the edit cursor, and exposes what a presentation layer needs to draw:
/// the logical text (two spans or a materialized string), the virtual
/// cursor position, and a width-aware display column.
#[derive(Debug)]
pub struct TextEdit {
    buffer: GapBuffer,
}

impl TextEdit {
    /// Creates an empty widget with a fixed arena of `capacity` characters.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: GapBuffer::with_capacity(capacity),
        }
    }

    /// Creates a widget primed with `text`, cursor at the end.
    ///
    /// Fails if the text exceeds the arena capacity.
    pub fn with_text(capacity: usize, text: &str) -> Result<Self, BufferError> {
        let mut buffer = GapBuffer::with_capacity(capacity);
        buffer.set_text(text)?;
        Ok(Self { buffer })
    }

    /// Handles one key event, returning what a renderer must redraw.
    ///
    /// Printable characters insert at the cursor; a full buffer rejects the
    /// keystroke and reports `Refresh::None`, leaving the text unchanged.
    /// Control and alt chords are the host's business and are ignored here.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Refresh {
        if event.modifiers.is_chord() {
            return Refresh::None;
        }

        match event.key {
            Key::Char(ch) if !ch.is_control() => self.insert_char(ch),
            Key::Char(_) => Refresh::None,
            Key::Return => self.insert_char('\n'),
            Key::Backspace => match self.buffer.delete_backward() {
                Some(_) => Refresh::Text,
                None => Refresh::None,
            },
            Key::Delete => match self.buffer.delete_forward() {
                Some(_) => Refresh::Text,
                None => Refresh::None,
            },
            Key::Left => {
                if self.buffer.move_left() {
                    Refresh::Cursor
                } else {
                    Refresh::None
                }
            }
            Key::Right => {
                if self.buffer.move_right() {
                    Refresh::Cursor
                } else {
                    Refresh::None
                }
            }
            Key::Home => self.jump(GapBuffer::jump_line_start),
            Key::End => self.jump(GapBuffer::jump_line_end),
        }
    }

    fn insert_char(&mut self, ch: char) -> Refresh {
        match self.buffer.insert(ch) {
            Ok(()) => Refresh::Text,
            // Fixed arena is full: the keystroke is dropped, not the text.
            Err(_) => Refresh::None,
        }
    }

    fn jump(&mut self, op: fn(&mut GapBuffer)) -> Refresh {
        let before = self.buffer.cursor();
        op(&mut self.buffer);
        if self.buffer.cursor() == before {
            Refresh::None
        } else {
            Refresh::Cursor
        }
    }

    // ==================== Read-back ====================

    /// Materializes the logical text as a String.
    ///
    /// The allocation is sized to the logical length, never a fixed guess.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.buffer.len());
        out.extend(self.buffer.chars());
        out
    }

    /// Returns the logical text as its two contiguous spans (prefix before
    /// the gap, suffix after it). Readers concatenate them; the gap itself
    /// is never exposed.
    pub fn spans(&self) -> (&[char], &[char]) {
        (self.buffer.prefix(), self.buffer.suffix())
    }

    /// Returns the virtual cursor position: the logical character index of
    /// the edit point. Presentation layers map this onto a rendered-text
    /// coordinate (caret, underline range).
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Returns the number of characters in the widget.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the widget holds no text.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the fixed arena capacity.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the display-cell column of the cursor within its line.
    ///
    /// Columns are counted in terminal cells: wide characters (CJK and
    /// friends) occupy two, zero-width characters none. Monospace
    /// renderers use this to place the caret without re-measuring the line.
    pub fn display_column(&self) -> usize {
        let prefix = self.buffer.prefix();
        let line_start = prefix
            .iter()
            .rposition(|&ch| ch == '\n')
            .map_or(0, |i| i + 1);
        prefix[line_start..]
            .iter()
            .map(|&ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }

    /// Direct access to the underlying buffer, for hosts that drive it
    /// without going through key events.
    pub fn buffer(&self) -> &GapBuffer {
        &self.buffer
    }

    /// Mutable access to the underlying buffer.
    pub fn buffer_mut(&mut self) -> &mut GapBuffer {
        &mut self.buffer
    }
}
