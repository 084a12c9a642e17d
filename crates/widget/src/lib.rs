//! mica-edit-widget: host-facing state for an editable text widget.
//!
//! The widget owns a fixed-arena [`GapBuffer`](mica_edit_buffer::GapBuffer)
//! and maps raw input events onto its operations: printable characters
//! insert at the cursor, Home/End jump to line boundaries, the arrows move
//! character-wise, and Delete/Backspace edit around the cursor. Every
//! handled event reports a [`Refresh`] scope so the host can drain its
//! event queue and redraw once.
//!
//! # Example
//!
//! ```
//! use mica_edit_input::KeyEvent;
//! use mica_edit_widget::{Refresh, TextEdit};
//!
//! let mut edit = TextEdit::with_text(1024, "hello").unwrap();
//!
//! let mut batch = Refresh::None;
//! batch.merge(edit.handle_key(&KeyEvent::char('!')));
//! batch.merge(edit.handle_key(&KeyEvent::char('?')));
//! assert_eq!(batch, Refresh::Text);
//!
//! assert_eq!(edit.text(), "hello!?");
//! assert_eq!(edit.cursor(), 7);
//! ```
//!
//! The presentation layer is somebody else's problem: a renderer reads the
//! logical text (two spans or a materialized string), the virtual cursor
//! position, and the display column, and draws however it likes.

mod text_edit;
mod types;

pub use text_edit::TextEdit;
pub use types::Refresh;
