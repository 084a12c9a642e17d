//! mica-edit-buffer: fixed-arena text storage for the mica-edit widget.
//!
//! This crate provides [`GapBuffer`], a gap buffer over a contiguous arena
//! that is allocated once and never resized. The gap doubles as the edit
//! cursor: insert, backspace and delete operate at the gap in O(1), and
//! cursor motion slides the gap through the text.
//!
//! # Overview
//!
//! The main type is [`GapBuffer`], which provides:
//! - Character insertion and deletion at the cursor position
//! - Character-wise and line-boundary cursor motion
//! - Virtual cursor position reporting against the gap-free text view
//! - Read-back of the logical text as two contiguous spans
//!
//! # Example
//!
//! ```
//! use mica_edit_buffer::GapBuffer;
//!
//! let mut buffer = GapBuffer::with_capacity(64);
//! buffer.set_text("ab\ncd").unwrap();
//! assert_eq!(buffer.cursor(), 5);
//!
//! buffer.jump_line_start();
//! assert_eq!(buffer.cursor(), 3);
//!
//! buffer.insert('X').unwrap();
//! assert_eq!(buffer.to_string(), "ab\nXcd");
//! ```
//!
//! # Capacity
//!
//! The host chooses the arena size up front. When the gap runs out, an
//! insertion is rejected with [`BufferError::CapacityExhausted`] and the
//! buffer is left untouched - there is no growth path. Edge-of-buffer
//! motion and deletion are ordinary no-ops, not errors.

mod error;
mod gap_buffer;

pub use error::BufferError;
pub use gap_buffer::GapBuffer;
