//! Error type for buffer operations that can run out of room.
//!
//! The arena is allocated once and never grows, so the only fallible
//! operations are the ones that need free gap space. Edge-of-buffer
//! conditions (deleting at the start, moving past the end) are ordinary
//! no-ops, not errors.

use std::error::Error;
use std::fmt;

/// Errors reported by [`GapBuffer`](crate::GapBuffer) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// An insertion was attempted while the gap is empty.
    ///
    /// The buffer is left untouched. The arena has a fixed capacity; the
    /// host decides whether to report the condition or drop the input.
    CapacityExhausted {
        /// Total arena capacity in characters.
        capacity: usize,
    },

    /// `set_text` was handed more characters than the arena can hold.
    ///
    /// The buffer is left untouched. Truncating instead would silently
    /// desynchronize the virtual cursor position from the host's view of
    /// the text, so this fails loudly.
    TextTooLong {
        /// Character count of the rejected text.
        len: usize,
        /// Total arena capacity in characters.
        capacity: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::CapacityExhausted { capacity } => {
                write!(f, "buffer full: arena capacity of {} characters is exhausted", capacity)
            }
            BufferError::TextTooLong { len, capacity } => {
                write!(
                    f,
                    "text of {} characters does not fit in arena of capacity {}",
                    len, capacity
                )
            }
        }
    }
}

impl Error for BufferError {}
