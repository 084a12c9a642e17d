/// What a renderer must redraw after an event was handled.
/// Used by the host's drain-all-then-render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Refresh {
    /// Nothing changed (no-op at a buffer edge, rejected insertion,
    /// unhandled key).
    None,
    /// Only the cursor moved; the text is unchanged. A caret or underline
    /// repaint suffices.
    Cursor,
    /// The text changed; layout must be rebuilt.
    Text,
}

impl Refresh {
    /// Returns true if nothing needs redrawing.
    pub fn is_none(&self) -> bool {
        matches!(self, Refresh::None)
    }

    /// Merges another refresh report into this one, producing the widest
    /// scope of the two.
    ///
    /// This is used when draining an event queue: each event produces a
    /// `Refresh`, and they are merged together so the host renders once at
    /// the end covering everything that changed. The variants are ordered
    /// `None < Cursor < Text`, so merging is a max.
    pub fn merge(&mut self, other: Refresh) {
        *self = (*self).max(other);
    }
}
