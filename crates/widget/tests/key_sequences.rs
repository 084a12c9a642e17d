//! Integration tests driving the widget the way a host event loop does:
//! a stream of key events in, merged refresh reports and read-back out.

use mica_edit_input::{Key, KeyEvent, Modifiers};
use mica_edit_widget::{Refresh, TextEdit};

fn key(k: Key) -> KeyEvent {
    KeyEvent::new(k, Modifiers::default())
}

fn type_str(edit: &mut TextEdit, s: &str) -> Refresh {
    let mut batch = Refresh::None;
    for ch in s.chars() {
        batch.merge(edit.handle_key(&KeyEvent::char(ch)));
    }
    batch
}

#[test]
fn test_typing_a_sentence() {
    let mut edit = TextEdit::new(1024);
    let batch = type_str(&mut edit, "the quick brown fox");
    assert_eq!(batch, Refresh::Text);
    assert_eq!(edit.text(), "the quick brown fox");
    assert_eq!(edit.cursor(), 19);
}

#[test]
fn test_typo_correction_session() {
    let mut edit = TextEdit::new(1024);
    type_str(&mut edit, "teh");
    edit.handle_key(&key(Key::Backspace));
    edit.handle_key(&key(Key::Backspace));
    type_str(&mut edit, "he");
    assert_eq!(edit.text(), "the");
}

#[test]
fn test_home_edit_end_round_trip() {
    let mut edit = TextEdit::with_text(1024, "ab\ncd").unwrap();

    // Home on the second line, type at its start, End back.
    edit.handle_key(&key(Key::Home));
    assert_eq!(edit.cursor(), 3);
    edit.handle_key(&KeyEvent::char('>'));
    assert_eq!(edit.text(), "ab\n>cd");
    edit.handle_key(&key(Key::End));
    assert_eq!(edit.cursor(), 6);
}

#[test]
fn test_arrow_navigation_and_insertion() {
    let mut edit = TextEdit::with_text(1024, "abc").unwrap();
    edit.handle_key(&key(Key::Left));
    edit.handle_key(&key(Key::Left));
    assert_eq!(edit.cursor(), 1);
    edit.handle_key(&KeyEvent::char('X'));
    assert_eq!(edit.text(), "aXbc");
    assert_eq!(edit.cursor(), 2);
}

#[test]
fn test_return_splits_line_and_home_respects_it() {
    let mut edit = TextEdit::with_text(1024, "abcd").unwrap();
    edit.handle_key(&key(Key::Left));
    edit.handle_key(&key(Key::Left));
    edit.handle_key(&key(Key::Return));
    assert_eq!(edit.text(), "ab\ncd");
    assert_eq!(edit.cursor(), 3);

    // Home is now a no-op: the cursor already sits at the line start.
    assert_eq!(edit.handle_key(&key(Key::Home)), Refresh::None);
}

#[test]
fn test_batch_merging_for_one_redraw() {
    let mut edit = TextEdit::with_text(1024, "hello").unwrap();

    // A drained queue of cursor motions merges to a cursor-only repaint.
    let mut batch = Refresh::None;
    batch.merge(edit.handle_key(&key(Key::Left)));
    batch.merge(edit.handle_key(&key(Key::Left)));
    batch.merge(edit.handle_key(&key(Key::Home)));
    assert_eq!(batch, Refresh::Cursor);

    // One edit in the batch widens it to a full text refresh.
    batch.merge(edit.handle_key(&KeyEvent::char('x')));
    assert_eq!(batch, Refresh::Text);
}

#[test]
fn test_full_widget_rejects_typing_but_keeps_navigation() {
    let mut edit = TextEdit::with_text(4, "abcd").unwrap();

    assert_eq!(type_str(&mut edit, "efg"), Refresh::None);
    assert_eq!(edit.text(), "abcd");

    // Navigation still works on a full widget.
    assert_eq!(edit.handle_key(&key(Key::Left)), Refresh::Cursor);
    assert_eq!(edit.cursor(), 3);

    // Freeing one slot makes typing work again.
    assert_eq!(edit.handle_key(&key(Key::Delete)), Refresh::Text);
    assert_eq!(edit.handle_key(&KeyEvent::char('z')), Refresh::Text);
    assert_eq!(edit.text(), "abcz");
}

#[test]
fn test_spans_track_the_cursor() {
    let mut edit = TextEdit::with_text(1024, "window").unwrap();
    edit.handle_key(&key(Key::Left));
    edit.handle_key(&key(Key::Left));
    edit.handle_key(&key(Key::Left));

    let (prefix, suffix) = edit.spans();
    assert_eq!(prefix.iter().collect::<String>(), "win");
    assert_eq!(suffix.iter().collect::<String>(), "dow");

    // The host concatenates prefix + suffix and underlines at cursor().
    assert_eq!(edit.cursor(), 3);
}

#[test]
fn test_display_column_tracks_wide_characters() {
    let mut edit = TextEdit::new(1024);
    type_str(&mut edit, "日本語");
    assert_eq!(edit.cursor(), 3);
    assert_eq!(edit.display_column(), 6);

    edit.handle_key(&key(Key::Return));
    type_str(&mut edit, "ab");
    assert_eq!(edit.display_column(), 2);
}
