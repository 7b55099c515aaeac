//! Capability traits implemented by the host
//!
//! The live document and the surrounding keyboard process are
//! platform-owned; this core only sees them through these two traits.
//! All calls are fire-and-forget: the host no-ops anything it does not
//! support rather than signaling failure back into the core.

use keyflow_core::KeyboardType;

/// The text-editing surface around the input cursor
///
/// All counts and offsets are in characters, never bytes. A
/// `delete_backward` that exceeds the remaining buffer length must
/// clamp to the buffer rather than fail.
pub trait TextDocumentProxy {
    /// The text immediately before the cursor, if readable
    fn text_before_cursor(&self) -> Option<String>;

    /// The text immediately after the cursor, if readable
    fn text_after_cursor(&self) -> Option<String>;

    /// Insert text at the cursor
    fn insert_text(&mut self, text: &str);

    /// Delete `count` characters before the cursor
    fn delete_backward(&mut self, count: usize);

    /// Move the cursor by `offset` characters
    fn adjust_cursor(&mut self, offset: i32);

    /// Whether the cursor sits at the end of the current word
    fn is_cursor_at_end_of_word(&self) -> bool;
}

/// The full keyboard host surface
///
/// Extends the document proxy with the session-level operations that
/// gesture effects may trigger.
pub trait KeyboardController: TextDocumentProxy {
    /// Switch the active keyboard layout
    fn set_keyboard_type(&mut self, kind: KeyboardType);

    /// Advance to the next locale in the host's enabled set
    fn select_next_locale(&mut self);

    /// Start dictation
    fn perform_dictation(&mut self);

    /// Dismiss the keyboard
    fn dismiss_keyboard(&mut self);

    /// Open a URL in the host
    fn open_url(&mut self, url: &str);
}
