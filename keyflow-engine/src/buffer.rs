//! In-memory document fake
//!
//! The real host surface only exists on an end-user device, so tests
//! and the demo driver run against this buffer. It implements both
//! capability traits, keeps its cursor as a character offset, and
//! records the session-level controller calls for inspection.

use crate::proxy::{KeyboardController, TextDocumentProxy};
use keyflow_core::KeyboardType;

/// A session-level controller call recorded by [`BufferDocument`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The active layout was switched
    KeyboardType(KeyboardType),
    /// The next locale was selected
    NextLocale,
    /// Dictation was triggered
    Dictation,
    /// The keyboard was dismissed
    Dismiss,
    /// A URL was opened
    OpenUrl(String),
}

/// An in-memory text document with a character-offset cursor
#[derive(Debug, Clone, Default)]
pub struct BufferDocument {
    chars: Vec<char>,
    cursor: usize,
    keyboard_type: Option<KeyboardType>,
    events: Vec<ControllerEvent>,
}

impl BufferDocument {
    /// An empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding `text`, cursor at the end
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self {
            chars,
            cursor,
            ..Self::default()
        }
    }

    /// A document holding `text`, cursor at the given character offset
    ///
    /// The offset is clamped to the text length.
    pub fn with_cursor(text: &str, cursor: usize) -> Self {
        let mut doc = Self::from_text(text);
        doc.cursor = cursor.min(doc.chars.len());
        doc
    }

    /// The full document text
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// The cursor position as a character offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The layout most recently set through the controller, if any
    pub fn keyboard_type(&self) -> Option<KeyboardType> {
        self.keyboard_type
    }

    /// The session-level calls recorded so far, in order
    pub fn events(&self) -> &[ControllerEvent] {
        &self.events
    }
}

impl TextDocumentProxy for BufferDocument {
    fn text_before_cursor(&self) -> Option<String> {
        Some(self.chars[..self.cursor].iter().collect())
    }

    fn text_after_cursor(&self) -> Option<String> {
        Some(self.chars[self.cursor..].iter().collect())
    }

    fn insert_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.chars.insert(self.cursor, ch);
            self.cursor += 1;
        }
    }

    fn delete_backward(&mut self, count: usize) {
        // Clamp to the buffer rather than fail.
        let count = count.min(self.cursor);
        self.chars.drain(self.cursor - count..self.cursor);
        self.cursor -= count;
    }

    fn adjust_cursor(&mut self, offset: i32) {
        let cursor = self.cursor as i64 + offset as i64;
        self.cursor = cursor.clamp(0, self.chars.len() as i64) as usize;
    }

    fn is_cursor_at_end_of_word(&self) -> bool {
        // A word is in progress before the cursor (ignoring trailing
        // spaces) and the cursor is not inside it.
        let before_ends_word = self.chars[..self.cursor]
            .iter()
            .rev()
            .find(|ch| !ch.is_whitespace())
            .is_some_and(|ch| ch.is_alphanumeric());
        let next_is_word = self
            .chars
            .get(self.cursor)
            .is_some_and(|ch| ch.is_alphanumeric());
        before_ends_word && !next_is_word
    }
}

impl KeyboardController for BufferDocument {
    fn set_keyboard_type(&mut self, kind: KeyboardType) {
        self.keyboard_type = Some(kind);
        self.events.push(ControllerEvent::KeyboardType(kind));
    }

    fn select_next_locale(&mut self) {
        self.events.push(ControllerEvent::NextLocale);
    }

    fn perform_dictation(&mut self) {
        self.events.push(ControllerEvent::Dictation);
    }

    fn dismiss_keyboard(&mut self) {
        self.events.push(ControllerEvent::Dismiss);
    }

    fn open_url(&mut self, url: &str) {
        self.events.push(ControllerEvent::OpenUrl(url.to_string()));
    }
}
