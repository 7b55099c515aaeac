//! Logical key actions
//!
//! A `KeyAction` describes what a key means, independent of how it was
//! touched. The caller constructs one per key-press event; the engine
//! maps `(KeyAction, Gesture)` pairs to document effects.

use crate::shift::{KeyboardType, ShiftState};

/// An emoji that can be placed on a key
///
/// Stored as a string because an emoji may span several Unicode
/// scalars (skin tones, ZWJ sequences).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emoji(String);

impl Emoji {
    /// Create an emoji from its character sequence
    pub fn new(chars: impl Into<String>) -> Self {
        Emoji(chars.into())
    }

    /// The character sequence inserted into the document
    pub fn char(&self) -> &str {
        &self.0
    }
}

/// The logical meaning assigned to a key
///
/// A closed set of variants. Variants without a default effect (for
/// example [`KeyAction::None`] or [`KeyAction::Custom`]) resolve to no
/// effect; absence of a default is not an error, it leaves the action
/// free for upstream configuration to override.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyAction {
    /// Insert the given character(s) into the document
    Character(String),
    /// A character key rendered in the layout margin; inserts like
    /// [`KeyAction::Character`]
    CharacterMargin(String),
    /// Delete backward one character per press, repeating while held
    Backspace,
    /// Start dictation in the host
    Dictation,
    /// Dismiss the keyboard
    DismissKeyboard,
    /// Insert an emoji
    Emoji(Emoji),
    /// Move the input cursor one character back
    MoveCursorBackward,
    /// Move the input cursor one character forward
    MoveCursorForward,
    /// Advance to the next locale in the host's enabled set
    NextLocale,
    /// The primary (return) key; inserts a newline by default
    Primary,
    /// The shift key, carrying the state it was pressed in
    Shift {
        /// The shift state that was active when the key was pressed
        current: ShiftState,
    },
    /// Insert a space
    Space,
    /// Open the host's keyboard settings
    SystemSettings,
    /// Insert a tab
    Tab,
    /// Open the given URL in the host
    Url(String),
    /// Switch the active layout
    KeyboardType(KeyboardType),
    /// Switch to the next system keyboard; handled by the host, no
    /// default effect here
    NextKeyboard,
    /// A named action resolved entirely by upstream configuration
    Custom(String),
    /// A dead key with no meaning
    None,
}

impl KeyAction {
    /// Whether this action has no standard effect for any gesture
    pub fn has_standard_effect(&self) -> bool {
        !matches!(
            self,
            KeyAction::None | KeyAction::Custom(_) | KeyAction::NextKeyboard
        )
    }
}
