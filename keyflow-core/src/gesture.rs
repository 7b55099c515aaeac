//! Gestures that can be performed on a key
//!
//! Exactly one gesture accompanies a given interaction frame; the
//! engine resolves a `(KeyAction, Gesture)` pair to an effect.

/// The manner in which a key was interacted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Gesture {
    /// The key was pressed down
    Press,
    /// The key was released
    Release,
    /// The key was held past the long-press threshold
    LongPress,
    /// The key was tapped twice in quick succession
    DoubleTap,
    /// Fired continuously while the key is held down
    RepeatPress,
}

impl Gesture {
    /// All gestures, in resolution-table order
    pub const ALL: [Gesture; 5] = [
        Gesture::Press,
        Gesture::Release,
        Gesture::LongPress,
        Gesture::DoubleTap,
        Gesture::RepeatPress,
    ];
}
