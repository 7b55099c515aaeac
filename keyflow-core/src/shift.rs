//! Shift state and keyboard layout types

/// The case state of the alphabetic layout
///
/// `Auto` is a transient capitalization suggested by context (for
/// example after a sentence delimiter), not a state the user set
/// explicitly. Transitions are only ever triggered by a shift key
/// release carrying the previous state, never derived from ambient
/// text state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShiftState {
    /// Letters insert lowercase
    Lowercased,
    /// Letters insert uppercase for the next key, then fall back
    Uppercased,
    /// Letters insert uppercase until explicitly released
    CapsLocked,
    /// Context-suggested uppercase (e.g. at the start of a sentence)
    Auto,
}

impl ShiftState {
    /// The state a single shift release transitions to
    ///
    /// A tap from `Lowercased` shifts up; a tap from any other state,
    /// caps-lock included, drops back to `Lowercased`. Entering
    /// caps-lock is a separate gesture and is not part of this
    /// transition.
    pub fn next_on_shift(self) -> ShiftState {
        match self {
            ShiftState::Lowercased => ShiftState::Uppercased,
            ShiftState::Auto | ShiftState::CapsLocked | ShiftState::Uppercased => {
                ShiftState::Lowercased
            }
        }
    }

    /// Whether letters currently insert uppercase
    pub fn is_uppercased(self) -> bool {
        matches!(
            self,
            ShiftState::Uppercased | ShiftState::CapsLocked | ShiftState::Auto
        )
    }
}

/// The active keyboard layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyboardType {
    /// Letter keys, with the given case state
    Alphabetic(ShiftState),
    /// Digit keys
    Numeric,
    /// Symbol keys
    Symbolic,
    /// Emoji picker
    Emojis,
}
