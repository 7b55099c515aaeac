//! Pure building blocks for the keyflow keyboard input core
//!
//! This crate holds the value types that describe key interactions
//! (actions, gestures, shift state) and the delimiter-driven sentence
//! boundary primitives. Everything here is deterministic and free of
//! I/O; the gesture dispatch and document mutation live in
//! `keyflow-engine`.

#![warn(missing_docs)]

pub mod action;
pub mod error;
pub mod gesture;
pub mod sentences;
pub mod shift;
pub mod suggestion;

pub use action::{Emoji, KeyAction};
pub use error::CoreError;
pub use gesture::Gesture;
pub use sentences::SentenceDelimiters;
pub use shift::{KeyboardType, ShiftState};
pub use suggestion::Suggestion;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
