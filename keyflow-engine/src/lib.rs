//! Gesture dispatch and document mutation for the keyflow keyboard core
//!
//! This crate turns `(KeyAction, Gesture)` pairs into effects over a
//! host-provided document surface, implements the facade-level
//! sentence operations, and holds the shared autocomplete state
//! container observed by the UI.

pub mod autocomplete;
pub mod buffer;
pub mod error;
pub mod proxy;
pub mod resolver;
pub mod sentences;

pub use autocomplete::{AutocompleteContext, AutocompleteSnapshot, RemoteQueryState, SharedError};
pub use buffer::{BufferDocument, ControllerEvent};
pub use error::EngineError;
pub use proxy::{KeyboardController, TextDocumentProxy};
pub use resolver::{run_standard_action, standard_action, standard_action_for, GestureAction};
pub use sentences::SentenceOps;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
