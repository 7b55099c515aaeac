//! keyflow CLI library
//!
//! Developer driver for the keyflow input core: simulates typing
//! sessions against the in-memory buffer and inspects sentence
//! boundaries. The keyboard core itself has no CLI surface; this
//! binary exists for exploration and debugging.

pub mod commands;
