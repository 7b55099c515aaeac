//! Engine error types

use keyflow_core::CoreError;
use thiserror::Error;

/// Engine-level errors
///
/// Dispatch itself never fails; an unresolvable `(action, gesture)`
/// pair is an empty result, not an error. Only configuration can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Core configuration error
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}
