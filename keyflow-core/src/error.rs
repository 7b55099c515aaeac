//! Core error types

use thiserror::Error;

/// Errors produced while building core configuration values
///
/// The dispatch and boundary functions themselves are total over their
/// input domain and never fail; only configuration construction can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A custom delimiter set was built without any delimiters
    #[error("sentence delimiter set must not be empty")]
    EmptyDelimiters,

    /// A delimiter string was empty
    #[error("sentence delimiter must not be an empty string")]
    EmptyDelimiterString,
}
