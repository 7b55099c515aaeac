//! Shared autocomplete state
//!
//! One container per keyboard session, written by the suggestion
//! pipeline and read by the UI. Producer and consumer may run on
//! different threads, so readers take versioned snapshots instead of
//! holding references into the container.

use keyflow_core::Suggestion;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Error reported by the autocomplete pipeline
///
/// The core only stores and exposes it; it never interprets one.
pub type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Outcome of the most recent network-backed lookup, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RemoteQueryState {
    /// No remote query has completed for the current context
    #[default]
    None,
    /// The remote lookup confirmed the current input
    Correct,
    /// The remote lookup flagged the current input
    Incorrect,
}

/// A point-in-time copy of the autocomplete state
#[derive(Debug, Clone)]
pub struct AutocompleteSnapshot {
    /// Whether autocorrect suggestions may be applied; a user
    /// preference, survives `reset`
    pub is_autocorrect_enabled: bool,
    /// Whether autocomplete runs at all; a user preference, survives
    /// `reset`
    pub is_autocomplete_enabled: bool,
    /// Whether suggestions are currently being fetched
    pub is_loading: bool,
    /// The last error reported by the pipeline
    pub last_error: Option<SharedError>,
    /// The current suggestions, in rank order; consumers must not sort
    pub suggestions: Vec<Suggestion>,
    /// Outcome of the most recent remote lookup
    pub remote_query_state: RemoteQueryState,
}

impl Default for AutocompleteSnapshot {
    fn default() -> Self {
        Self {
            is_autocorrect_enabled: true,
            is_autocomplete_enabled: true,
            is_loading: false,
            last_error: None,
            suggestions: Vec::new(),
            remote_query_state: RemoteQueryState::None,
        }
    }
}

/// The shared autocomplete state container
///
/// The pipeline is the sole writer, through [`Self::update`]; any
/// number of readers observe via [`Self::snapshot`]. Every write bumps
/// a version counter so pull-based consumers can poll
/// [`Self::has_changed`] cheaply. The container is an open state bag:
/// writes are not validated, the in-process pipeline is trusted.
#[derive(Debug, Default)]
pub struct AutocompleteContext {
    state: RwLock<AutocompleteSnapshot>,
    version: AtomicU64,
}

impl AutocompleteContext {
    /// Create a container with default state
    pub fn new() -> Self {
        Self::default()
    }

    /// A point-in-time copy of the current state
    pub fn snapshot(&self) -> AutocompleteSnapshot {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mutate the state and publish a new version
    pub fn update(&self, f: impl FnOnce(&mut AutocompleteSnapshot)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state);
        self.version.fetch_add(1, Ordering::Release);
    }

    /// The current version; bumped on every write
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Whether the state has changed since an observed version
    pub fn has_changed(&self, since: u64) -> bool {
        self.version() != since
    }

    /// Clear transient query state on context change or session end
    ///
    /// Resets exactly `is_loading`, `last_error`, `suggestions` and
    /// `remote_query_state`. The two enable flags are user preferences
    /// and survive the reset.
    pub fn reset(&self) {
        self.update(|state| {
            state.is_loading = false;
            state.last_error = None;
            state.suggestions = Vec::new();
            state.remote_query_state = RemoteQueryState::None;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let context = AutocompleteContext::new();
        let state = context.snapshot();
        assert!(state.is_autocorrect_enabled);
        assert!(state.is_autocomplete_enabled);
        assert!(!state.is_loading);
        assert!(state.last_error.is_none());
        assert!(state.suggestions.is_empty());
        assert_eq!(state.remote_query_state, RemoteQueryState::None);
    }

    #[test]
    fn test_reset_preserves_enable_flags() {
        let context = AutocompleteContext::new();
        context.update(|state| {
            state.is_autocorrect_enabled = false;
            state.is_autocomplete_enabled = false;
            state.is_loading = true;
            state.last_error = Some(Arc::new(std::io::Error::other("lookup failed")));
            state.suggestions = vec![Suggestion::new("hello")];
            state.remote_query_state = RemoteQueryState::Incorrect;
        });

        context.reset();

        let state = context.snapshot();
        assert!(!state.is_autocorrect_enabled);
        assert!(!state.is_autocomplete_enabled);
        assert!(!state.is_loading);
        assert!(state.last_error.is_none());
        assert!(state.suggestions.is_empty());
        assert_eq!(state.remote_query_state, RemoteQueryState::None);
    }

    #[test]
    fn test_version_bumps_on_every_write() {
        let context = AutocompleteContext::new();
        let v0 = context.version();
        context.update(|state| state.is_loading = true);
        assert!(context.has_changed(v0));
        let v1 = context.version();
        context.reset();
        assert!(context.has_changed(v1));
    }

    #[test]
    fn test_producer_thread_visible_to_reader() {
        let context = Arc::new(AutocompleteContext::new());
        let producer = Arc::clone(&context);
        let handle = std::thread::spawn(move || {
            producer.update(|state| state.is_loading = true);
            producer.update(|state| {
                state.is_loading = false;
                state.suggestions = vec![Suggestion::new("done")];
                state.remote_query_state = RemoteQueryState::Correct;
            });
        });
        handle.join().unwrap();

        let state = context.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.suggestions, vec![Suggestion::new("done")]);
        assert_eq!(state.remote_query_state, RemoteQueryState::Correct);
    }
}
