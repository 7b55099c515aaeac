//! Autocomplete suggestion value type

use std::collections::HashMap;

/// An autocomplete candidate
///
/// Produced by a suggestion provider, rendered by the UI, and inserted
/// verbatim by the release effect of a suggestion key.
///
/// Identity and equality deliberately disagree: [`Suggestion::id`] is
/// the `text` alone, while `PartialEq` compares `(text, title,
/// subtitle)` and ignores the flags. De-duplication by display
/// identity keeps two visually identical suggestions from appearing
/// twice even when their flags differ, while keyed containers collide
/// on `text` alone. Both definitions carry known edge cases (same
/// text, different subtitle) and are kept as-is on purpose.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// The text inserted into the document when applied
    pub text: String,
    /// The text displayed in the toolbar; defaults to `text`
    pub title: String,
    /// Optional secondary display text
    pub subtitle: Option<String>,
    /// Whether the suggestion auto-applies on a word boundary
    pub is_autocorrect: bool,
    /// Whether the word is unrecognized; typically rendered quoted
    pub is_unknown: bool,
    /// Whether this is a whole-sentence correction
    pub is_sentence: bool,
    /// Opaque sidecar values for consumers
    pub additional_info: HashMap<String, serde_json::Value>,
}

impl Suggestion {
    /// Create a suggestion whose title mirrors its text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            title: text.clone(),
            text,
            ..Default::default()
        }
    }

    /// Replace the displayed title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Attach a subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Mark as an autocorrect suggestion
    pub fn autocorrect(mut self) -> Self {
        self.is_autocorrect = true;
        self
    }

    /// Mark as an unknown-word suggestion
    pub fn unknown(mut self) -> Self {
        self.is_unknown = true;
        self
    }

    /// Mark as a whole-sentence correction
    pub fn sentence(mut self) -> Self {
        self.is_sentence = true;
        self
    }

    /// Attach an opaque sidecar value
    pub fn with_info(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.additional_info.insert(key.into(), value);
        self
    }

    /// The identity of this suggestion in keyed containers
    pub fn id(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.title == other.title && self.subtitle == other.subtitle
    }
}

impl Eq for Suggestion {}
