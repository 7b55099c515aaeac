//! Sentence operations over the document facade
//!
//! Bridges the pure delimiter predicates in `keyflow-core` to the live
//! document: cursor-position predicates, sentence ending, and the
//! whole-buffer replace primitive.

use crate::error::EngineError;
use crate::proxy::TextDocumentProxy;
use keyflow_core::SentenceDelimiters;

/// Sentence-level operations bound to a delimiter set
#[derive(Debug, Clone, Default)]
pub struct SentenceOps {
    delimiters: SentenceDelimiters,
}

impl SentenceOps {
    /// Operations with the default western delimiter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations with a custom delimiter set
    pub fn with_delimiters<I, S>(delimiters: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            delimiters: SentenceDelimiters::custom(delimiters)?,
        })
    }

    /// The delimiter set in use
    pub fn delimiters(&self) -> &SentenceDelimiters {
        &self.delimiters
    }

    /// Whether the cursor is at the start of a new sentence
    ///
    /// An unreadable before-context counts as a new sentence.
    pub fn is_cursor_at_new_sentence(&self, proxy: &dyn TextDocumentProxy) -> bool {
        match proxy.text_before_cursor() {
            Some(before) => self.delimiters.is_last_sentence_ended(&before),
            None => true,
        }
    }

    /// Whether the cursor is at the start of a new sentence, with
    /// trailing whitespace after the delimiter
    pub fn is_cursor_at_new_sentence_with_trailing_whitespace(
        &self,
        proxy: &dyn TextDocumentProxy,
    ) -> bool {
        match proxy.text_before_cursor() {
            Some(before) => self
                .delimiters
                .is_last_sentence_ended_with_trailing_whitespace(&before),
            None => true,
        }
    }

    /// The sentence in progress right before the cursor, if any
    pub fn sentence_before_input(&self, proxy: &dyn TextDocumentProxy) -> Option<String> {
        self.delimiters.last_sentence(&proxy.text_before_cursor()?)
    }

    /// End the current sentence
    ///
    /// Only valid when the cursor sits at the end of the current word;
    /// otherwise a silent no-op. Removes the run of trailing space
    /// characters one at a time, then inserts a period and a space.
    /// Idempotent once the trailing-space run is exhausted.
    pub fn end_sentence(&self, proxy: &mut dyn TextDocumentProxy) {
        if !proxy.is_cursor_at_end_of_word() {
            return;
        }
        while proxy
            .text_before_cursor()
            .is_some_and(|before| before.ends_with(' '))
        {
            proxy.delete_backward(1);
        }
        proxy.insert_text(". ");
    }

    /// Replace the entire visible buffer with `replacement`
    ///
    /// Moves the cursor to the very end of the text, deletes the whole
    /// before+after window, and inserts the replacement. Callers that
    /// want a sentence-scoped replace must first narrow the window to
    /// a single sentence; this routine is a whole-buffer primitive.
    /// An empty buffer performs no mutations.
    pub fn replace_current_sentence(&self, proxy: &mut dyn TextDocumentProxy, replacement: &str) {
        let before = proxy.text_before_cursor().unwrap_or_default();
        let after = proxy.text_after_cursor().unwrap_or_default();
        if before.is_empty() && after.is_empty() {
            return;
        }
        let after_chars = after.chars().count();
        proxy.adjust_cursor(after_chars as i32);
        proxy.delete_backward(before.chars().count() + after_chars);
        proxy.insert_text(replacement);
    }
}
