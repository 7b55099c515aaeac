//! Delimiter-driven sentence boundary primitives
//!
//! Pure functions over the text immediately before the cursor. All
//! offsets and counts are in characters, never bytes; the engine's
//! document facade uses the same unit.

use crate::error::CoreError;
use smallvec::{smallvec, SmallVec};

/// A configurable set of sentence-delimiter strings
///
/// Defaults to western punctuation. An empty `before` context is
/// treated as "start of a new sentence" by every predicate: there is
/// nothing to be un-ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceDelimiters {
    delimiters: SmallVec<[String; 4]>,
}

impl Default for SentenceDelimiters {
    fn default() -> Self {
        Self {
            delimiters: smallvec![".".into(), "!".into(), "?".into()],
        }
    }
}

impl SentenceDelimiters {
    /// Build a custom delimiter set
    ///
    /// Fails on an empty set or an empty delimiter string; both would
    /// make every predicate degenerate.
    pub fn custom<I, S>(delimiters: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let delimiters: SmallVec<[String; 4]> =
            delimiters.into_iter().map(Into::into).collect();
        if delimiters.is_empty() {
            return Err(CoreError::EmptyDelimiters);
        }
        if delimiters.iter().any(String::is_empty) {
            return Err(CoreError::EmptyDelimiterString);
        }
        Ok(Self { delimiters })
    }

    /// The configured delimiter strings
    pub fn as_slice(&self) -> &[String] {
        &self.delimiters
    }

    /// Whether the given string is one of the configured delimiters
    pub fn is_delimiter(&self, s: &str) -> bool {
        self.delimiters.iter().any(|d| d == s)
    }

    /// Whether the last sentence in `before` has ended
    ///
    /// Scans backward past trailing whitespace; true when the first
    /// non-whitespace content ends in a delimiter, or when `before`
    /// holds no non-whitespace content at all.
    pub fn is_last_sentence_ended(&self, before: &str) -> bool {
        let trimmed = before.trim_end();
        trimmed.is_empty() || self.delimiters.iter().any(|d| trimmed.ends_with(d.as_str()))
    }

    /// Like [`Self::is_last_sentence_ended`], but additionally requires
    /// at least one whitespace character after the delimiter
    ///
    /// An empty `before` still counts as true.
    pub fn is_last_sentence_ended_with_trailing_whitespace(&self, before: &str) -> bool {
        if before.is_empty() {
            return true;
        }
        before.ends_with(char::is_whitespace) && self.is_last_sentence_ended(before)
    }

    /// The text after the most recent delimiter in `before`
    ///
    /// Returns the substring from just after the last delimiter (or
    /// from the start of the text when none occurs) to the end,
    /// stripped of leading delimiter and whitespace artifacts. `None`
    /// when `before` is empty; the sentence in progress may itself be
    /// empty (e.g. right after typing a delimiter).
    pub fn last_sentence(&self, before: &str) -> Option<String> {
        if before.is_empty() {
            return None;
        }
        let tail_start = self
            .delimiters
            .iter()
            .filter_map(|d| before.rfind(d.as_str()).map(|at| at + d.len()))
            .max()
            .unwrap_or(0);
        let tail = &before[tail_start..];
        let tail = tail
            .trim_start_matches(|c: char| {
                c.is_whitespace() || self.delimiters.iter().any(|d| d.starts_with(c))
            })
            .to_string();
        Some(tail)
    }
}
