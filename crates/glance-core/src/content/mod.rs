//! Word store and document sources.

mod static_source;
mod text_utils;

use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Index};

use log::debug;

pub use static_source::{StaticDocument, default_sample_document};
pub use text_utils::tokenize;

/// Marker appended to the head fragment of a synthesized hyphenation split.
pub const HYPHEN_MARKER: char = '-';

/// One token of the word store.
///
/// `continued` marks the head fragment of a split produced by line layout:
/// the token is rendered with a trailing [`HYPHEN_MARKER`] and its remainder
/// lives in the next token. Hyphens present in the source text are plain
/// characters and never carry the flag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word {
    text: String,
    continued: bool,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            continued: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_continued(&self) -> bool {
        self.continued
    }

    /// Writes the visible form of the word into `out`.
    pub fn push_display(&self, out: &mut String) {
        out.push_str(&self.text);
        if self.continued {
            out.push(HYPHEN_MARKER);
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if self.continued {
            write!(f, "{HYPHEN_MARKER}")?;
        }
        Ok(())
    }
}

/// Ordered, mutable word arena shared by every line frame.
///
/// Frames refer to words by index only. Splits and merges shift every index
/// after the edit point; callers own the bookkeeping for their ranges.
#[derive(Clone, Debug, Default)]
pub struct WordStore {
    words: Vec<Word>,
    revision: u32,
}

impl WordStore {
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            revision: 0,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Word::new).collect(),
            revision: 0,
        }
    }

    /// Tokenizes `text` and builds a store from the resulting words.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(tokenize(text))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in `[begin, end)`, clamped to the store.
    pub fn range(&self, begin: usize, end: usize) -> &[Word] {
        let end = end.min(self.words.len());
        let begin = begin.min(end);
        &self.words[begin..end]
    }

    /// Bumped on every split and merge.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Number of synthesized splits currently present.
    pub fn split_count(&self) -> usize {
        self.words.iter().filter(|word| word.continued).count()
    }

    /// Maps an index into the split-free word space of the same document.
    pub fn canonical_index(&self, index: usize) -> usize {
        let index = index.min(self.words.len());
        index - self.words[..index].iter().filter(|w| w.continued).count()
    }

    /// Inverse of [`Self::canonical_index`]: first token of canonical word
    /// `canonical`.
    pub fn index_from_canonical(&self, canonical: usize) -> usize {
        let mut seen = 0usize;
        for (index, word) in self.words.iter().enumerate() {
            if seen == canonical {
                return index;
            }
            if !word.continued {
                seen += 1;
            }
        }
        self.words.len()
    }

    /// Splits the word at `index` at its character midpoint.
    ///
    /// The head keeps `index` and becomes a continued fragment; the tail is
    /// inserted at `index + 1` and inherits the original continuation state.
    /// Returns `false` when the word has fewer than two characters.
    pub fn split(&mut self, index: usize) -> bool {
        let Some(word) = self.words.get_mut(index) else {
            return false;
        };

        let chars = word.text.chars().count();
        if chars < 2 {
            return false;
        }

        let Some((byte_mid, _)) = word.text.char_indices().nth(chars / 2) else {
            return false;
        };

        let tail = Word {
            text: word.text.split_off(byte_mid),
            continued: word.continued,
        };
        word.continued = true;
        debug_assert!(!word.text.is_empty() && !tail.text.is_empty());

        debug!(
            "content: split index={} head={:?} tail={:?}",
            index, word.text, tail.text
        );
        self.words.insert(index + 1, tail);
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Re-joins the continued fragment at `index` with its successor.
    pub fn merge_with_next(&mut self, index: usize) -> bool {
        if index + 1 >= self.words.len() || !self.words[index].continued {
            return false;
        }

        let tail = self.words.remove(index + 1);
        let head = &mut self.words[index];
        head.text.push_str(&tail.text);
        head.continued = tail.continued;

        debug!("content: merge index={} word={:?}", index, head.text);
        self.revision = self.revision.wrapping_add(1);
        true
    }
}

impl Index<usize> for WordStore {
    type Output = Word;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

/// Producer of the initial word sequence for a document.
pub trait DocumentSource {
    type Error;

    /// Stable key used to file per-document session state.
    fn key(&self) -> &str;

    /// Reads the whole document into a fresh store.
    fn load(&mut self) -> Result<WordStore, Self::Error>;
}
