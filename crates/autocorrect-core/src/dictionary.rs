// Immutable word list shared read-only by every ranking query.

use crate::error::DictionaryError;

/// A sorted, de-duplicated sequence of non-empty words.
///
/// Words are ordered by byte value, which for UTF-8 is the same as
/// code point order. A `Dictionary` is never mutated after construction;
/// reloading means building a new one and swapping the reference
/// (typically an `Arc<Dictionary>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary words.
    ///
    /// Words are sorted and duplicates removed. An empty word is rejected
    /// with [`DictionaryError::EmptyWord`], whose `line` is the 1-based
    /// position of the word in the input.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected = Vec::new();
        for (i, word) in words.into_iter().enumerate() {
            let word = word.into();
            if word.is_empty() {
                return Err(DictionaryError::EmptyWord { line: i + 1 });
            }
            collected.push(word);
        }
        collected.sort_unstable();
        collected.dedup();
        Ok(Self { words: collected })
    }

    /// Exact-match lookup by binary search.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All words in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
