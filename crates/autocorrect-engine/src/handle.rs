// Autocorrect: top-level integration point for spelling suggestions.
//
// Owns the dictionary behind an `Arc` and the ranking options, and builds
// a borrowing `Ranker` on the fly for each query. Replacing the dictionary
// swaps the `Arc`; a loaded `Dictionary` is never modified, and callers
// that cloned the old `Arc` keep ranking against it undisturbed.

use std::sync::Arc;

use autocorrect_core::Dictionary;

use crate::ranker::Ranker;

/// Default maximum edit distance for a suggestion.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Default number of suggestions returned by [`Autocorrect::suggest`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Options applied to every query made through an [`Autocorrect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocorrectOptions {
    /// Maximum edit distance a suggestion may have.
    pub threshold: usize,
    /// Maximum number of suggestions to return. `0` means no limit.
    pub max_suggestions: usize,
}

impl Default for AutocorrectOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Outcome of checking one word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "status", content = "suggestions", rename_all = "snake_case")
)]
pub enum Correction {
    /// The word is in the dictionary.
    Correct,
    /// Nearest dictionary words, best first.
    Suggestions(Vec<String>),
    /// No dictionary word is within the threshold.
    NoMatches,
}

/// Dictionary plus ranking options, queried one word at a time.
#[derive(Debug, Clone)]
pub struct Autocorrect {
    dictionary: Arc<Dictionary>,
    options: AutocorrectOptions,
}

impl Autocorrect {
    pub fn new(dictionary: Arc<Dictionary>, options: AutocorrectOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// Create a handle with default options.
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self::new(Arc::new(dictionary), AutocorrectOptions::default())
    }

    /// A ranker bound to the current dictionary and threshold.
    pub fn ranker(&self) -> Ranker<'_> {
        Ranker::new(&self.dictionary, self.options.threshold)
    }

    /// Exact dictionary lookup.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Ranked suggestions for `word`, truncated to `max_suggestions`.
    ///
    /// No exact-match short circuit: a dictionary word is returned as its
    /// own first suggestion.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let limit = match self.options.max_suggestions {
            0 => usize::MAX,
            n => n,
        };
        self.ranker()
            .rank(word)
            .into_iter()
            .take(limit)
            .map(str::to_string)
            .collect()
    }

    /// Check a word and produce suggestions only when it is misspelled.
    pub fn check(&self, word: &str) -> Correction {
        if self.is_correct(word) {
            return Correction::Correct;
        }
        let suggestions = self.suggest(word);
        if suggestions.is_empty() {
            Correction::NoMatches
        } else {
            Correction::Suggestions(suggestions)
        }
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Swap in a new dictionary, returning the previous one.
    pub fn replace_dictionary(&mut self, dictionary: Arc<Dictionary>) -> Arc<Dictionary> {
        std::mem::replace(&mut self.dictionary, dictionary)
    }

    pub fn options(&self) -> AutocorrectOptions {
        self.options
    }

    pub fn set_threshold(&mut self, threshold: usize) {
        self.options.threshold = threshold;
    }

    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.options.max_suggestions = max_suggestions;
    }
}
