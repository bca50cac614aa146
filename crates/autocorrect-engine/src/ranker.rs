// Suggestion ranking: filter a word list by edit distance to a query and
// order the survivors by (distance, word).
//
// Each word's distance is computed once while filtering and carried in a
// `Candidate`; sorting works on those cached pairs and never recomputes
// the metric.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use autocorrect_core::{ConfigError, Dictionary};

use crate::distance::{Distance, levenshtein_within};

/// Error type for interrupted ranking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// The cancellation flag was raised before all words were scored.
    #[error("ranking cancelled")]
    Cancelled,
}

/// A dictionary word that passed the threshold, with its distance to the
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub distance: usize,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(other.word))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Score one word. Empty words never qualify.
fn score<'a>(query: &str, word: &'a str, threshold: usize) -> Option<Candidate<'a>> {
    match levenshtein_within(query, word, threshold)? {
        Distance::Edits(distance) => Some(Candidate { word, distance }),
        Distance::EmptyTarget => None,
    }
}

#[cfg(not(feature = "parallel"))]
fn collect_candidates<'a, S>(query: &str, words: &'a [S], threshold: usize) -> Vec<Candidate<'a>>
where
    S: AsRef<str> + Sync,
{
    words
        .iter()
        .filter_map(|w| score(query, w.as_ref(), threshold))
        .collect()
}

#[cfg(feature = "parallel")]
fn collect_candidates<'a, S>(query: &str, words: &'a [S], threshold: usize) -> Vec<Candidate<'a>>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    words
        .par_iter()
        .filter_map(|w| score(query, w.as_ref(), threshold))
        .collect()
}

/// Rank an arbitrary word list against `query`.
///
/// Returns every word whose edit distance to `query` is at most
/// `threshold`, nearest first, ties broken by code point order. Empty
/// words are skipped. The input is not modified.
pub fn rank<'a, S>(query: &str, words: &'a [S], threshold: usize) -> Vec<&'a str>
where
    S: AsRef<str> + Sync,
{
    let mut candidates = collect_candidates(query, words, threshold);
    candidates.sort_unstable();
    candidates.into_iter().map(|c| c.word).collect()
}

/// Ranks queries against one dictionary with a fixed threshold.
///
/// The ranker only borrows the dictionary, so any number of rankers (on any
/// number of threads) can share it.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'d> {
    dictionary: &'d Dictionary,
    threshold: usize,
}

impl<'d> Ranker<'d> {
    pub fn new(dictionary: &'d Dictionary, threshold: usize) -> Self {
        Self {
            dictionary,
            threshold,
        }
    }

    /// Like [`Ranker::new`] for thresholds coming from signed sources.
    /// Negative values are rejected.
    pub fn try_new(dictionary: &'d Dictionary, threshold: i64) -> Result<Self, ConfigError> {
        let threshold =
            usize::try_from(threshold).map_err(|_| ConfigError::InvalidThreshold(threshold))?;
        Ok(Self::new(dictionary, threshold))
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Qualifying words with their distances, in ranked order.
    pub fn candidates(&self, query: &str) -> Vec<Candidate<'d>> {
        let mut candidates = collect_candidates(query, self.dictionary.words(), self.threshold);
        candidates.sort_unstable();
        candidates
    }

    /// Qualifying words in ranked order.
    ///
    /// A query that is itself in the dictionary comes back first, at
    /// distance 0; callers wanting an exact-match short circuit should
    /// check [`Dictionary::contains`] first.
    pub fn rank(&self, query: &str) -> Vec<&'d str> {
        self.candidates(query).into_iter().map(|c| c.word).collect()
    }

    /// Sequential [`Ranker::rank`] that checks `cancel` before scoring each
    /// word.
    pub fn rank_cancellable(
        &self,
        query: &str,
        cancel: &AtomicBool,
    ) -> Result<Vec<&'d str>, RankError> {
        let mut candidates = Vec::new();
        for word in self.dictionary.iter() {
            if cancel.load(AtomicOrdering::Relaxed) {
                return Err(RankError::Cancelled);
            }
            if let Some(candidate) = score(query, word, self.threshold) {
                candidates.push(candidate);
            }
        }
        candidates.sort_unstable();
        Ok(candidates.into_iter().map(|c| c.word).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::levenshtein;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied()).unwrap()
    }

    #[test]
    fn ties_break_alphabetically() {
        let d = dict(&["cat", "bat", "cot", "dog"]);
        let ranker = Ranker::new(&d, 1);
        assert_eq!(ranker.rank("cat"), vec!["cat", "bat", "cot"]);
    }

    #[test]
    fn threshold_zero_excludes_near_misses() {
        let d = dict(&["hello"]);
        assert!(Ranker::new(&d, 0).rank("helo").is_empty());
    }

    #[test]
    fn generous_threshold_returns_everything() {
        let d = dict(&["a", "b", "c"]);
        assert_eq!(Ranker::new(&d, 5).rank("a"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_dictionary_gives_empty_result() {
        let d = Dictionary::default();
        assert!(Ranker::new(&d, 10).rank("anything").is_empty());
    }

    #[test]
    fn candidates_carry_distances() {
        let d = dict(&["cat", "bat", "cot", "dog"]);
        let candidates = Ranker::new(&d, 3).candidates("cat");
        let pairs: Vec<(&str, usize)> = candidates.iter().map(|c| (c.word, c.distance)).collect();
        assert_eq!(pairs, vec![("cat", 0), ("bat", 1), ("cot", 1), ("dog", 3)]);
    }

    #[test]
    fn output_is_sorted_and_within_threshold() {
        let d = dict(&[
            "their", "there", "they", "then", "than", "that", "thin", "this", "these", "those",
            "other", "tether", "heir", "the", "t",
        ]);
        let query = "thier";
        for threshold in 0..=5 {
            let ranked = Ranker::new(&d, threshold).rank(query);
            for w in &ranked {
                assert!(levenshtein(query, w).is_within(threshold));
            }
            for pair in ranked.windows(2) {
                let d0 = levenshtein(query, pair[0]).edits().unwrap();
                let d1 = levenshtein(query, pair[1]).edits().unwrap();
                assert!(d0 < d1 || (d0 == d1 && pair[0] < pair[1]), "{pair:?}");
            }
        }
    }

    #[test]
    fn ranking_is_repeatable() {
        let d = dict(&["spell", "spill", "spells", "smell", "shell", "sell"]);
        let ranker = Ranker::new(&d, 2);
        assert_eq!(ranker.rank("spel"), ranker.rank("spel"));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let d = dict(&["a"]);
        assert_eq!(
            Ranker::try_new(&d, -1).unwrap_err(),
            ConfigError::InvalidThreshold(-1)
        );
        assert_eq!(Ranker::try_new(&d, 2).unwrap().threshold(), 2);
    }

    #[test]
    fn free_rank_skips_empty_words() {
        let words = ["", "ab", "abc"];
        assert_eq!(rank("ab", &words, 1), vec!["ab", "abc"]);
        assert_eq!(rank("ab", &words, usize::MAX), vec!["ab", "abc"]);
    }

    #[test]
    fn free_rank_accepts_owned_strings() {
        let words = vec!["dog".to_string(), "dig".to_string(), "cat".to_string()];
        assert_eq!(rank("dug", &words, 1), vec!["dig", "dog"]);
    }

    #[test]
    fn cancellable_matches_rank_when_not_cancelled() {
        let d = dict(&["cat", "bat", "cot", "dog"]);
        let ranker = Ranker::new(&d, 1);
        let flag = AtomicBool::new(false);
        assert_eq!(ranker.rank_cancellable("cat", &flag).unwrap(), ranker.rank("cat"));
    }

    #[test]
    fn cancelled_flag_stops_ranking() {
        let d = dict(&["cat", "bat"]);
        let flag = AtomicBool::new(true);
        assert_eq!(
            Ranker::new(&d, 1).rank_cancellable("cat", &flag),
            Err(RankError::Cancelled)
        );
    }

    #[test]
    fn candidate_order_is_distance_then_word() {
        let a = Candidate { word: "zz", distance: 1 };
        let b = Candidate { word: "aa", distance: 2 };
        let c = Candidate { word: "ab", distance: 2 };
        assert!(a < b);
        assert!(b < c);
    }
}
