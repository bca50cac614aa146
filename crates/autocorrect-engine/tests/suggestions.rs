//! End-to-end suggestion tests against the fixture dictionaries in
//! `tests/fixtures/`.

use std::path::PathBuf;
use std::sync::Arc;

use autocorrect_core::load_dictionary;
use autocorrect_engine::{
    Autocorrect, AutocorrectOptions, Correction, Dictionary, Ranker, levenshtein,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn small() -> Dictionary {
    let path = fixture("small.txt");
    load_dictionary(&path).unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

#[test]
fn counted_fixture_loads_every_word() {
    let dict = small();
    assert_eq!(dict.len(), 20);
    assert!(dict.contains("kitten"));
    assert!(!dict.contains("kiten"));
}

#[test]
fn one_edit_neighbours_in_alphabetical_order() {
    let dict = small();
    let ranker = Ranker::new(&dict, 1);
    assert_eq!(ranker.rank("helo"), vec!["hello", "helm", "help", "hero"]);
    assert_eq!(ranker.rank("ct"), vec!["cat", "cot", "cut"]);
}

#[test]
fn nearer_words_come_first() {
    let dict = small();
    let ranker = Ranker::new(&dict, 3);
    assert_eq!(
        ranker.rank("sittin"),
        vec!["sitting", "kitten", "mitten", "smitten"]
    );
}

#[test]
fn in_dictionary_query_ranks_itself_first() {
    let dict = small();
    let ranked = Ranker::new(&dict, 1).rank("cat");
    assert_eq!(ranked, vec!["cat", "bat", "cats", "coat", "cot", "cut"]);
}

#[test]
fn empty_query_matches_short_words() {
    let dict = small();
    assert_eq!(
        Ranker::new(&dict, 3).rank(""),
        vec!["bat", "cat", "cot", "cut", "dog"]
    );
}

#[test]
fn distant_query_has_no_matches() {
    let ac = Autocorrect::new(Arc::new(small()), AutocorrectOptions::default());
    assert_eq!(ac.check("zzzzzz"), Correction::NoMatches);
}

#[test]
fn check_truncates_to_max_suggestions() {
    let options = AutocorrectOptions {
        threshold: 1,
        max_suggestions: 2,
    };
    let ac = Autocorrect::new(Arc::new(small()), options);
    assert_eq!(ac.check("cat"), Correction::Correct);
    assert_eq!(
        ac.check("cet"),
        Correction::Suggestions(vec!["cat".into(), "cot".into()])
    );
}

#[test]
fn plain_fixture_loads_without_header() {
    let path = fixture("plain.txt");
    let dict = load_dictionary(&path).unwrap();
    assert_eq!(dict.len(), 5);
    assert_eq!(Ranker::new(&dict, 1).rank("spel"), vec!["spell", "spelt"]);
}

#[test]
fn ranked_distances_never_exceed_threshold() {
    let dict = small();
    for query in ["thier", "mitens", "hlep", "dgo", "bathe"] {
        for threshold in 0..=4 {
            for word in Ranker::new(&dict, threshold).rank(query) {
                assert!(
                    levenshtein(query, word).is_within(threshold),
                    "{query} -> {word} at {threshold}"
                );
            }
        }
    }
}

#[test]
fn candidates_agree_with_rank() {
    let dict = small();
    let ranker = Ranker::new(&dict, 2);
    let words: Vec<&str> = ranker.candidates("thier").iter().map(|c| c.word).collect();
    assert_eq!(words, ranker.rank("thier"));
    assert_eq!(words, vec!["their", "there", "they"]);
}
