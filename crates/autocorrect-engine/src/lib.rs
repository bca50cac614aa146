//! Dictionary suggestion engine.
//!
//! Given a word that is not in the dictionary, finds dictionary words within
//! a fixed edit distance and orders them nearest first, then alphabetically.
//!
//! # Architecture
//!
//! - [`distance`] -- Levenshtein distance with an explicit empty-target case
//! - [`ranker`] -- Threshold filtering and `(distance, word)` ordering
//! - [`handle`] -- [`Autocorrect`], owning a dictionary and query options
//!
//! # Features
//!
//! - `parallel` -- score dictionary words on the rayon thread pool
//! - `serde` -- `Serialize` for [`Candidate`], [`Correction`] and [`Distance`]

pub mod distance;
pub mod handle;
pub mod ranker;

pub use autocorrect_core::{ConfigError, Dictionary, DictionaryError};
pub use distance::{Distance, levenshtein, levenshtein_within};
pub use handle::{Autocorrect, AutocorrectOptions, Correction};
pub use ranker::{Candidate, RankError, Ranker, rank};
