//! Shared types for autocorrect.
//!
//! - [`dictionary`] -- Immutable, sorted, de-duplicated word list
//! - [`loader`] -- Dictionary text file parsing
//! - [`error`] -- Error types shared by the engine and the CLI tools

pub mod dictionary;
pub mod error;
pub mod loader;

pub use dictionary::Dictionary;
pub use error::{ConfigError, DictionaryError};
pub use loader::{load_dictionary, parse_dictionary};
