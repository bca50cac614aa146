// Dictionary text file parsing.
//
// Two layouts are accepted:
//
//   counted   first non-blank line is the word count N, followed by N
//             lines of one word each
//   plain     one word per line, blank lines skipped
//
// A file whose first non-blank line parses as an unsigned integer is
// always read as the counted layout.

use std::path::Path;

use crate::dictionary::Dictionary;
use crate::error::DictionaryError;

/// Read and parse a dictionary file.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dictionary(&text)
}

/// Parse dictionary text in either the counted or the plain layout.
pub fn parse_dictionary(text: &str) -> Result<Dictionary, DictionaryError> {
    // (1-based line number, trimmed content)
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .collect();

    let Some(header_idx) = lines.iter().position(|(_, l)| !l.is_empty()) else {
        return Ok(Dictionary::default());
    };

    match lines[header_idx].1.parse::<usize>() {
        Ok(expected) => parse_counted(&lines[header_idx + 1..], expected),
        Err(_) => Dictionary::from_words(
            lines
                .iter()
                .filter(|(_, l)| !l.is_empty())
                .map(|(_, l)| *l),
        ),
    }
}

fn parse_counted(body: &[(usize, &str)], expected: usize) -> Result<Dictionary, DictionaryError> {
    let end = body
        .iter()
        .rposition(|(_, l)| !l.is_empty())
        .map_or(0, |i| i + 1);
    let body = &body[..end];

    if let Some(&(line, _)) = body.iter().find(|(_, l)| l.is_empty()) {
        return Err(DictionaryError::EmptyWord { line });
    }
    if body.len() != expected {
        return Err(DictionaryError::CountMismatch {
            expected,
            found: body.len(),
        });
    }
    Dictionary::from_words(body.iter().map(|(_, l)| *l))
}
