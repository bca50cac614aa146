// Levenshtein edit distance over Unicode scalar values.
//
// The second argument is the dictionary side. An empty dictionary word has
// no distance at all and yields `Distance::EmptyTarget`, which replaces the
// numeric `-1` sentinel of older autocorrect tools. An empty *query* is an
// ordinary input: its distance to `b` is the length of `b`.

use std::cmp::min;

/// Result of comparing a query against a dictionary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Distance {
    /// Minimum number of single-character insertions, deletions or
    /// substitutions.
    Edits(usize),
    /// The target word was empty.
    EmptyTarget,
}

impl Distance {
    /// The edit count, or `None` for [`Distance::EmptyTarget`].
    pub fn edits(self) -> Option<usize> {
        match self {
            Distance::Edits(n) => Some(n),
            Distance::EmptyTarget => None,
        }
    }

    /// Numeric form compatible with tools that report `-1` for an empty
    /// target.
    pub fn as_i64(self) -> i64 {
        match self {
            Distance::Edits(n) => n as i64,
            Distance::EmptyTarget => -1,
        }
    }

    /// Returns `true` for a genuine distance no greater than `threshold`.
    /// [`Distance::EmptyTarget`] is never within any threshold.
    pub fn is_within(self, threshold: usize) -> bool {
        matches!(self, Distance::Edits(n) if n <= threshold)
    }
}

/// Compute the Levenshtein distance from `a` to `b`.
///
/// Fills the full `(len(a) + 1) x (len(b) + 1)` table; row 0 and column 0
/// hold `0..=len`, and each cell takes the diagonal on a character match
/// or `1 + min(up, left, diagonal)` otherwise.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein(a: &str, b: &str) -> Distance {
    if b.is_empty() {
        return Distance::EmptyTarget;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let len_a = a_chars.len();
    let len_b = b_chars.len();

    let mut matrix = vec![vec![0usize; len_b + 1]; len_a + 1];
    for i in 0..=len_a {
        matrix[i][0] = i;
    }
    for j in 0..=len_b {
        matrix[0][j] = j;
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            matrix[i][j] = if a_chars[i - 1] == b_chars[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + min(
                    min(matrix[i - 1][j], matrix[i][j - 1]),
                    matrix[i - 1][j - 1],
                )
            };
        }
    }

    Distance::Edits(matrix[len_a][len_b])
}

/// Threshold-aware variant of [`levenshtein`].
///
/// Returns the same value as `levenshtein(a, b)` when that value is
/// `EmptyTarget` or at most `max` edits, and `None` otherwise. Uses two
/// rows instead of the full table and stops as soon as the length
/// difference or a whole row exceeds `max`; row minima never decrease, so
/// no later row can come back under the bound.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<Distance> {
    if b.is_empty() {
        return Some(Distance::EmptyTarget);
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let len_a = a_chars.len();
    let len_b = b_chars.len();

    if len_a.abs_diff(len_b) > max {
        return None;
    }
    if len_a == 0 {
        // len_b <= max by the length check above
        return Some(Distance::Edits(len_b));
    }

    let mut prev_row: Vec<usize> = (0..=len_b).collect();
    let mut curr_row = vec![0usize; len_b + 1];

    for i in 1..=len_a {
        curr_row[0] = i;
        let mut row_min = i;

        for j in 1..=len_b {
            curr_row[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev_row[j - 1]
            } else {
                1 + min(min(prev_row[j], curr_row[j - 1]), prev_row[j - 1])
            };
            row_min = min(row_min, curr_row[j]);
        }

        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len_b];
    (distance <= max).then_some(Distance::Edits(distance))
}
