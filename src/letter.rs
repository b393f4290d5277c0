//! ASCII letters, optionally bounded to a range of the alphabet.

use serde::Deserialize;
use serde::Serialize;

use crate::Sampler;
use crate::UniformSource;

pub const LOWERCASE: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    #[default]
    Lower,
    Upper,
    /// Both cases.
    Mixed,
}

/// Position of an ASCII letter in the alphabet, ignoring case.
pub(crate) fn alphabet_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| letter.to_ascii_lowercase() as usize - 'a' as usize)
}

impl<S: UniformSource> Sampler<S> {
    /// Draws a letter between `start` and `end` (inclusive, either order).
    ///
    /// Casing defaults to lowercase. Missing or non-letter bounds fall back
    /// to the ends of the alphabet; bounds match case-insensitively, so
    /// `letter(Some(Casing::Upper), Some('x'), None)` yields `X`, `Y` or `Z`.
    pub fn letter(&self, casing: Option<Casing>, start: Option<char>, end: Option<char>) -> char {
        let start = start.and_then(alphabet_index).unwrap_or(0);
        let end = end.and_then(alphabet_index).unwrap_or(LOWERCASE.len() - 1);
        let (start, end) = crate::normalize_min_max(start, end);

        let pool: Vec<char> = match casing.unwrap_or_default() {
            Casing::Lower => LOWERCASE[start..=end].to_vec(),
            Casing::Upper => UPPERCASE[start..=end].to_vec(),
            Casing::Mixed => LOWERCASE[start..=end]
                .iter()
                .chain(&UPPERCASE[start..=end])
                .copied()
                .collect(),
        };
        pool[self.index(pool.len())]
    }
}
